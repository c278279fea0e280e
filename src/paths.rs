//! XDG-style path utilities for the configuration directory.
//!
//! Path resolution prefers the XDG Base Directory Specification over
//! OS-specific locations so behavior is consistent across platforms.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for jusoor.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/jusoor` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/jusoor` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join("jusoor"));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join("jusoor"))
}
