//! Configuration file management.

mod manager;

pub use manager::{
    AuthConfig, ConfigFile, ConfigManager, JusoorConfig, ResolveOptions, ResolvedConfig,
    resolve_config,
};
