use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;

/// Default language direction for live sessions (the service's primary pair).
const DEFAULT_INPUT_LANGUAGE: &str = "en";
const DEFAULT_OUTPUT_LANGUAGE: &str = "ar";

/// Default bound on one message's translate-and-record round trip.
const DEFAULT_SEND_TIMEOUT_SECS: u64 = 30;

/// Default settings in the `[jusoor]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JusoorConfig {
    /// Service API base URL.
    pub endpoint: Option<String>,
    /// Default source language (ISO 639-1 code).
    pub from: Option<String>,
    /// Default target language (ISO 639-1 code).
    pub to: Option<String>,
    /// Seconds before an unresolved message send is marked failed.
    pub send_timeout_secs: Option<u64>,
}

/// Authentication settings in the `[auth]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// API token stored directly in config (not recommended).
    #[serde(default)]
    pub token: Option<String>,
    /// Environment variable name containing the API token.
    #[serde(default)]
    pub token_env: Option<String>,
    /// Email of the signed-in user, for display only.
    #[serde(default)]
    pub email: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/jusoor/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub jusoor: JusoorConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Service API base URL.
    pub endpoint: String,
    /// Source language for the session.
    pub input_language: String,
    /// Target language for the session.
    pub output_language: String,
    /// Bound on one message send's round trip.
    pub send_timeout: Duration,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source language override.
    pub from: Option<String>,
    /// Target language override.
    pub to: Option<String>,
    /// Endpoint override.
    pub endpoint: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values; the language
/// direction falls back to the service's primary pair (en -> ar).
///
/// # Errors
///
/// Returns an error if no endpoint is configured anywhere.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.jusoor.endpoint.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'endpoint'\n\n\
                 Please provide it via:\n  \
                 - CLI option: jusoor --endpoint <url>\n  \
                 - Config file: ~/.config/jusoor/config.toml"
            )
        })?;

    let input_language = options
        .from
        .as_ref()
        .or(config_file.jusoor.from.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_INPUT_LANGUAGE.to_string());

    let output_language = options
        .to
        .as_ref()
        .or(config_file.jusoor.to.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_OUTPUT_LANGUAGE.to_string());

    let send_timeout = Duration::from_secs(
        config_file
            .jusoor
            .send_timeout_secs
            .unwrap_or(DEFAULT_SEND_TIMEOUT_SECS),
    );

    Ok(ResolvedConfig {
        endpoint,
        input_language,
        output_language,
        send_timeout,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/jusoor/config.toml`
    /// or `~/.config/jusoor/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}
