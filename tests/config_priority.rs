//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file
//! settings. Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults (en -> ar, 30s send timeout)

use std::time::Duration;

use jusoor_cli::config::{
    AuthConfig, ConfigFile, JusoorConfig, ResolveOptions, resolve_config,
};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        jusoor: JusoorConfig {
            endpoint: Some("https://config.jusoor.example".to_string()),
            from: Some("fr".to_string()),
            to: Some("en".to_string()),
            send_timeout_secs: Some(10),
        },
        auth: AuthConfig::default(),
    }
}

#[test]
fn test_cli_endpoint_overrides_config_endpoint() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        from: None,
        to: None,
        endpoint: Some("http://localhost:8000".to_string()),
    };

    let resolved = resolve_config(&options, &config).expect("resolves");

    assert_eq!(resolved.endpoint, "http://localhost:8000");
    // Non-overridden settings still come from the file.
    assert_eq!(resolved.input_language, "fr");
    assert_eq!(resolved.output_language, "en");
}

#[test]
fn test_cli_languages_override_config_languages() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        from: Some("en".to_string()),
        to: Some("ar".to_string()),
        endpoint: None,
    };

    let resolved = resolve_config(&options, &config).expect("resolves");

    assert_eq!(resolved.endpoint, "https://config.jusoor.example");
    assert_eq!(resolved.input_language, "en");
    assert_eq!(resolved.output_language, "ar");
}

#[test]
fn test_builtin_direction_defaults_apply_last() {
    let config = ConfigFile {
        jusoor: JusoorConfig {
            endpoint: Some("http://localhost:8000".to_string()),
            ..JusoorConfig::default()
        },
        auth: AuthConfig::default(),
    };

    let resolved = resolve_config(&ResolveOptions::default(), &config).expect("resolves");

    assert_eq!(resolved.input_language, "en");
    assert_eq!(resolved.output_language, "ar");
    assert_eq!(resolved.send_timeout, Duration::from_secs(30));
}

#[test]
fn test_file_timeout_is_honored() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).expect("resolves");

    assert_eq!(resolved.send_timeout, Duration::from_secs(10));
}

#[test]
fn test_missing_endpoint_is_an_error() {
    let result = resolve_config(&ResolveOptions::default(), &ConfigFile::default());

    assert!(result.is_err());
    let message = result.err().map(|e| e.to_string()).unwrap_or_default();
    assert!(message.contains("endpoint"));
    assert!(message.contains("config.toml"));
}
