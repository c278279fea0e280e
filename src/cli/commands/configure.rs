//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{AuthConfig, ConfigManager, JusoorConfig};
use crate::credentials::DEFAULT_TOKEN_ENV;
use crate::languages::SUPPORTED_LANGUAGES;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `--show`, prints the current configuration. Otherwise interactively
/// edits the endpoint, default language pair, and token source.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        return show_config();
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn show_config() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        config
            .jusoor
            .endpoint
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}       {}",
        Style::label("from"),
        config
            .jusoor
            .from
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::code)
    );
    println!(
        "  {}         {}",
        Style::label("to"),
        config
            .jusoor
            .to
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::code)
    );
    println!(
        "  {}  {}",
        Style::label("token_env"),
        config
            .auth
            .token_env
            .as_deref()
            .map_or_else(|| Style::secondary(format!("(default: {DEFAULT_TOKEN_ENV})")), Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("token"),
        if config.auth.token.is_some() {
            Style::value("(set)")
        } else {
            Style::secondary("(not set)")
        }
    );
    println!();
    println!(
        "{}",
        Style::secondary(format!("File: {}", manager.config_path().display()))
    );

    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    let endpoint = prompt_endpoint(config.jusoor.endpoint.as_deref())?;
    let from = select_language("Default source language:", config.jusoor.from.as_deref())?;
    let to = select_language("Default target language:", config.jusoor.to.as_deref())?;
    let token_env = prompt_token_env(config.auth.token_env.as_deref())?;

    config.jusoor = JusoorConfig {
        endpoint: Some(endpoint),
        from: Some(from),
        to: Some(to),
        send_timeout_secs: config.jusoor.send_timeout_secs,
    };
    config.auth = AuthConfig {
        token_env: Some(token_env),
        ..config.auth.clone()
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn prompt_endpoint(default: Option<&str>) -> Result<String> {
    let mut prompt =
        Text::new("Service endpoint:").with_help_message("Base URL of the Jusoor API");

    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    let endpoint = prompt.prompt()?;

    if endpoint.trim().is_empty() {
        bail!("Endpoint cannot be empty");
    }

    Ok(endpoint.trim().to_string())
}

fn select_language(message: &str, default: Option<&str>) -> Result<String> {
    // Build options with format "code - Name"
    let options: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect();

    let default_index = default
        .and_then(|d| SUPPORTED_LANGUAGES.iter().position(|(code, _)| *code == d))
        .unwrap_or(0);

    let selection = Select::new(message, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - Name" format
    let code = selection.split(" - ").next().unwrap_or(&selection);

    Ok(code.to_string())
}

fn prompt_token_env(default: Option<&str>) -> Result<String> {
    let token_env = Text::new("Token environment variable:")
        .with_default(default.unwrap_or(DEFAULT_TOKEN_ENV))
        .with_help_message("Environment variable read for the API token")
        .prompt()?;

    if token_env.trim().is_empty() {
        bail!("Environment variable name cannot be empty");
    }

    Ok(token_env.trim().to_string())
}
