use anyhow::Result;
use std::sync::Arc;

use crate::api::ServiceClient;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::credentials::SessionCredentials;
use crate::live::{LiveConfig, LiveRepl};
use crate::status;
use crate::ui::Style;

pub struct LiveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
}

pub async fn run_live(options: LiveOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            from: options.from,
            to: options.to,
            endpoint: options.endpoint,
        },
        &config_file,
    )?;
    let credentials = SessionCredentials::resolve(&config_file.auth)?;

    status!(
        "{}",
        Style::secondary(format!("Connecting to {}", resolved.endpoint))
    );

    let live_config = LiveConfig {
        input_language: resolved.input_language,
        output_language: resolved.output_language,
        user_email: credentials.email().map(str::to_string),
        send_timeout: resolved.send_timeout,
    };

    let api = Arc::new(ServiceClient::new(resolved.endpoint, credentials));
    let mut repl = LiveRepl::new(live_config, api);
    repl.run().await
}
