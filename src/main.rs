use anyhow::Result;
use clap::Parser;

use jusoor_cli::cli::commands::{configure, live};
use jusoor_cli::cli::{Args, Command};
use jusoor_cli::languages::{print_languages, validate_language};
use jusoor_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Live { from, to, endpoint }) => {
            run_live(from, to, endpoint).await?;
        }
        None => {
            run_live(args.from, args.to, args.endpoint).await?;
        }
    }

    Ok(())
}

async fn run_live(
    from: Option<String>,
    to: Option<String>,
    endpoint: Option<String>,
) -> Result<()> {
    if let Some(ref lang) = from {
        validate_language(lang)?;
    }
    if let Some(ref lang) = to {
        validate_language(lang)?;
    }

    let options = live::LiveOptions { from, to, endpoint };
    live::run_live(options).await
}
