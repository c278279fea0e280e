use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jusoor")]
#[command(about = "Live translation client for the Jusoor service")]
#[command(version)]
pub struct Args {
    /// Source language code (ISO 639-1, e.g. en)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (ISO 639-1, e.g. ar)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Service API base URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Suppress non-essential output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive live translation session (the default)
    Live {
        /// Source language code (ISO 639-1, e.g. en)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Target language code (ISO 639-1, e.g. ar)
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Service API base URL
        #[arg(short = 'e', long)]
        endpoint: Option<String>,
    },
    /// Configure jusoor settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported language codes
    Languages,
}
