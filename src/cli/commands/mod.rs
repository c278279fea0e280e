//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Live session command handler.
pub mod live;
