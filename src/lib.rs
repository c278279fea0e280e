//! # jusoor - Live Translation Client
//!
//! `jusoor` is a command-line client for the Jusoor translation service,
//! centered on its live conversational translation mode: an interactive
//! session where each submitted message is translated and logged to the
//! session on the server as you type.
//!
//! ## Features
//!
//! - **Live sessions**: start a session, converse, end it - the session
//!   lifecycle is tracked explicitly and stray events can never corrupt it
//! - **Optimistic timeline**: every message appears immediately and is
//!   reconciled by id when its translation arrives, so slow responses never
//!   block new messages and out-of-order completions land on the right turn
//! - **Typed requests**: the service's multi-modal translate endpoint is
//!   driven through tagged, validated payloads
//!
//! ## Quick Start
//!
//! ```bash
//! # Start a live session with configured defaults
//! jusoor
//!
//! # Override the language pair
//! jusoor --from en --to ar
//!
//! # List supported language codes
//! jusoor languages
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/jusoor/config.toml`:
//!
//! ```toml
//! [jusoor]
//! endpoint = "https://api.jusoor.example"
//! from = "en"
//! to = "ar"
//!
//! [auth]
//! token_env = "JUSOOR_TOKEN"
//! email = "user@example.com"
//! ```

/// HTTP client for the Jusoor translation service.
pub mod api;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Session credentials and token resolution.
pub mod credentials;

/// Language code validation and supported languages.
pub mod languages;

/// Live conversational translation sessions.
pub mod live;

/// Typed payloads for the multi-modal translate endpoint.
pub mod media;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
