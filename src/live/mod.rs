//! Live conversational translation sessions.
//!
//! The only stateful part of the client: a session lifecycle state machine
//! ([`LiveController`]), an append-only conversation log reconciled by turn
//! id ([`Timeline`]), and an interactive REPL that renders both
//! ([`LiveRepl`]).

/// Slash command parsing and autocomplete.
pub mod command;
mod controller;
mod repl;
mod timeline;
mod ui;

pub use controller::{Direction, LiveController, LiveEvent, SessionState};
pub use repl::{LiveConfig, LiveRepl};
pub use timeline::{
    FAILED_PLACEHOLDER, Outcome, PENDING_PLACEHOLDER, Timeline, TranslationState, Turn, TurnId,
};
