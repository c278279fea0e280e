//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. All helpers
//! honor the global no-color setting.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    fn colored<T: Display>(text: T, paint: impl FnOnce(&T) -> String) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            paint(&text)
        }
    }

    /// Style for section headers (e.g., "Conversation", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        Self::colored(text, |t| format!("{}", t.bold()))
    }

    /// Style for labels/keys (e.g., "session", "pair")
    pub fn label<T: Display>(text: T) -> String {
        Self::colored(text, |t| format!("{}", t.dimmed()))
    }

    /// Style for primary values (e.g., session ids, translations)
    pub fn value<T: Display>(text: T) -> String {
        Self::colored(text, |t| format!("{}", t.cyan()))
    }

    /// Style for secondary/supplementary info (e.g., endpoints, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        Self::colored(text, |t| format!("{}", t.dimmed()))
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        Self::colored(text, |t| format!("{}", t.green()))
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        Self::colored(text, |t| format!("{}", t.red().bold()))
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        Self::colored(text, |t| format!("{}", t.yellow()))
    }

    /// Style for commands (e.g., "/status", "/end")
    pub fn command<T: Display>(text: T) -> String {
        Self::colored(text, |t| format!("{}", t.green()))
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        Self::colored(text, |t| format!("{}", t.yellow()))
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        Self::colored(text, |t| format!("{}", t.dimmed().italic()))
    }

    /// Style for version info
    pub fn version<T: Display>(text: T) -> String {
        Self::colored(text, |t| format!("{}", t.dimmed()))
    }
}
