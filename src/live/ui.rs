//! Live mode UI components.

use crate::ui::Style;

use super::controller::{Direction, SessionState};
use super::timeline::{TranslationState, Turn};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Live Translation Mode",
        Style::header("jusoor"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_status(
    state: SessionState,
    session_id: Option<&str>,
    direction: &Direction,
    user: Option<&str>,
) {
    println!("{}", Style::header("Session status"));
    println!(
        "  {}    {}",
        Style::label("state"),
        Style::value(state.to_string())
    );
    println!(
        "  {}  {}",
        Style::label("session"),
        session_id.map_or_else(|| Style::secondary("(none)"), Style::value)
    );
    println!(
        "  {}     {} {} {}",
        Style::label("pair"),
        Style::code(&direction.input_language),
        Style::secondary("→"),
        Style::code(&direction.output_language)
    );
    if let Some(user) = user {
        println!("  {}     {}", Style::label("user"), Style::secondary(user));
    }
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}     {}",
        Style::command("/start"),
        Style::secondary("Start a live session")
    );
    println!(
        "  {}       {}",
        Style::command("/end"),
        Style::secondary("End the current session")
    );
    println!(
        "  {}    {}",
        Style::command("/status"),
        Style::secondary("Show session status")
    );
    println!(
        "  {}  {}",
        Style::command("/timeline"),
        Style::secondary("Show the full conversation")
    );
    println!(
        "  {}      {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}      {}",
        Style::command("/quit"),
        Style::secondary("Exit live mode")
    );
    println!();
}

/// Prints a turn the moment it is submitted, in its pending form.
pub fn print_turn_pending(turn: &Turn) {
    println!(
        "  {} {}  {}",
        Style::secondary(format!("#{}", turn.id())),
        turn.original(),
        Style::hint(turn.translated())
    );
}

/// Prints a turn once its round trip has resolved.
pub fn print_turn_resolved(turn: &Turn) {
    match turn.state() {
        TranslationState::Completed => println!(
            "{} {} {}  {}",
            Style::success("✓"),
            Style::secondary(format!("#{}", turn.id())),
            turn.original(),
            Style::value(turn.translated())
        ),
        TranslationState::Failed => println!(
            "{} {} {}  {}",
            Style::error("✗"),
            Style::secondary(format!("#{}", turn.id())),
            turn.original(),
            Style::warning(turn.translated())
        ),
        TranslationState::Pending => print_turn_pending(turn),
    }
}

/// Prints the whole conversation in submission order.
pub fn print_timeline(turns: &[Turn]) {
    if turns.is_empty() {
        println!("{}", Style::secondary("No messages yet."));
        println!();
        return;
    }

    println!("{}", Style::header("Conversation"));
    for turn in turns {
        let marker = match turn.state() {
            TranslationState::Pending => Style::secondary("…"),
            TranslationState::Completed => Style::success("✓"),
            TranslationState::Failed => Style::error("✗"),
        };
        println!(
            "  {} {} {} {}  {}",
            marker,
            Style::secondary(turn.created_at().format("%H:%M:%S").to_string()),
            Style::secondary(format!("#{}", turn.id())),
            turn.original(),
            match turn.state() {
                TranslationState::Completed => Style::value(turn.translated()),
                TranslationState::Pending => Style::hint(turn.translated()),
                TranslationState::Failed => Style::warning(turn.translated()),
            }
        );
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
