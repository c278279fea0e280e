use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::api::LiveApi;
use crate::ui::{Spinner, Style};
use crate::{status, warn};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::controller::{Direction, LiveController, LiveEvent, SessionState};
use super::timeline::Timeline;
use super::ui;

/// Configuration for a live translation session.
#[derive(Debug, Clone)]
pub struct LiveConfig {
    /// Source language code.
    pub input_language: String,
    /// Target language code.
    pub output_language: String,
    /// Signed-in user, for display only.
    pub user_email: Option<String>,
    /// Bound on one message send's round trip.
    pub send_timeout: Duration,
}

/// Interactive live translation session.
///
/// Surfaces user intents (start, end, send, quit) into the controller and
/// renders session and timeline state as it changes.
pub struct LiveRepl {
    config: LiveConfig,
    controller: LiveController,
    events: mpsc::UnboundedReceiver<LiveEvent>,
}

impl LiveRepl {
    /// Creates a live session REPL over the given service client.
    pub fn new(config: LiveConfig, api: Arc<dyn LiveApi>) -> Self {
        let direction = Direction {
            input_language: config.input_language.clone(),
            output_language: config.output_language.clone(),
        };
        let (controller, events) = LiveController::new(api, direction, config.send_timeout);

        Self {
            config,
            controller,
            events,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();
        self.start_session().await;

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            self.drain_events();

            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(
                    "Type a message to translate, /help for commands, Ctrl+C to quit",
                )
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.handle_send(&text);
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.shutdown().await;
        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Start => {
                if self.controller.state() == SessionState::Active {
                    ui::print_error("A live session is already active");
                } else {
                    self.start_session().await;
                }
                true
            }
            SlashCommand::End => {
                self.end_session().await;
                true
            }
            SlashCommand::Status => {
                ui::print_status(
                    self.controller.state(),
                    self.controller.session_id(),
                    self.controller.direction(),
                    self.config.user_email.as_deref(),
                );
                true
            }
            SlashCommand::Timeline => {
                self.controller.with_timeline(|t| ui::print_timeline(t.turns()));
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    fn handle_send(&mut self, text: &str) {
        match self.controller.send_message(text) {
            Some(id) => {
                // Optimistic echo: the turn is visible before its round
                // trip resolves.
                self.controller.with_timeline(|t| {
                    if let Some(turn) = t.get(id) {
                        ui::print_turn_pending(turn);
                    }
                });
            }
            None => {
                ui::print_error("No active session");
                println!("{}", Style::hint("Run /start to begin translating"));
            }
        }
    }

    async fn start_session(&mut self) {
        let spinner = Spinner::new("Starting live session...");
        match self.controller.start_session().await {
            Ok(session_id) => {
                spinner.stop();
                println!(
                    "{} Session {} started ({} {} {})",
                    Style::success("●"),
                    Style::value(&session_id),
                    Style::code(&self.config.input_language),
                    Style::secondary("→"),
                    Style::code(&self.config.output_language)
                );
                println!();
            }
            Err(e) => {
                spinner.stop();
                ui::print_error(&e.to_string());
                println!("{}", Style::hint("Run /start to try again"));
            }
        }
    }

    async fn end_session(&mut self) {
        if self.controller.state() != SessionState::Active {
            ui::print_error("No active session to end");
            return;
        }

        let pending = self.controller.with_timeline(Timeline::pending_count);
        if pending > 0 {
            status!(
                "{}",
                Style::secondary(format!(
                    "{pending} translation(s) still pending; their results will be discarded"
                ))
            );
        }

        let spinner = Spinner::new("Ending live session...");
        match self.controller.end_session().await {
            Ok(()) => {
                spinner.stop();
                println!("{} Session ended", Style::success("●"));
                println!();
            }
            Err(e) => {
                spinner.stop();
                // Closed locally regardless; the server reconciles the
                // session on its side.
                warn!(
                    "{} Session closed locally, but the service could not confirm: {e}",
                    Style::warning("Warning:")
                );
                println!();
            }
        }
    }

    /// Processes controller events that arrived since the last prompt,
    /// printing every newly resolved turn.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            if let LiveEvent::TurnResolved(id) = event {
                // A resolution for a cleared timeline has nothing to show.
                self.controller.with_timeline(|t| {
                    if let Some(turn) = t.get(id) {
                        ui::print_turn_resolved(turn);
                    }
                });
            }
        }
    }

    async fn shutdown(&mut self) {
        if self.controller.state() == SessionState::Active {
            self.end_session().await;
        }
    }
}
