use anyhow::{Context, Result, bail};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::api::{LiveApi, LiveMessageRecord, TranslateRequest};
use crate::media::MediaKind;

use super::timeline::{Outcome, Timeline, TurnId};

/// Lifecycle of the live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Inactive,
    Active,
    Ending,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Inactive => "inactive",
            Self::Active => "active",
            Self::Ending => "ending",
        };
        f.write_str(name)
    }
}

/// Session-level translation direction; fixed for the session's lifetime.
#[derive(Debug, Clone)]
pub struct Direction {
    pub input_language: String,
    pub output_language: String,
}

/// Notifications the controller emits for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveEvent {
    SessionStarted { session_id: String },
    SessionEnded { clean: bool },
    TurnAppended(TurnId),
    TurnResolved(TurnId),
}

fn lock_timeline(timeline: &Mutex<Timeline>) -> MutexGuard<'_, Timeline> {
    // a poisoned lock only means a rendering callback panicked mid-read;
    // the timeline itself is never left half-updated
    timeline.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the session lifecycle and mediates all session-scoped remote calls.
///
/// Message sends are not serialized: each spawns an independent round trip
/// and the timeline reconciles completions by turn id, so responses may
/// arrive in any order without cross-talk between turns.
pub struct LiveController {
    api: Arc<dyn LiveApi>,
    timeline: Arc<Mutex<Timeline>>,
    events: mpsc::UnboundedSender<LiveEvent>,
    direction: Direction,
    send_timeout: Duration,
    state: SessionState,
    session_id: Option<String>,
}

impl LiveController {
    /// Creates a controller and the event stream the presentation layer
    /// subscribes to.
    pub fn new(
        api: Arc<dyn LiveApi>,
        direction: Direction,
        send_timeout: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<LiveEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();

        let controller = Self {
            api,
            timeline: Arc::new(Mutex::new(Timeline::new())),
            events,
            direction,
            send_timeout,
            state: SessionState::Inactive,
            session_id: None,
        };

        (controller, receiver)
    }

    pub const fn state(&self) -> SessionState {
        self.state
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub const fn direction(&self) -> &Direction {
        &self.direction
    }

    /// Reads the timeline under its lock.
    pub fn with_timeline<R>(&self, f: impl FnOnce(&Timeline) -> R) -> R {
        f(&lock_timeline(&self.timeline))
    }

    /// Starts a new live session.
    ///
    /// On success the controller becomes `Active` and the timeline is
    /// emptied so no turn from an earlier session can leak in. On failure
    /// the controller stays `Inactive`; retrying is the caller's decision.
    pub async fn start_session(&mut self) -> Result<String> {
        if self.state != SessionState::Inactive {
            bail!("A live session is already active");
        }

        let started = self
            .api
            .start_live_session()
            .await
            .context("Failed to start live session")?;

        lock_timeline(&self.timeline).clear();
        self.session_id = Some(started.session_id.clone());
        self.state = SessionState::Active;
        let _ = self.events.send(LiveEvent::SessionStarted {
            session_id: started.session_id.clone(),
        });

        Ok(started.session_id)
    }

    /// Ends the active session.
    ///
    /// The client side always comes back `Inactive`: when the remote end
    /// call fails the session is force-closed locally and the error is
    /// returned so the caller can surface it. Clearing the timeline happens
    /// in the same step, so no stale pending turn can point at a dead
    /// session id. In-flight round trips are not canceled; their late
    /// resolutions miss the cleared timeline and are dropped.
    pub async fn end_session(&mut self) -> Result<()> {
        if self.state != SessionState::Active {
            bail!("No active session to end");
        }

        self.state = SessionState::Ending;
        let session_id = self.session_id.take();

        let result = match &session_id {
            Some(id) => self.api.end_live_session(id).await,
            None => Ok(()),
        };

        lock_timeline(&self.timeline).clear();
        self.state = SessionState::Inactive;
        let _ = self.events.send(LiveEvent::SessionEnded {
            clean: result.is_ok(),
        });

        result.context("Failed to end live session cleanly")
    }

    /// Submits one conversation turn.
    ///
    /// Returns the new turn id, or `None` when the input is blank or no
    /// session is active — a stray send is dropped, never an error. The
    /// turn is appended synchronously in `Pending` state; the translate
    /// and record calls run on a spawned task and share one failure
    /// domain, bounded by the configured timeout.
    pub fn send_message(&self, text: &str) -> Option<TurnId> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.state != SessionState::Active {
            return None;
        }
        let session_id = self.session_id.clone()?;

        let id = lock_timeline(&self.timeline).append(trimmed);
        let _ = self.events.send(LiveEvent::TurnAppended(id));

        let api = Arc::clone(&self.api);
        let timeline = Arc::clone(&self.timeline);
        let events = self.events.clone();
        let request = TranslateRequest::text(
            trimmed,
            &self.direction.input_language,
            &self.direction.output_language,
        );
        let original = trimmed.to_string();
        let send_timeout = self.send_timeout;

        tokio::spawn(async move {
            let round_trip = translate_and_record(api.as_ref(), &session_id, request, original);
            let outcome = match tokio::time::timeout(send_timeout, round_trip).await {
                Ok(Ok(translated)) => Outcome::Completed(translated),
                Ok(Err(_)) | Err(_) => Outcome::Failed,
            };

            lock_timeline(&timeline).resolve(id, outcome);
            let _ = events.send(LiveEvent::TurnResolved(id));
        });

        Some(id)
    }
}

/// Translate first, then persist the pair to the session's server-side log.
/// The turn completes only if both calls succeed.
async fn translate_and_record(
    api: &dyn LiveApi,
    session_id: &str,
    request: TranslateRequest,
    original: String,
) -> Result<String> {
    let translated = api.translate(&request).await?;

    let record = LiveMessageRecord {
        message_type: MediaKind::Text,
        original_content: original,
        translated_content: translated.clone(),
    };
    api.record_live_message(session_id, &record).await?;

    Ok(translated)
}
