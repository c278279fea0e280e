use chrono::{DateTime, Utc};
use std::fmt;

/// Placeholder shown while a turn's translation round trip is in flight.
pub const PENDING_PLACEHOLDER: &str = "[Translating...]";

/// Placeholder shown when a turn's translation round trip failed.
pub const FAILED_PLACEHOLDER: &str = "[Translation failed]";

/// Identifier for a conversation turn.
///
/// Locally assigned and strictly increasing. The counter survives
/// [`Timeline::clear`], so a resolution that arrives after its session was
/// torn down can never collide with a turn from a later session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TurnId(u64);

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Translation lifecycle of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationState {
    Pending,
    Completed,
    Failed,
}

/// Outcome of a turn's translate-and-record round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(String),
    Failed,
}

/// One conversation turn: the user's utterance and its translation.
#[derive(Debug, Clone)]
pub struct Turn {
    id: TurnId,
    original: String,
    translated: String,
    state: TranslationState,
    created_at: DateTime<Utc>,
}

impl Turn {
    pub const fn id(&self) -> TurnId {
        self.id
    }

    /// The text the user submitted; immutable once set.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The translated text, or the pending/failed placeholder.
    pub fn translated(&self) -> &str {
        &self.translated
    }

    pub const fn state(&self) -> TranslationState {
        self.state
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_pending(&self) -> bool {
        self.state == TranslationState::Pending
    }
}

/// Append-only ordered log of conversation turns.
///
/// Insertion order is authoritative and always matches submission order;
/// translations resolve later, possibly out of order, and are reconciled by
/// id rather than by position.
#[derive(Debug, Default)]
pub struct Timeline {
    turns: Vec<Turn>,
    next_id: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new pending turn and returns its id.
    ///
    /// Synchronous: the turn is visible (with the pending placeholder)
    /// before any remote call has been issued for it.
    pub fn append(&mut self, original: impl Into<String>) -> TurnId {
        self.next_id += 1;
        let id = TurnId(self.next_id);

        self.turns.push(Turn {
            id,
            original: original.into(),
            translated: PENDING_PLACEHOLDER.to_string(),
            state: TranslationState::Pending,
            created_at: Utc::now(),
        });

        id
    }

    /// Applies a completion to the turn with the given id.
    ///
    /// The first outcome wins: a turn that already left `Pending` is not
    /// touched again. An id that is no longer present (the timeline was
    /// cleared while the round trip was in flight) is silently ignored —
    /// that is a normal race, not an error.
    pub fn resolve(&mut self, id: TurnId, outcome: Outcome) {
        let Some(turn) = self.turns.iter_mut().find(|turn| turn.id == id) else {
            return;
        };

        if turn.state != TranslationState::Pending {
            return;
        }

        match outcome {
            Outcome::Completed(translated) => {
                turn.translated = translated;
                turn.state = TranslationState::Completed;
            }
            Outcome::Failed => {
                turn.translated = FAILED_PLACEHOLDER.to_string();
                turn.state = TranslationState::Failed;
            }
        }
    }

    /// Drops every turn. The id counter is deliberately not reset.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// All turns in submission order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn get(&self, id: TurnId) -> Option<&Turn> {
        self.turns.iter().find(|turn| turn.id == id)
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Number of turns still waiting on their round trip.
    pub fn pending_count(&self) -> usize {
        self.turns.iter().filter(|turn| turn.is_pending()).count()
    }
}
