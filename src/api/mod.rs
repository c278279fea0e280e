//! HTTP client for the Jusoor translation service.
//!
//! Every remote call surfaces failure as a plain [`anyhow::Error`]; the
//! live session core never inspects error payloads, it only reacts to
//! success or failure.

mod client;
mod types;

pub use client::ServiceClient;
pub use types::{LiveMessageRecord, StartedSession, TranslateRequest};

use anyhow::Result;
use async_trait::async_trait;

/// The remote calls the live session subsystem depends on.
///
/// Implemented by [`ServiceClient`] against the real service; tests
/// substitute scripted implementations to control completion order.
#[async_trait]
pub trait LiveApi: Send + Sync {
    /// `POST /api/live-session/start`
    async fn start_live_session(&self) -> Result<StartedSession>;

    /// `POST /api/live-session/{id}/end`
    async fn end_live_session(&self, session_id: &str) -> Result<()>;

    /// `POST /api/translate`
    async fn translate(&self, request: &TranslateRequest) -> Result<String>;

    /// `POST /api/live-session/{id}/message`
    async fn record_live_message(
        &self,
        session_id: &str,
        record: &LiveMessageRecord,
    ) -> Result<()>;
}
