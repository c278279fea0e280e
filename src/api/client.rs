use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::credentials::SessionCredentials;
use crate::media::MediaKind;

use super::types::{LiveMessageRecord, StartedSession, TranslateRequest, opaque_id};
use super::LiveApi;

// Wire shapes for the service's JSON responses. Extra fields (tokens,
// durations, echoes of the stored rows) are ignored.

#[derive(Debug, serde::Deserialize)]
struct StartSessionResponse {
    success: bool,
    #[serde(deserialize_with = "opaque_id")]
    session_id: String,
}

#[derive(Debug, serde::Deserialize)]
struct AckResponse {
    success: bool,
}

#[derive(Debug, serde::Deserialize)]
struct TranslateResponse {
    success: bool,
    output_content: String,
}

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    input_type: MediaKind,
    input_content: &'a str,
    input_language: &'a str,
    output_type: MediaKind,
    output_language: &'a str,
}

/// HTTP client for the Jusoor service API.
pub struct ServiceClient {
    client: Client,
    endpoint: String,
    credentials: SessionCredentials,
}

impl ServiceClient {
    pub fn new(endpoint: String, credentials: SessionCredentials) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            credentials,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.endpoint.trim_end_matches('/'))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<T> {
        let response = request
            .header(
                "Authorization",
                format!("Bearer {}", self.credentials.token()),
            )
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("API request failed with status {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .context("Failed to parse API response")
    }
}

#[async_trait]
impl LiveApi for ServiceClient {
    async fn start_live_session(&self) -> Result<StartedSession> {
        let url = self.url("live-session/start");
        let response: StartSessionResponse = self.execute(self.client.post(&url), &url).await?;

        if !response.success {
            bail!("Service declined to start a live session");
        }

        Ok(StartedSession {
            session_id: response.session_id,
        })
    }

    async fn end_live_session(&self, session_id: &str) -> Result<()> {
        let url = self.url(&format!("live-session/{session_id}/end"));
        let response: AckResponse = self.execute(self.client.post(&url), &url).await?;

        if !response.success {
            bail!("Service declined to end session {session_id}");
        }

        Ok(())
    }

    async fn translate(&self, request: &TranslateRequest) -> Result<String> {
        request.validate()?;

        let url = self.url("translate");
        let body = TranslateBody {
            input_type: request.payload.kind(),
            input_content: request.payload.content(),
            input_language: &request.input_language,
            output_type: request.output,
            output_language: &request.output_language,
        };

        let response: TranslateResponse =
            self.execute(self.client.post(&url).json(&body), &url).await?;

        if !response.success {
            bail!("Service reported a translation failure");
        }

        Ok(response.output_content)
    }

    async fn record_live_message(
        &self,
        session_id: &str,
        record: &LiveMessageRecord,
    ) -> Result<()> {
        let url = self.url(&format!("live-session/{session_id}/message"));
        let response: AckResponse = self
            .execute(self.client.post(&url).json(record), &url)
            .await?;

        if !response.success {
            bail!("Service declined to record the message");
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::media::TranslationPayload;

    fn test_client() -> ServiceClient {
        ServiceClient::new(
            "https://api.jusoor.example/".to_string(),
            SessionCredentials::new("test-token".to_string(), None),
        )
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let client = test_client();
        assert_eq!(
            client.url("live-session/start"),
            "https://api.jusoor.example/api/live-session/start"
        );
        assert_eq!(
            client.url("live-session/7/end"),
            "https://api.jusoor.example/api/live-session/7/end"
        );
    }

    #[test]
    fn test_translate_body_wire_shape() {
        let request = TranslateRequest {
            payload: TranslationPayload::Text("hello".to_string()),
            input_language: "en".to_string(),
            output: MediaKind::Text,
            output_language: "ar".to_string(),
        };
        let body = TranslateBody {
            input_type: request.payload.kind(),
            input_content: request.payload.content(),
            input_language: &request.input_language,
            output_type: request.output,
            output_language: &request.output_language,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "input_type": "text",
                "input_content": "hello",
                "input_language": "en",
                "output_type": "text",
                "output_language": "ar"
            })
        );
    }

    #[test]
    fn test_start_response_parses_numeric_id() {
        let response: StartSessionResponse =
            serde_json::from_str(r#"{"success": true, "session_id": 7, "session_token": "t"}"#)
                .unwrap();
        assert!(response.success);
        assert_eq!(response.session_id, "7");
    }
}
