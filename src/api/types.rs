use anyhow::Result;
use serde::{Deserialize, Deserializer, Serialize};

use crate::media::{MediaKind, TranslationPayload, validate_direction};

/// A live session as acknowledged by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedSession {
    /// Server-assigned session identifier, treated as opaque by the client.
    pub session_id: String,
}

/// One translation request against the multi-modal endpoint.
#[derive(Debug, Clone)]
pub struct TranslateRequest {
    /// Typed input artifact.
    pub payload: TranslationPayload,
    /// Language of the input (ISO 639-1).
    pub input_language: String,
    /// Kind of artifact requested back.
    pub output: MediaKind,
    /// Language of the output (ISO 639-1).
    pub output_language: String,
}

impl TranslateRequest {
    /// Convenience constructor for the common text-to-text case.
    pub fn text(source: &str, input_language: &str, output_language: &str) -> Self {
        Self {
            payload: TranslationPayload::Text(source.to_string()),
            input_language: input_language.to_string(),
            output: MediaKind::Text,
            output_language: output_language.to_string(),
        }
    }

    /// Checks the request against the directions the service supports.
    pub fn validate(&self) -> Result<()> {
        validate_direction(self.payload.kind(), self.output)
    }
}

/// One conversation turn persisted to the session's server-side log.
#[derive(Debug, Clone, Serialize)]
pub struct LiveMessageRecord {
    pub message_type: MediaKind,
    pub original_content: String,
    pub translated_content: String,
}

/// Deserializes an id the server may send as either a number or a string.
pub(crate) fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n.to_string(),
        Raw::Str(s) => s,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct IdHolder {
        #[serde(deserialize_with = "opaque_id")]
        id: String,
    }

    #[test]
    fn test_opaque_id_accepts_number() {
        let holder: IdHolder = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(holder.id, "42");
    }

    #[test]
    fn test_opaque_id_accepts_string() {
        let holder: IdHolder = serde_json::from_str(r#"{"id": "s-42"}"#).unwrap();
        assert_eq!(holder.id, "s-42");
    }

    #[test]
    fn test_text_request_is_valid() {
        let request = TranslateRequest::text("hello", "en", "ar");
        assert!(request.validate().is_ok());
        assert_eq!(request.payload.content(), "hello");
        assert_eq!(request.output, MediaKind::Text);
    }

    #[test]
    fn test_invalid_direction_rejected() {
        let request = TranslateRequest {
            payload: TranslationPayload::Audio {
                data: "QUJD".to_string(),
            },
            input_language: "en".to_string(),
            output: MediaKind::Sign,
            output_language: "ar".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_record_serializes_wire_shape() {
        let record = LiveMessageRecord {
            message_type: MediaKind::Text,
            original_content: "hello".to_string(),
            translated_content: "مرحبا".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message_type": "text",
                "original_content": "hello",
                "translated_content": "مرحبا"
            })
        );
    }
}
