//! Typed payloads for the service's multi-modal translate endpoint.
//!
//! The service accepts text, audio, video, and sign-language translations
//! through a single endpoint keyed by `input_type`/`output_type`. Instead of
//! passing loosely-typed strings around, requests are built from a tagged
//! variant per input kind and validated before anything is sent.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of artifact on either side of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Text,
    Audio,
    Video,
    Sign,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Sign => "sign",
        };
        f.write_str(name)
    }
}

/// Input artifact for a translation, typed by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationPayload {
    /// Plain text to translate.
    Text(String),
    /// Base64-encoded audio clip.
    Audio { data: String },
    /// Base64-encoded video clip (sign-language input).
    Video { data: String },
}

impl TranslationPayload {
    /// The input kind this payload carries on the wire.
    pub const fn kind(&self) -> MediaKind {
        match self {
            Self::Text(_) => MediaKind::Text,
            Self::Audio { .. } => MediaKind::Audio,
            Self::Video { .. } => MediaKind::Video,
        }
    }

    /// The raw content sent as `input_content`.
    pub fn content(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Audio { data } | Self::Video { data } => data,
        }
    }
}

// Direction pairs the service can translate between.
const SUPPORTED_DIRECTIONS: &[(MediaKind, MediaKind)] = &[
    (MediaKind::Video, MediaKind::Text),
    (MediaKind::Text, MediaKind::Sign),
    (MediaKind::Audio, MediaKind::Text),
    (MediaKind::Text, MediaKind::Audio),
    (MediaKind::Text, MediaKind::Text),
];

/// Validates that the service supports translating `input` into `output`.
///
/// # Errors
///
/// Returns an error for unsupported kind pairs.
pub fn validate_direction(input: MediaKind, output: MediaKind) -> Result<()> {
    if SUPPORTED_DIRECTIONS.contains(&(input, output)) {
        Ok(())
    } else {
        bail!(
            "Unsupported translation direction: {input} -> {output}\n\n\
             Supported directions: video->text, text->sign, audio->text, \
             text->audio, text->text"
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_kind() {
        assert_eq!(
            TranslationPayload::Text("hi".to_string()).kind(),
            MediaKind::Text
        );
        assert_eq!(
            TranslationPayload::Audio {
                data: "QUJD".to_string()
            }
            .kind(),
            MediaKind::Audio
        );
        assert_eq!(
            TranslationPayload::Video {
                data: "QUJD".to_string()
            }
            .kind(),
            MediaKind::Video
        );
    }

    #[test]
    fn test_payload_content() {
        let payload = TranslationPayload::Text("hello".to_string());
        assert_eq!(payload.content(), "hello");

        let payload = TranslationPayload::Video {
            data: "QUJD".to_string(),
        };
        assert_eq!(payload.content(), "QUJD");
    }

    #[test]
    fn test_media_kind_serializes_lowercase() {
        let value = serde_json::to_value(MediaKind::Sign).unwrap();
        assert_eq!(value, serde_json::json!("sign"));
    }

    #[test]
    fn test_validate_direction_supported() {
        assert!(validate_direction(MediaKind::Text, MediaKind::Text).is_ok());
        assert!(validate_direction(MediaKind::Video, MediaKind::Text).is_ok());
        assert!(validate_direction(MediaKind::Text, MediaKind::Sign).is_ok());
    }

    #[test]
    fn test_validate_direction_unsupported() {
        assert!(validate_direction(MediaKind::Audio, MediaKind::Sign).is_err());
        assert!(validate_direction(MediaKind::Video, MediaKind::Audio).is_err());
    }
}
