//! Message types for plugin UI ↔ engine communication
//!
//! The UI posts [`UiMessage`]s; the engine answers with [`PluginMessage`]s.
//! Both travel as JSON objects tagged by `type`.
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Renaming variants is a breaking change (`CREATE` is what shipped UIs post)
//! - Unknown message types deserialize to `Unknown` instead of failing

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::dto::CollectionSummary;

/// A message the engine could not decode
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("Malformed UI message: {0}")]
    Malformed(#[from] serde_json::Error),
}

// =============================================================================
// UI Messages (UI → Engine)
// =============================================================================

/// Messages from the plugin UI to the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum UiMessage {
    /// Brand × size grid (no variable modes involved)
    Create {
        #[serde(default)]
        theme: bool,
        #[serde(default)]
        dynamic: bool,
    },
    /// Mode grid over the collections the user enabled, in enable order
    Generate { collection_ids: Vec<Uuid> },
    /// Mode grid over the conventionally named collections
    GenerateConventional {
        #[serde(default)]
        theme: bool,
        #[serde(default)]
        dynamic_type: bool,
    },
    /// Ask for the collection list for the current selection
    Detect,
    /// Unknown message type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl UiMessage {
    /// Parse a message posted by the UI.
    pub fn from_json(raw: &str) -> Result<Self, MessageError> {
        Ok(serde_json::from_str(raw)?)
    }
}

// =============================================================================
// Plugin Messages (Engine → UI)
// =============================================================================

/// Error classification surfaced to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NothingSelected,
    UnsupportedArtifactType,
    CollectionNotFound,
    NoAxesSelected,
    EmptyAxis,
    HostFailure,
    BadMessage,
}

/// Messages from the engine to the plugin UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum PluginMessage {
    /// Collections referenced by the selection, and every local collection
    Collections {
        detected: Vec<CollectionSummary>,
        available: Vec<CollectionSummary>,
    },
    /// Generation finished
    Generated { count: usize, labels: Vec<String> },
    /// Generation or detection was refused
    Error { code: ErrorCode, message: String },
}

impl PluginMessage {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Error {
            code,
            message: message.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, MessageError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_legacy_create() {
        let msg = UiMessage::from_json(r#"{"type":"CREATE","theme":true,"dynamic":false}"#).unwrap();
        assert_eq!(
            msg,
            UiMessage::Create {
                theme: true,
                dynamic: false
            }
        );
    }

    #[test]
    fn create_flags_default_to_false() {
        let msg = UiMessage::from_json(r#"{"type":"CREATE"}"#).unwrap();
        assert_eq!(
            msg,
            UiMessage::Create {
                theme: false,
                dynamic: false
            }
        );
    }

    #[test]
    fn parses_generate_with_camel_case_ids() {
        let id = Uuid::new_v4();
        let raw = json!({ "type": "GENERATE", "collectionIds": [id] }).to_string();
        assert_eq!(
            UiMessage::from_json(&raw).unwrap(),
            UiMessage::Generate {
                collection_ids: vec![id]
            }
        );
    }

    #[test]
    fn parses_conventional() {
        let msg =
            UiMessage::from_json(r#"{"type":"GENERATE_CONVENTIONAL","dynamicType":true}"#).unwrap();
        assert_eq!(
            msg,
            UiMessage::GenerateConventional {
                theme: false,
                dynamic_type: true
            }
        );
    }

    #[test]
    fn unknown_type_is_tolerated() {
        let msg = UiMessage::from_json(r#"{"type":"RESIZE","width":300}"#).unwrap();
        assert_eq!(msg, UiMessage::Unknown);
    }

    #[test]
    fn garbage_is_an_error() {
        let err = UiMessage::from_json("not json").unwrap_err();
        assert!(err.to_string().starts_with("Malformed UI message"));
    }

    #[test]
    fn error_reply_wire_format() {
        let msg = PluginMessage::error(ErrorCode::NoAxesSelected, "pick one");
        let value: serde_json::Value = serde_json::from_str(&msg.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({ "type": "ERROR", "code": "NO_AXES_SELECTED", "message": "pick one" })
        );
    }

    #[test]
    fn generated_reply_wire_format() {
        let msg = PluginMessage::Generated {
            count: 2,
            labels: vec!["Light".into(), "Dark".into()],
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({ "type": "GENERATED", "count": 2, "labels": ["Light", "Dark"] })
        );
    }
}
