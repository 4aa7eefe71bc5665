use serde::{Deserialize, Serialize};

// API client types and trait
pub mod api;
pub use api::{ApiClientConfig, ApiError, ChatApi};

// Emotion vocabulary offered by the picker
pub mod emotions;
pub use emotions::{Emotion, EMOTIONS};

/// Session metadata returned by the backend lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: String,
    pub name: String,
    pub age: u32,
}

/// Optional flags attached to a turn
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnMetadata {
    /// Hidden turns are kept in the transcript but never rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
    /// The system asks the user to pick emotions below this turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_emotion: Option<bool>,
    /// Emotions the user picked (user turns only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_emotions: Option<Vec<String>>,
}

/// One message in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub id: String,
    pub message: String,
    pub is_user: bool,
    #[serde(default)]
    pub metadata: Option<TurnMetadata>,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl Turn {
    pub fn is_hidden(&self) -> bool {
        self.metadata
            .as_ref()
            .and_then(|m| m.hide)
            .unwrap_or(false)
    }

    pub fn requests_emotion_selection(&self) -> bool {
        self.metadata
            .as_ref()
            .and_then(|m| m.select_emotion)
            .unwrap_or(false)
    }

    pub fn is_system(&self) -> bool {
        !self.is_user
    }
}

/// Response body for GET /api/sessions/{id}/messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Turn>,
}

/// Request body for POST /api/sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub name: String,
    pub age: u32,
}
