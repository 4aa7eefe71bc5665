//! API client types and trait definitions
//!
//! This module defines the chat API contract. The frontend implements it
//! with gloo-net; tests implement it with in-memory fakes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export types from parent module for convenience
pub use crate::{CreateSessionRequest, MessagesResponse, SessionInfo, Turn};

/// API error types
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),
    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// Map a non-success HTTP status to an error
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == 404 {
            ApiError::NotFound(message)
        } else {
            ApiError::Server { status, message }
        }
    }
}

/// API endpoint definitions
pub mod endpoints {
    pub const SESSIONS: &str = "/api/sessions";

    pub fn session_info(id: &str) -> String {
        format!("/api/sessions/{}/info", id)
    }

    pub fn session_messages(id: &str) -> String {
        format!("/api/sessions/{}/messages", id)
    }

    pub fn session_regenerate(id: &str) -> String {
        format!("/api/sessions/{}/regenerate", id)
    }
}

/// Trait defining the chat API
///
/// All methods are async and return Result<T, ApiError>.
#[allow(async_fn_in_trait)]
pub trait ChatApi {
    /// Check that a session exists and fetch its metadata
    async fn load_session_info(&self, session_id: &str) -> Result<SessionInfo, ApiError>;

    /// Fetch the full transcript of a session, oldest first
    async fn load_messages(&self, session_id: &str) -> Result<Vec<Turn>, ApiError>;

    /// Post a user turn and wait for the system reply
    async fn send_message(&self, session_id: &str, turn: &Turn) -> Result<Turn, ApiError>;

    /// Drop the latest system reply on the server and generate a new one
    async fn regenerate(&self, session_id: &str) -> Result<Turn, ApiError>;

    /// Start a new session
    async fn create_session(&self, req: &CreateSessionRequest) -> Result<SessionInfo, ApiError>;
}

/// Configuration for creating an API client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClientConfig {
    /// Base URL of the server (e.g., "http://localhost:3000")
    pub base_url: String,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ApiError::from_status(404, "gone"),
            ApiError::NotFound("gone".into())
        );
        assert_eq!(
            ApiError::from_status(502, "bad gateway"),
            ApiError::Server {
                status: 502,
                message: "bad gateway".into()
            }
        );
    }

    #[test]
    fn error_display() {
        let err = ApiError::Server {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "Server error (500): boom");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "Network error: offline"
        );
    }

    #[test]
    fn endpoint_urls() {
        let config = ApiClientConfig::new("https://chat.example/");
        assert_eq!(
            config.url(&endpoints::session_info("abc")),
            "https://chat.example/api/sessions/abc/info"
        );
        assert_eq!(
            config.url(&endpoints::session_regenerate("abc")),
            "https://chat.example/api/sessions/abc/regenerate"
        );
        assert_eq!(config.url(endpoints::SESSIONS), "https://chat.example/api/sessions");
    }
}
