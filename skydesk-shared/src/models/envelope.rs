use serde::{Deserialize, Serialize};

/// Fallback text when the backend rejects a request without a message.
pub const DEFAULT_REJECTION: &str = "Request was rejected by the server";

/// Wrapper every backend response is sent in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// The `message` field, or a generic description when it is missing or blank.
    pub fn rejection_message(&self) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_REJECTION)
            .to_string()
    }
}
