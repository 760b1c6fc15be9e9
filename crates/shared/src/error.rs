use serde::{Deserialize, Serialize};

/// Error body the server attaches to non-success replies, `{"error": "..."}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    /// The server's message, if it sent a usable one.
    pub fn message(self) -> Option<String> {
        self.error.filter(|message| !message.trim().is_empty())
    }
}
