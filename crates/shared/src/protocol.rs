use serde::{Deserialize, Serialize};

/// Key issuance endpoint, relative to the server root.
pub const API_KEY_PATH: &str = "/api/v1/api-key";

/// API documentation served next to the issuance endpoint.
pub const DOCS_PATH: &str = "/swagger/v1";

/// Body of a `200 OK` reply. The key may be missing on a misbehaving server, so
/// it stays optional and the client decides what an absent key means.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiKeyResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl ApiKeyResponse {
    /// The issued key, if present and non-empty.
    pub fn issued_key(self) -> Option<String> {
        self.api_key.filter(|key| !key.is_empty())
    }
}
