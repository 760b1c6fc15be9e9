use std::fmt;

use reqwest::StatusCode;
use shared::{error::ErrorResponse, protocol::ApiKeyResponse};
use zeroize::Zeroize;

use crate::error::IssuanceError;

/// An issued API key. Redacted in `Debug` output and wiped from memory on drop.
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl PartialEq for ApiKey {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for ApiKey {}

impl Drop for ApiKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Result of one issuance request.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Issued { api_key: ApiKey },
    EmailedConfirmation,
    Failure { reason: String },
    InvalidInput,
}

impl Outcome {
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    /// Stable label for logs; never includes the key.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Issued { .. } => "issued",
            Self::EmailedConfirmation => "emailed_confirmation",
            Self::Failure { .. } => "failure",
            Self::InvalidInput => "invalid_input",
        }
    }
}

impl From<IssuanceError> for Outcome {
    fn from(err: IssuanceError) -> Self {
        match err {
            IssuanceError::Validation => Self::InvalidInput,
            other => Self::failure(other.to_string()),
        }
    }
}

/// Standard reason phrase for `status`, or the bare code when it has none.
pub fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

/// Maps a reply from the issuance endpoint to exactly one [`Outcome`].
pub fn classify(status: StatusCode, body: &[u8]) -> Outcome {
    interpret(status, body).unwrap_or_else(Outcome::from)
}

fn interpret(status: StatusCode, body: &[u8]) -> Result<Outcome, IssuanceError> {
    match status {
        StatusCode::OK => {
            let key = serde_json::from_slice::<ApiKeyResponse>(body)
                .ok()
                .and_then(ApiKeyResponse::issued_key)
                .ok_or(IssuanceError::ProtocolMismatch)?;
            Ok(Outcome::Issued {
                api_key: ApiKey::new(key),
            })
        }
        StatusCode::CREATED => Ok(Outcome::EmailedConfirmation),
        _ => {
            let message = serde_json::from_slice::<ErrorResponse>(body)
                .ok()
                .and_then(ErrorResponse::message)
                .unwrap_or_else(|| status_text(status));
            Err(IssuanceError::ServerReported(message))
        }
    }
}

#[cfg(test)]
#[path = "tests/outcome_tests.rs"]
mod tests;
