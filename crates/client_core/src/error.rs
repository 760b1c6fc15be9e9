use thiserror::Error;

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Try again";
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach server";
pub const TIMED_OUT_MESSAGE: &str = "Request timed out";
pub const NETWORK_FAILURE_MESSAGE: &str = "Network error";

/// Everything that can go wrong while asking for an API key.
///
/// Per-submission variants never escape [`crate::IssuanceClient::request`]; they
/// are folded into an [`crate::Outcome`]. Only the construction variants are
/// returned as errors.
#[derive(Debug, Error)]
pub enum IssuanceError {
    #[error("{}", INVALID_EMAIL_MESSAGE)]
    Validation,
    /// A `200 OK` without a usable `api_key`.
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    ProtocolMismatch,
    #[error("{0}")]
    ServerReported(String),
    #[error("{0}")]
    Transport(String),
    #[error("invalid server url '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported server url scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// User-facing reason for a request that produced no response at all.
pub fn transport_reason(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        TIMED_OUT_MESSAGE
    } else if err.is_connect() {
        UNREACHABLE_MESSAGE
    } else {
        NETWORK_FAILURE_MESSAGE
    }
}
