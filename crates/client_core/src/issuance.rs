use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::Submission,
    protocol::{API_KEY_PATH, DOCS_PATH},
};
use tracing::{info, warn};
use url::Url;

use crate::{
    error::{transport_reason, IssuanceError},
    outcome::{classify, Outcome},
};

/// Anything that can turn an email address into an issuance [`Outcome`].
#[async_trait]
pub trait KeyIssuer: Send + Sync {
    async fn request(&self, email: &str) -> Outcome;
}

/// HTTP client for the key issuance endpoint.
#[derive(Debug, Clone)]
pub struct IssuanceClient {
    http: Client,
    endpoint: Url,
    docs: Url,
}

impl IssuanceClient {
    pub fn new(server_url: &str) -> Result<Self, IssuanceError> {
        Self::with_http_client(Client::new(), server_url)
    }

    pub fn with_timeout(server_url: &str, timeout: Duration) -> Result<Self, IssuanceError> {
        let http = Client::builder().timeout(timeout).build()?;
        Self::with_http_client(http, server_url)
    }

    pub fn with_http_client(http: Client, server_url: &str) -> Result<Self, IssuanceError> {
        Ok(Self {
            http,
            endpoint: server_path(server_url, API_KEY_PATH)?,
            docs: server_path(server_url, DOCS_PATH)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn docs_url(&self) -> &Url {
        &self.docs
    }

    /// POSTs `{"email": ...}` and classifies the reply. Never fails: transport
    /// problems come back as [`Outcome::Failure`].
    pub async fn request(&self, email: &str) -> Outcome {
        let response = match self
            .http
            .post(self.endpoint.clone())
            .json(&Submission::new(email))
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(endpoint = %self.endpoint, error = %err, "api key request got no response");
                return Outcome::from(IssuanceError::Transport(
                    transport_reason(&err).to_string(),
                ));
            }
        };

        let status = response.status();
        let body = if status == StatusCode::CREATED {
            Vec::new()
        } else {
            match response.bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(err) => {
                    warn!(
                        status = status.as_u16(),
                        error = %err,
                        "failed to read api key response body"
                    );
                    Vec::new()
                }
            }
        };

        let outcome = classify(status, &body);
        info!(
            status = status.as_u16(),
            outcome = outcome.kind(),
            "api key request completed"
        );
        outcome
    }
}

#[async_trait]
impl KeyIssuer for IssuanceClient {
    async fn request(&self, email: &str) -> Outcome {
        IssuanceClient::request(self, email).await
    }
}

/// Resolves an absolute `path` against the server root in `server_url`.
pub fn server_path(server_url: &str, path: &str) -> Result<Url, IssuanceError> {
    let raw = server_url.trim();
    let invalid = |source| IssuanceError::InvalidServerUrl {
        url: raw.to_string(),
        source,
    };
    let base = Url::parse(raw).map_err(invalid)?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(IssuanceError::UnsupportedScheme(base.scheme().to_string()));
    }
    base.join(path).map_err(invalid)
}

#[cfg(test)]
#[path = "tests/issuance_tests.rs"]
mod tests;
