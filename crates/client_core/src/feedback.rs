//! Feedback state driven by issuance outcomes: the single visible alert and the
//! API key waiting to be copied.
//!
//! The controller is the only writer. Presentation reads [`FeedbackController::alert`]
//! and [`FeedbackController::is_acknowledgeable`] and calls the `on_*` entry points.
//! Overlapping submissions are not cancelled; whichever completion is applied last
//! owns the alert.

use tracing::debug;

use crate::{
    error::INVALID_EMAIL_MESSAGE,
    issuance::KeyIssuer,
    outcome::{ApiKey, Outcome},
};

pub const CLICK_TO_COPY_MESSAGE: &str = "Click to copy API key";
pub const COPIED_MESSAGE: &str = "Copied";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// The one notice shown to the user. `severity: None` is a neutral notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub message: String,
    pub severity: Option<Severity>,
}

impl AlertState {
    pub fn new(message: impl Into<String>, severity: Option<Severity>) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Some(Severity::Info))
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Some(Severity::Success))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Some(Severity::Error))
    }

    pub fn neutral(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }
}

/// Destination for an acknowledged key, normally the system clipboard.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
pub struct FeedbackController {
    alert: Option<AlertState>,
    pending_secret: Option<ApiKey>,
}

impl FeedbackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alert(&self) -> Option<&AlertState> {
        self.alert.as_ref()
    }

    /// Whether a key is waiting to be copied, i.e. the alert is clickable.
    pub fn is_acknowledgeable(&self) -> bool {
        self.pending_secret.is_some()
    }

    /// The host input control rejected the email; no request is made.
    pub fn on_validation_rejected(&mut self) {
        self.pending_secret = None;
        self.alert = Some(AlertState::error(INVALID_EMAIL_MESSAGE));
    }

    /// Clears previous feedback ahead of a new request.
    pub fn begin_submission(&mut self) {
        self.alert = None;
        self.pending_secret = None;
    }

    pub fn apply_outcome(&mut self, email: &str, outcome: Outcome) {
        debug!(outcome = outcome.kind(), "applying issuance outcome");
        match outcome {
            Outcome::Issued { api_key } => {
                self.alert = Some(AlertState::info(CLICK_TO_COPY_MESSAGE));
                self.pending_secret = Some(api_key);
            }
            Outcome::EmailedConfirmation => {
                self.alert = Some(AlertState::neutral(format!("API key emailed to {email}")));
                self.pending_secret = None;
            }
            Outcome::Failure { reason } => {
                self.alert = Some(AlertState::error(reason));
                self.pending_secret = None;
            }
            Outcome::InvalidInput => self.on_validation_rejected(),
        }
    }

    pub async fn on_submit<I>(&mut self, issuer: &I, email: &str)
    where
        I: KeyIssuer + ?Sized,
    {
        self.begin_submission();
        let outcome = issuer.request(email).await;
        self.apply_outcome(email, outcome);
    }

    /// Copies the pending key and forgets it. Clipboard failures are not
    /// reported; the alert reads "Copied" either way.
    ///
    /// Returns `false` without touching any state when no key is pending.
    pub fn on_acknowledge(&mut self, clipboard: &mut dyn ClipboardSink) -> bool {
        let Some(secret) = self.pending_secret.take() else {
            debug!("acknowledge ignored, no api key pending");
            return false;
        };

        if let Err(err) = clipboard.write_text(secret.expose()) {
            debug!(error = %err, "clipboard write failed");
        }
        self.alert = Some(AlertState::success(COPIED_MESSAGE));
        true
    }

    /// Closes the notice. A key that was never copied is discarded with it.
    pub fn dismiss(&mut self) {
        self.alert = None;
        self.pending_secret = None;
    }
}

#[cfg(test)]
#[path = "tests/feedback_tests.rs"]
mod tests;
