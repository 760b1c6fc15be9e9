use super::*;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;

use crate::error::GENERIC_FAILURE_MESSAGE;

struct ScriptedIssuer {
    replies: Mutex<Vec<Outcome>>,
    calls: AtomicUsize,
}

impl ScriptedIssuer {
    fn replying(outcome: Outcome) -> Self {
        Self {
            replies: Mutex::new(vec![outcome]),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyIssuer for ScriptedIssuer {
    async fn request(&self, _email: &str) -> Outcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .expect("replies lock")
            .pop()
            .unwrap_or_else(|| Outcome::failure("no scripted reply"))
    }
}

#[derive(Default)]
struct RecordingClipboard {
    writes: Vec<String>,
    fail: bool,
}

impl RecordingClipboard {
    fn failing() -> Self {
        Self {
            writes: Vec::new(),
            fail: true,
        }
    }
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("clipboard access denied");
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

fn issued(key: &str) -> Outcome {
    Outcome::Issued {
        api_key: ApiKey::new(key),
    }
}

#[tokio::test]
async fn issued_key_is_shown_as_clickable_info() {
    let issuer = ScriptedIssuer::replying(issued("abc123"));
    let mut controller = FeedbackController::new();

    controller.on_submit(&issuer, "a@b.com").await;

    assert_eq!(
        controller.alert(),
        Some(&AlertState::info("Click to copy API key"))
    );
    assert!(controller.is_acknowledgeable());

    let mut clipboard = RecordingClipboard::default();
    assert!(controller.on_acknowledge(&mut clipboard));
    assert_eq!(clipboard.writes, vec!["abc123".to_string()]);
}

#[tokio::test]
async fn missing_key_is_an_error_without_secret() {
    let issuer = ScriptedIssuer::replying(Outcome::failure(GENERIC_FAILURE_MESSAGE));
    let mut controller = FeedbackController::new();

    controller.on_submit(&issuer, "a@b.com").await;

    assert_eq!(
        controller.alert(),
        Some(&AlertState::error("Something went wrong. Try again"))
    );
    assert!(!controller.is_acknowledgeable());
}

#[tokio::test]
async fn emailed_confirmation_is_neutral() {
    let issuer = ScriptedIssuer::replying(Outcome::EmailedConfirmation);
    let mut controller = FeedbackController::new();

    controller.on_submit(&issuer, "a@b.com").await;

    let alert = controller.alert().expect("alert");
    assert_eq!(alert.message, "API key emailed to a@b.com");
    assert_eq!(alert.severity, None);
    assert!(!controller.is_acknowledgeable());
}

#[tokio::test]
async fn server_error_message_is_shown_verbatim() {
    let issuer = ScriptedIssuer::replying(Outcome::failure("already requested"));
    let mut controller = FeedbackController::new();

    controller.on_submit(&issuer, "a@b.com").await;

    assert_eq!(
        controller.alert(),
        Some(&AlertState::error("already requested"))
    );
}

#[tokio::test]
async fn fallback_status_text_is_shown_as_error() {
    let issuer = ScriptedIssuer::replying(crate::classify(
        reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        b"not json",
    ));
    let mut controller = FeedbackController::new();

    controller.on_submit(&issuer, "a@b.com").await;

    assert_eq!(
        controller.alert(),
        Some(&AlertState::error("Internal Server Error"))
    );
}

#[test]
fn acknowledge_clears_secret_even_when_clipboard_fails() {
    let mut controller = FeedbackController::new();
    controller.begin_submission();
    controller.apply_outcome("a@b.com", issued("abc123"));

    let mut clipboard = RecordingClipboard::failing();
    assert!(controller.on_acknowledge(&mut clipboard));

    assert!(!controller.is_acknowledgeable());
    assert_eq!(controller.alert(), Some(&AlertState::success("Copied")));
    assert!(clipboard.writes.is_empty());
}

#[test]
fn acknowledge_with_working_clipboard_ends_at_copied() {
    let mut controller = FeedbackController::new();
    controller.apply_outcome("a@b.com", issued("abc123"));

    let mut clipboard = RecordingClipboard::default();
    controller.on_acknowledge(&mut clipboard);

    assert!(!controller.is_acknowledgeable());
    assert_eq!(controller.alert(), Some(&AlertState::success("Copied")));
}

#[test]
fn validation_rejection_never_calls_issuer() {
    let issuer = ScriptedIssuer::replying(issued("abc123"));
    let mut controller = FeedbackController::new();
    controller.apply_outcome("a@b.com", issued("stale"));

    controller.on_validation_rejected();

    assert_eq!(issuer.calls(), 0);
    assert_eq!(
        controller.alert(),
        Some(&AlertState::error("Invalid email address"))
    );
    assert!(!controller.is_acknowledgeable());
}

#[test]
fn acknowledge_without_secret_changes_nothing() {
    let mut controller = FeedbackController::new();
    controller.apply_outcome("a@b.com", Outcome::failure("already requested"));
    let before = controller.alert().cloned();

    let mut clipboard = RecordingClipboard::default();
    assert!(!controller.on_acknowledge(&mut clipboard));

    assert_eq!(controller.alert().cloned(), before);
    assert!(clipboard.writes.is_empty());
}

#[test]
fn second_acknowledge_does_not_copy_again() {
    let mut controller = FeedbackController::new();
    controller.apply_outcome("a@b.com", issued("abc123"));

    let mut clipboard = RecordingClipboard::default();
    assert!(controller.on_acknowledge(&mut clipboard));
    assert!(!controller.on_acknowledge(&mut clipboard));

    assert_eq!(clipboard.writes.len(), 1);
}

#[test]
fn new_submission_clears_previous_feedback() {
    let mut controller = FeedbackController::new();
    controller.apply_outcome("a@b.com", issued("abc123"));

    controller.begin_submission();

    assert_eq!(controller.alert(), None);
    assert!(!controller.is_acknowledgeable());
}

#[test]
fn last_applied_response_wins_regardless_of_submission_order() {
    let mut controller = FeedbackController::new();

    controller.begin_submission();
    controller.begin_submission();
    // Second submission resolves first, the first one arrives late.
    controller.apply_outcome("second@b.com", Outcome::EmailedConfirmation);
    controller.apply_outcome("first@b.com", issued("late-key"));

    assert_eq!(
        controller.alert(),
        Some(&AlertState::info("Click to copy API key"))
    );
    assert!(controller.is_acknowledgeable());
}

#[test]
fn failure_after_issue_discards_pending_secret() {
    let mut controller = FeedbackController::new();
    controller.apply_outcome("a@b.com", issued("abc123"));
    controller.apply_outcome("a@b.com", Outcome::failure("rate limited"));

    assert!(!controller.is_acknowledgeable());
    let mut clipboard = RecordingClipboard::default();
    assert!(!controller.on_acknowledge(&mut clipboard));
    assert!(clipboard.writes.is_empty());
}

#[test]
fn invalid_input_outcome_matches_validation_path() {
    let mut controller = FeedbackController::new();
    controller.apply_outcome("a@b.com", Outcome::InvalidInput);

    assert_eq!(
        controller.alert(),
        Some(&AlertState::error("Invalid email address"))
    );
}

#[test]
fn dismiss_drops_notice_and_key() {
    let mut controller = FeedbackController::new();
    controller.apply_outcome("a@b.com", issued("abc123"));

    controller.dismiss();

    assert_eq!(controller.alert(), None);
    assert!(!controller.is_acknowledgeable());
}
