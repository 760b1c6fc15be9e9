//! Events delivered from the backend worker to the UI loop.

use client_core::Outcome;

pub enum UiEvent {
    /// A request finished. Applied in arrival order, so the latest arrival owns
    /// the alert even if it was submitted first.
    IssuanceCompleted {
        email: String,
        outcome: Outcome,
    },
    Error(String),
}
