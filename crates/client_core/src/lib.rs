//! Client side of API key issuance: request classification and the feedback
//! state a front end renders.

pub mod error;
pub mod feedback;
pub mod issuance;
pub mod outcome;

pub use error::IssuanceError;
pub use feedback::{AlertState, ClipboardSink, FeedbackController, Severity};
pub use issuance::{IssuanceClient, KeyIssuer};
pub use outcome::{classify, ApiKey, Outcome};
