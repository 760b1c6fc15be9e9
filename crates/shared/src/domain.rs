use serde::{Deserialize, Serialize};

/// One request for an API key. Only built from input the host control has
/// already accepted; the core never validates it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub email: String,
}

impl Submission {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
