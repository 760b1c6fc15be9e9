//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    RequestApiKey { email: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::RequestApiKey { .. } => "request_api_key",
        }
    }
}
