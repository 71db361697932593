use thiserror::Error;

/// Fault raised while producing a response. Only the remote backend path can
/// produce one; the orchestrator turns it into `None` plus a [`FailureNotice`].
#[derive(Debug, Error)]
pub enum ProcessingFailure {
    #[error("Failed to build interaction HTTP client: {0}")]
    ClientBuild(String),

    #[error("Failed to reach interaction backend at {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    #[error("Interaction backend failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid interaction backend payload: {0}")]
    Decode(String),
}

/// Human-readable notification delivered out of band when a command fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    pub title: String,
    pub description: String,
}

impl From<&ProcessingFailure> for FailureNotice {
    fn from(failure: &ProcessingFailure) -> Self {
        Self {
            title: "Processing Failed".to_string(),
            description: failure.to_string(),
        }
    }
}
