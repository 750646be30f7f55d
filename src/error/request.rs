use thiserror::Error;

/// Coarse classification of a failed forecast request.
///
/// Both kinds collapse to the same user-visible failure; the split only
/// matters for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    Transport,
    MalformedResponse,
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to prediction service failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("Prediction service returned HTTP {status}.")]
    Status { status: u16 },
    #[error("Prediction service returned a malformed body: {source}")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
    },
}

impl RequestError {
    #[must_use]
    pub const fn kind(&self) -> RequestErrorKind {
        match self {
            RequestError::BuildClient { .. }
            | RequestError::Transport { .. }
            | RequestError::Status { .. } => RequestErrorKind::Transport,
            RequestError::MalformedResponse { .. } => RequestErrorKind::MalformedResponse,
        }
    }
}
