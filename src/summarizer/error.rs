use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// Failure reported by a non-HTTP backend
    #[error("Model error: {0}")]
    Model(String),
}
