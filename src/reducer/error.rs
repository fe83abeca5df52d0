use crate::chunker::ChunkError;
use crate::summarizer::{InvalidConstraint, SummarizeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReduceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Input document has no words")]
    EmptyInput,

    #[error("Summarizer call failed: {0}")]
    External(#[from] SummarizeError),

    #[error("All {chunks} chunks failed to summarize")]
    SummarizationFailed { chunks: usize },

    #[error("Reduction cancelled")]
    Cancelled,
}

impl From<ChunkError> for ReduceError {
    fn from(err: ChunkError) -> Self {
        ReduceError::InvalidArgument(err.to_string())
    }
}

impl From<InvalidConstraint> for ReduceError {
    fn from(err: InvalidConstraint) -> Self {
        ReduceError::InvalidArgument(err.to_string())
    }
}
