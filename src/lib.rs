// Public API exports
pub mod chunker;
pub mod config;
pub mod document;
pub mod reducer;
pub mod summarizer;

// Re-export main types for convenience
pub use chunker::{Chunk, ChunkError, DEFAULT_CHUNK_SIZE, split_words};

pub use config::{Overrides, RunConfig};

pub use document::{Document, MIN_RECOMMENDED_WORDS, count_words};

pub use reducer::{
    ChunkEvent, CollectingSink, EventSink, Outcome, ReduceError, ReduceOptions, Reducer,
    ReductionPath, ReductionStats, SummaryResult,
};

pub use summarizer::{
    FnSummarizer, ModelInfo, SummarizeError, Summarizer, SummarizerClient, SummaryConstraint,
};
