mod error;
mod events;
mod options;
mod result;


pub use error::ReduceError;
pub use events::{ChunkEvent, CollectingSink, EventSink, Outcome};
pub use options::{
    DEFAULT_LONG_TEXT_THRESHOLD, DEFAULT_PER_CHUNK_MAX_LENGTH, DEFAULT_PER_CHUNK_MIN_LENGTH,
    ReduceOptions,
};
pub use result::{ReductionPath, ReductionStats, SummaryResult};

use crate::chunker::{Chunk, split_words};
use crate::document::{Document, count_words};
use crate::summarizer::{SummarizeError, Summarizer, SummaryConstraint};
use futures::stream::{self, StreamExt};
use std::borrow::Cow;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Result of one chunk summarize call
enum ChunkOutcome {
    Summarized(String),
    Failed(SummarizeError),
}

/// What one chunking pass produced
struct PassOutput {
    joined: String,
    chunks: usize,
    failed: usize,
}

/// Reduces documents of any length to a bounded summary using a summarizer
/// that only accepts bounded input.
///
/// Short documents go to the summarizer in one call. Longer ones are split
/// into chunks, each chunk is summarized on its own, and the summaries are
/// joined in order; if the joined text is still longer than the requested
/// maximum it is summarized once more.
pub struct Reducer<S> {
    summarizer: S,
    options: ReduceOptions,
    sink: Option<Arc<dyn EventSink>>,
}

impl<S: Summarizer> Reducer<S> {
    pub fn new(summarizer: S) -> Self {
        Self {
            summarizer,
            options: ReduceOptions::default(),
            sink: None,
        }
    }

    pub fn with_options(mut self, options: ReduceOptions) -> Self {
        self.options = options;
        self
    }

    /// Report per-chunk outcomes to `sink` in addition to the log
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn options(&self) -> &ReduceOptions {
        &self.options
    }

    pub fn summarizer(&self) -> &S {
        &self.summarizer
    }

    /// Summarize `document` toward `constraint`.
    ///
    /// The summarizer sees the document's words joined by single spaces, so
    /// line breaks and paragraph structure in the original text are not
    /// passed through.
    pub async fn reduce(
        &self,
        document: &Document,
        constraint: SummaryConstraint,
    ) -> Result<SummaryResult, ReduceError> {
        self.reduce_with_cancel(document, constraint, &CancellationToken::new())
            .await
    }

    /// Like [`reduce`](Self::reduce), aborting with [`ReduceError::Cancelled`]
    /// once `cancel` fires. In-flight summarize calls are dropped and no new
    /// ones are started.
    pub async fn reduce_with_cancel(
        &self,
        document: &Document,
        constraint: SummaryConstraint,
        cancel: &CancellationToken,
    ) -> Result<SummaryResult, ReduceError> {
        if document.is_empty() {
            return Err(ReduceError::EmptyInput);
        }
        constraint.validate()?;
        self.options.validate()?;
        if cancel.is_cancelled() {
            return Err(ReduceError::Cancelled);
        }

        let original = document.word_count();
        if original <= self.options.long_text_threshold {
            info!(
                words = original,
                threshold = self.options.long_text_threshold,
                "single-pass summarization"
            );
            let text = self
                .call_cancellable(&document.text(), constraint, cancel)
                .await?;
            let stats = ReductionStats {
                path: ReductionPath::SinglePass,
                passes: 0,
                chunks_total: 0,
                chunks_failed: 0,
                summarize_calls: 1,
                final_call: false,
            };
            return Ok(SummaryResult::new(text, original, stats));
        }

        info!(
            words = original,
            threshold = self.options.long_text_threshold,
            chunk_size = self.options.chunk_size,
            "multi-pass summarization"
        );
        self.reduce_long(document, constraint, cancel).await
    }

    async fn reduce_long(
        &self,
        document: &Document,
        constraint: SummaryConstraint,
        cancel: &CancellationToken,
    ) -> Result<SummaryResult, ReduceError> {
        let original = document.word_count();
        let mut stats = ReductionStats {
            path: ReductionPath::MultiPass,
            passes: 0,
            chunks_total: 0,
            chunks_failed: 0,
            summarize_calls: 0,
            final_call: false,
        };
        let mut current: Cow<'_, [String]> = Cow::Borrowed(document.words());

        loop {
            stats.passes += 1;
            let pass = stats.passes;
            let output = self.run_pass(pass, &current, cancel).await?;

            stats.chunks_total += output.chunks;
            stats.chunks_failed += output.failed;
            stats.summarize_calls += output.chunks;

            let joined_words = count_words(&output.joined);
            debug!(
                pass,
                words = joined_words,
                failed = output.failed,
                "joined chunk summaries"
            );

            if joined_words <= constraint.max_length {
                return Ok(SummaryResult::new(output.joined, original, stats));
            }

            // Re-chunk only while the text keeps shrinking and is still long
            let rechunk = pass < self.options.max_passes
                && joined_words > self.options.long_text_threshold
                && joined_words < current.len();
            if !rechunk {
                stats.final_call = true;
                stats.summarize_calls += 1;
                let text = self
                    .call_cancellable(&output.joined, constraint, cancel)
                    .await?;
                return Ok(SummaryResult::new(text, original, stats));
            }

            current = Cow::Owned(
                output
                    .joined
                    .split_whitespace()
                    .map(str::to_string)
                    .collect(),
            );
        }
    }

    /// Split `words`, summarize every chunk, and join the survivors in order
    async fn run_pass(
        &self,
        pass: usize,
        words: &[String],
        cancel: &CancellationToken,
    ) -> Result<PassOutput, ReduceError> {
        let chunks = split_words(words, self.options.chunk_size)?;
        debug!(pass, chunks = chunks.len(), words = words.len(), "summarizing chunks");

        let outcomes = self.summarize_chunks(pass, &chunks, cancel).await?;

        let mut summaries = Vec::with_capacity(outcomes.len());
        let mut failed = 0;
        for outcome in outcomes {
            match outcome {
                ChunkOutcome::Summarized(summary) => summaries.push(summary),
                ChunkOutcome::Failed(_) => failed += 1,
            }
        }

        if summaries.is_empty() {
            return Err(ReduceError::SummarizationFailed {
                chunks: chunks.len(),
            });
        }

        Ok(PassOutput {
            joined: summaries.join(" "),
            chunks: chunks.len(),
            failed,
        })
    }

    /// Summarize chunks with at most `max_concurrency` calls in flight.
    /// Outcomes come back in chunk order whatever order the calls finish in.
    async fn summarize_chunks(
        &self,
        pass: usize,
        chunks: &[Chunk<'_>],
        cancel: &CancellationToken,
    ) -> Result<Vec<ChunkOutcome>, ReduceError> {
        let per_chunk = self.options.per_chunk_constraint();
        let mut pending = std::pin::pin!(stream::iter(chunks)
            .map(|chunk| self.summarize_chunk(pass, chunk, per_chunk, cancel))
            .buffered(self.options.max_concurrency));

        let mut outcomes = Vec::with_capacity(chunks.len());
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!(pass, completed = outcomes.len(), "chunk summarization cancelled");
                    return Err(ReduceError::Cancelled);
                }
                next = pending.next() => match next {
                    Some(outcome) => outcomes.push(outcome?),
                    None => break,
                },
            }
        }

        Ok(outcomes)
    }

    async fn summarize_chunk(
        &self,
        pass: usize,
        chunk: &Chunk<'_>,
        constraint: SummaryConstraint,
        cancel: &CancellationToken,
    ) -> Result<ChunkOutcome, ReduceError> {
        if cancel.is_cancelled() {
            return Err(ReduceError::Cancelled);
        }

        let outcome = match self.summarizer.summarize(&chunk.text(), constraint).await {
            Ok(summary) if summary.trim().is_empty() => {
                ChunkOutcome::Failed(SummarizeError::Model("empty summary".to_string()))
            }
            Ok(summary) => ChunkOutcome::Summarized(summary.trim().to_string()),
            Err(err) => ChunkOutcome::Failed(err),
        };
        self.report(pass, chunk.index, &outcome);
        Ok(outcome)
    }

    async fn call_cancellable(
        &self,
        text: &str,
        constraint: SummaryConstraint,
        cancel: &CancellationToken,
    ) -> Result<String, ReduceError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ReduceError::Cancelled),
            summary = self.summarizer.summarize(text, constraint) => Ok(summary?),
        }
    }

    fn report(&self, pass: usize, chunk_index: usize, outcome: &ChunkOutcome) {
        let (outcome, reason) = match outcome {
            ChunkOutcome::Summarized(_) => {
                debug!(pass, chunk = chunk_index, "chunk summarized");
                (Outcome::Success, None)
            }
            ChunkOutcome::Failed(err) => {
                warn!(pass, chunk = chunk_index, error = %err, "skipping chunk after summarize failure");
                (Outcome::Failure, Some(err.to_string()))
            }
        };

        if let Some(sink) = &self.sink {
            sink.record(&ChunkEvent {
                pass,
                chunk_index,
                outcome,
                reason,
            });
        }
    }
}
