use serde::Serialize;

/// Which route a reduction took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionPath {
    SinglePass,
    MultiPass,
}

/// Bookkeeping for one reduction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReductionStats {
    pub path: ReductionPath,
    /// Chunking passes run (0 on the single-pass path)
    pub passes: usize,
    pub chunks_total: usize,
    pub chunks_failed: usize,
    /// Every call made to the summarizer, failed ones included
    pub summarize_calls: usize,
    /// Whether a final summarize call was made over the joined chunk summaries
    pub final_call: bool,
}

/// The bounded summary plus its metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    pub text: String,
    pub original_word_count: usize,
    pub summary_word_count: usize,
    /// `summary_word_count / original_word_count`
    pub compression_ratio: f64,
    pub stats: ReductionStats,
}

impl SummaryResult {
    pub(crate) fn new(text: String, original_word_count: usize, stats: ReductionStats) -> Self {
        let summary_word_count = crate::document::count_words(&text);
        let compression_ratio = if original_word_count == 0 {
            0.0
        } else {
            summary_word_count as f64 / original_word_count as f64
        };

        Self {
            text,
            original_word_count,
            summary_word_count,
            compression_ratio,
            stats,
        }
    }

    /// Compression as a percentage of the original length
    pub fn compression_percent(&self) -> f64 {
        self.compression_ratio * 100.0
    }
}
