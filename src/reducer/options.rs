use super::ReduceError;
use crate::chunker::DEFAULT_CHUNK_SIZE;
use crate::summarizer::SummaryConstraint;
use serde::{Deserialize, Serialize};

/// Documents longer than this many words take the multi-pass path
pub const DEFAULT_LONG_TEXT_THRESHOLD: usize = 1000;

pub const DEFAULT_PER_CHUNK_MIN_LENGTH: usize = 20;
pub const DEFAULT_PER_CHUNK_MAX_LENGTH: usize = 100;

/// Tuning for [`Reducer`](super::Reducer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReduceOptions {
    /// Inclusive upper word count for the single-pass path
    pub long_text_threshold: usize,
    /// Words per chunk on the multi-pass path
    pub chunk_size: usize,
    pub per_chunk_min_length: usize,
    pub per_chunk_max_length: usize,
    /// Chunk summarize calls allowed in flight at once
    pub max_concurrency: usize,
    /// Chunking passes before the final summarize call. 1 never re-chunks.
    pub max_passes: usize,
}

impl ReduceOptions {
    /// Bounds used for each chunk summary on the multi-pass path
    pub fn per_chunk_constraint(&self) -> SummaryConstraint {
        SummaryConstraint {
            min_length: self.per_chunk_min_length,
            max_length: self.per_chunk_max_length,
        }
    }

    pub fn validate(&self) -> Result<(), ReduceError> {
        let positive = [
            ("long_text_threshold", self.long_text_threshold),
            ("chunk_size", self.chunk_size),
            ("max_concurrency", self.max_concurrency),
            ("max_passes", self.max_passes),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(ReduceError::InvalidArgument(format!(
                    "{} must be at least 1",
                    name
                )));
            }
        }

        self.per_chunk_constraint().validate()?;
        Ok(())
    }
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            long_text_threshold: DEFAULT_LONG_TEXT_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
            per_chunk_min_length: DEFAULT_PER_CHUNK_MIN_LENGTH,
            per_chunk_max_length: DEFAULT_PER_CHUNK_MAX_LENGTH,
            max_concurrency: 1,
            max_passes: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ReduceOptions::default();
        assert_eq!(options.long_text_threshold, 1000);
        assert_eq!(options.chunk_size, 500);
        assert_eq!(options.per_chunk_constraint(), SummaryConstraint::new(20, 100).unwrap());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_zero_chunk_size_invalid() {
        let options = ReduceOptions {
            chunk_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ReduceError::InvalidArgument(msg)) if msg.contains("chunk_size")
        ));
    }

    #[test]
    fn test_inverted_per_chunk_bounds_invalid() {
        let options = ReduceOptions {
            per_chunk_min_length: 120,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ReduceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_partial_json() {
        let options: ReduceOptions =
            serde_json::from_str(r#"{"chunk_size": 300, "max_concurrency": 4}"#).unwrap();
        assert_eq!(options.chunk_size, 300);
        assert_eq!(options.max_concurrency, 4);
        assert_eq!(options.long_text_threshold, 1000);
    }
}
