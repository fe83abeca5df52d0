use crate::reducer::ReduceOptions;
use crate::summarizer::SummaryConstraint;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one summarization run, loadable from a JSON file.
///
/// Both sections are optional and any missing field takes its default:
///
/// ```json
/// { "summary": { "max_length": 120 }, "reduce": { "chunk_size": 400 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub summary: SummaryConstraint,
    pub reduce: ReduceOptions,
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub long_text_threshold: Option<usize>,
    pub chunk_size: Option<usize>,
    pub per_chunk_min_length: Option<usize>,
    pub per_chunk_max_length: Option<usize>,
    pub max_concurrency: Option<usize>,
    pub max_passes: Option<usize>,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Failed to parse options file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        fn set(slot: &mut usize, value: Option<usize>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        set(&mut self.summary.min_length, overrides.min_length);
        set(&mut self.summary.max_length, overrides.max_length);
        set(
            &mut self.reduce.long_text_threshold,
            overrides.long_text_threshold,
        );
        set(&mut self.reduce.chunk_size, overrides.chunk_size);
        set(
            &mut self.reduce.per_chunk_min_length,
            overrides.per_chunk_min_length,
        );
        set(
            &mut self.reduce.per_chunk_max_length,
            overrides.per_chunk_max_length,
        );
        set(&mut self.reduce.max_concurrency, overrides.max_concurrency);
        set(&mut self.reduce.max_passes, overrides.max_passes);
    }
}
