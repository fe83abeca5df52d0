use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lower bound for a requested summary, in words
pub const DEFAULT_MIN_LENGTH: usize = 30;

/// Default upper bound for a requested summary, in words
pub const DEFAULT_MAX_LENGTH: usize = 150;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid summary length bounds: min {min} / max {max} (need 0 < min <= max)")]
pub struct InvalidConstraint {
    pub min: usize,
    pub max: usize,
}

/// Target summary length in words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConstraint {
    pub min_length: usize,
    pub max_length: usize,
}

impl SummaryConstraint {
    /// Build a constraint, rejecting zero or inverted bounds
    pub fn new(min_length: usize, max_length: usize) -> Result<Self, InvalidConstraint> {
        let constraint = Self {
            min_length,
            max_length,
        };
        constraint.validate()?;
        Ok(constraint)
    }

    pub fn validate(&self) -> Result<(), InvalidConstraint> {
        if self.min_length == 0 || self.min_length > self.max_length {
            return Err(InvalidConstraint {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}

impl Default for SummaryConstraint {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}
