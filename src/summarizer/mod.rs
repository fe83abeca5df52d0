pub mod client;
pub mod constraint;
pub mod error;
pub mod model;
pub mod types;

#[cfg(test)]
mod tests;

use std::future::Future;
use std::sync::Arc;

pub use client::SummarizerClient;
pub use constraint::{InvalidConstraint, SummaryConstraint};
pub use error::SummarizeError;
pub use model::ModelInfo;
pub use types::{HealthResponse, SummarizeRequest, SummarizeResponse};

/// A bounded-length summarization capability.
///
/// Implementations accept text that fits their own input limit and return a
/// summary that tries to honor `constraint`. Each call is independent; the
/// caller owns any retry or skip policy.
pub trait Summarizer: Send + Sync {
    fn summarize(
        &self,
        text: &str,
        constraint: SummaryConstraint,
    ) -> impl Future<Output = Result<String, SummarizeError>> + Send;
}

impl<S: Summarizer> Summarizer for Arc<S> {
    fn summarize(
        &self,
        text: &str,
        constraint: SummaryConstraint,
    ) -> impl Future<Output = Result<String, SummarizeError>> + Send {
        (**self).summarize(text, constraint)
    }
}

/// Adapts a plain function or closure into a [`Summarizer`]
pub struct FnSummarizer<F> {
    f: F,
}

impl<F> FnSummarizer<F>
where
    F: Fn(&str, SummaryConstraint) -> Result<String, SummarizeError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Summarizer for FnSummarizer<F>
where
    F: Fn(&str, SummaryConstraint) -> Result<String, SummarizeError> + Send + Sync,
{
    fn summarize(
        &self,
        text: &str,
        constraint: SummaryConstraint,
    ) -> impl Future<Output = Result<String, SummarizeError>> + Send {
        std::future::ready((self.f)(text, constraint))
    }
}
