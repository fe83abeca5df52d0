// model.rs - metadata about the summarization models a server can load
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub description: String,
    pub strength: String,
}

impl ModelInfo {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        strength: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            strength: strength.into(),
        }
    }

    pub fn bart_large_cnn() -> Self {
        Self::new(
            "facebook/bart-large-cnn",
            "Excellent for news articles and general text",
            "High quality summaries",
        )
    }

    pub fn pegasus_cnn_dailymail() -> Self {
        Self::new(
            "google/pegasus-cnn_dailymail",
            "Specialized for news content",
            "Great for articles",
        )
    }

    pub fn t5_base() -> Self {
        Self::new(
            "t5-base",
            "Versatile general-purpose model",
            "Balanced performance",
        )
    }

    pub fn flan_t5_base() -> Self {
        Self::new(
            "google/flan-t5-base",
            "Instruction-tuned general-purpose model",
            "Follows length hints closely",
        )
    }

    /// Every model known to work with the reference server
    pub fn catalog() -> Vec<Self> {
        vec![
            Self::bart_large_cnn(),
            Self::pegasus_cnn_dailymail(),
            Self::t5_base(),
            Self::flan_t5_base(),
        ]
    }

    pub fn find(name: &str) -> Option<Self> {
        Self::catalog().into_iter().find(|m| m.name == name)
    }

    /// Name without the organization prefix
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

impl Default for ModelInfo {
    fn default() -> Self {
        Self::bart_large_cnn()
    }
}
