use super::{
    HealthResponse, SummarizeError, SummarizeRequest, SummarizeResponse, Summarizer,
    SummaryConstraint,
};
use reqwest::{Client, Response};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Default address of the local model server
pub const DEFAULT_ENDPOINT: &str = "http://localhost:18116";

/// Generation on CPU-bound models can take minutes per call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// HTTP client for a model server exposing `/health` and `/summarize`
#[derive(Debug, Clone)]
pub struct SummarizerClient {
    http: Client,
    endpoint: String,
    model: Option<String>,
    timeout: Duration,
}

impl SummarizerClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SummarizeError> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SummarizeError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: None,
            timeout,
        })
    }

    /// Ask the server to use a specific model for every request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Check if the summarizer server is healthy
    pub async fn health_check(&self) -> Result<HealthResponse, SummarizeError> {
        let response = self
            .http
            .get(format!("{}/health", self.endpoint))
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Summarize one bounded-length text
    pub async fn summarize_text(
        &self,
        text: &str,
        constraint: SummaryConstraint,
    ) -> Result<String, SummarizeError> {
        let req = SummarizeRequest {
            text: text.to_string(),
            min_length: constraint.min_length,
            max_length: constraint.max_length,
            model: self.model.clone(),
        };

        debug!(
            words = text.split_whitespace().count(),
            min = constraint.min_length,
            max = constraint.max_length,
            "sending summarize request"
        );

        let response = self
            .http
            .post(format!("{}/summarize", self.endpoint))
            .json(&req)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let response = Self::check_status(response).await?;
        let res: SummarizeResponse = response.json().await.map_err(|e| self.classify(e))?;
        Ok(res.summary)
    }

    async fn check_status(response: Response) -> Result<Response, SummarizeError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(SummarizeError::ServerError {
            status: status.as_u16(),
            body,
        })
    }

    fn classify(&self, err: reqwest::Error) -> SummarizeError {
        if err.is_timeout() {
            SummarizeError::Timeout(self.timeout)
        } else {
            SummarizeError::RequestFailed(err)
        }
    }
}

impl Summarizer for SummarizerClient {
    fn summarize(
        &self,
        text: &str,
        constraint: SummaryConstraint,
    ) -> impl Future<Output = Result<String, SummarizeError>> + Send {
        self.summarize_text(text, constraint)
    }
}
