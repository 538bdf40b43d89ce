//! Remote summarisation adapter.
//!
//! Posts case text to an external summarisation service; any failure
//! (connection, timeout, non-success status, malformed body) falls back to
//! the local heuristic so the summary page always renders.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::heuristic_summary;
use crate::domain::ports::Summarizer;

/// Default end-to-end timeout for a remote summarisation call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
struct SummariseRequestDto<'a> {
    text: &'a str,
    max_sentences: usize,
}

#[derive(Debug, Deserialize)]
struct SummariseResponseDto {
    summary: String,
}

/// [`Summarizer`] backed by an HTTP summarisation service.
#[derive(Clone)]
pub struct RemoteSummarizer {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteSummarizer {
    /// Build a client for `endpoint` with [`DEFAULT_REQUEST_TIMEOUT`].
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(endpoint, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build a client for `endpoint` with an explicit request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn request(&self, text: &str, max_sentences: usize) -> Result<String, reqwest::Error> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SummariseRequestDto {
                text,
                max_sentences,
            })
            .send()
            .await?
            .error_for_status()?;
        let body: SummariseResponseDto = response.json().await?;
        Ok(body.summary)
    }
}

#[async_trait]
impl Summarizer for RemoteSummarizer {
    async fn summarise(&self, text: &str, max_sentences: usize) -> String {
        match self.request(text, max_sentences).await {
            Ok(summary) => summary,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    endpoint = %self.endpoint,
                    "remote summariser unavailable, using heuristic"
                );
                heuristic_summary(text, max_sentences)
            }
        }
    }
}
