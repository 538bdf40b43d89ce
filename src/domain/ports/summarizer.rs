//! Summarisation port.

use async_trait::async_trait;

use crate::domain::summary::heuristic_summary;

/// Port for producing a short summary of case text.
///
/// Implementations never fail: a remote strategy that cannot deliver falls
/// back to the deterministic heuristic, so summary routes always render.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarise(&self, text: &str, max_sentences: usize) -> String;
}

/// Local strategy delegating to [`heuristic_summary`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicSummarizer;

#[async_trait]
impl Summarizer for HeuristicSummarizer {
    async fn summarise(&self, text: &str, max_sentences: usize) -> String {
        heuristic_summary(text, max_sentences)
    }
}
