//! Heuristic case summarisation.
//!
//! Deterministic first-N-sentences truncation: no semantic quality is
//! promised, but the output is a stable function of the input alone, which
//! makes it suitable both as the sole strategy and as the fallback when a
//! remote summariser fails.

/// Default number of sentences kept by the summary routes.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 2;

/// Return the first `max_sentences` sentences of `text`.
///
/// Sentences are split on `.`, trimmed, and blank fragments dropped. Kept
/// sentences are rejoined with `". "`. When sentences were dropped the
/// summary ends with `"..."`; otherwise the final terminator is restored.
/// Empty or whitespace-only input yields an empty summary.
pub fn heuristic_summary(text: &str, max_sentences: usize) -> String {
    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect();
    if sentences.is_empty() {
        return String::new();
    }

    let truncated = sentences.len() > max_sentences;
    let mut summary = sentences
        .into_iter()
        .take(max_sentences)
        .collect::<Vec<_>>()
        .join(". ");
    summary.push_str(if truncated { "..." } else { "." });
    summary
}
