// Sentiment scorer trait: the swap-ready abstraction.
//
// The report forwards an excerpt and prints whatever comes back; nothing in
// the crate computes on these numbers.

use anyhow::Result;
use serde::Serialize;

/// Polarity scores for one span of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScores {
    /// Proportion of negative sentiment, 0.0 to 1.0
    pub negative: f64,
    /// Proportion of neutral sentiment, 0.0 to 1.0
    pub neutral: f64,
    /// Proportion of positive sentiment, 0.0 to 1.0
    pub positive: f64,
    /// Normalized overall polarity, -1.0 to 1.0
    pub compound: f64,
}

/// Trait for scoring the sentiment polarity of a text span.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> Result<SentimentScores>;
}

/// Scorer used when sentiment is switched off.
/// Errors if actually called so no fake scores are ever reported.
pub struct NoopScorer;

impl SentimentScorer for NoopScorer {
    fn score(&self, _text: &str) -> Result<SentimentScores> {
        anyhow::bail!("NoopScorer should never be called; sentiment scoring is disabled")
    }
}
