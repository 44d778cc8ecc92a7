// VADER lexicon-based sentiment scoring.

use anyhow::Result;
use tracing::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

use super::traits::{SentimentScores, SentimentScorer};

/// Scores text with the VADER sentiment lexicon. Runs locally.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> Result<SentimentScores> {
        let analyzer = SentimentIntensityAnalyzer::new();
        let polarity = analyzer.polarity_scores(text);
        let field = |key: &str| polarity.get(key).copied().unwrap_or(0.0);

        let scores = SentimentScores {
            negative: field("neg"),
            neutral: field("neu"),
            positive: field("pos"),
            compound: field("compound"),
        };
        debug!(compound = scores.compound, chars = text.len(), "Scored sentiment");
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text_has_positive_compound() {
        let scores = VaderScorer.score("The kind lion was happy and grateful.").unwrap();
        assert!(scores.compound > 0.0, "got {scores:?}");
        assert!(scores.positive > scores.negative);
    }

    #[test]
    fn test_proportions_are_bounded() {
        let scores = VaderScorer
            .score("The wolf killed the sheep, a cruel and terrible end.")
            .unwrap();
        for value in [scores.negative, scores.neutral, scores.positive] {
            assert!((0.0..=1.0).contains(&value));
        }
        assert!((-1.0..=1.0).contains(&scores.compound));
    }
}
