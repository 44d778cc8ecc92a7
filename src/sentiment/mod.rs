// Sentiment scoring: trait-based so the lexicon backend can be swapped.

pub mod traits;
pub mod vader;

pub use traits::{NoopScorer, SentimentScorer, SentimentScores};
pub use vader::VaderScorer;
