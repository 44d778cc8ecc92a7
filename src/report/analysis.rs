// Analysis: everything the report shows, computed from resolved inputs.
//
// Pure apart from the sentiment scorer call: the corpus, vocabulary and stop
// words are passed in, nothing is fetched here.

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use crate::fables::{Excerpt, FEATURED, FEATURED_PAIRS, TABLE_OF_CONTENTS};
use crate::sentiment::{SentimentScorer, SentimentScores};
use crate::similarity::{self, SimilarityError};
use crate::text::filter::{remove_stopwords, restrict_to_vocabulary};
use crate::text::histogram::{self, Trim};
use crate::text::rank::{rank, top, total};
use crate::text::{Histogram, RankedWord, Vocabulary};

/// Knobs for [`analyze`].
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// How many stop-word-filtered words to list
    pub top_words: usize,
    /// How many vocabulary matches to list for the contents and the corpus
    pub top_vocabulary: usize,
    /// Whether the scorer is called for the featured excerpts
    pub score_sentiment: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_words: 10,
            top_vocabulary: 5,
            score_sentiment: true,
        }
    }
}

/// Similarity between two excerpts, or why it has no value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SimilarityOutcome {
    Score { normalized: f64 },
    Undefined { reason: String },
}

impl From<Result<f64, SimilarityError>> for SimilarityOutcome {
    fn from(result: Result<f64, SimilarityError>) -> Self {
        match result {
            Ok(normalized) => SimilarityOutcome::Score { normalized },
            Err(e) => SimilarityOutcome::Undefined {
                reason: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PairSimilarity {
    pub first: String,
    pub second: String,
    pub outcome: SimilarityOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExcerptSentiment {
    pub excerpt: String,
    pub scores: SentimentScores,
}

/// The full fable collection report.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Most frequent words once stop words are removed
    pub top_words: Vec<RankedWord>,
    /// Every vocabulary word found in the collection, ranked
    pub vocabulary_matches: Vec<RankedWord>,
    /// Occurrences of vocabulary words in the collection
    pub vocabulary_total: u64,
    /// Occurrences of all words in the collection
    pub word_total: u64,
    /// vocabulary_total / word_total * 100; None for an empty collection
    pub vocabulary_percentage: Option<f64>,
    /// Top vocabulary matches in the table of contents
    pub contents_top: Vec<RankedWord>,
    /// Top vocabulary matches in the whole collection
    pub corpus_top: Vec<RankedWord>,
    /// Sentiment of each featured excerpt; empty when scoring is off
    pub sentiments: Vec<ExcerptSentiment>,
    /// Normalized similarity of the featured excerpt pairs
    pub similarities: Vec<PairSimilarity>,
}

/// Build the report for `corpus`.
pub fn analyze(
    corpus: &str,
    vocabulary: &Vocabulary,
    stopwords: &[String],
    scorer: &dyn SentimentScorer,
    options: &AnalysisOptions,
) -> Result<Analysis> {
    let collection = histogram::build(corpus, Trim::CollectionBody);
    let matches = restrict_to_vocabulary(&collection, vocabulary);
    let filtered = remove_stopwords(&collection, stopwords);

    let word_total = total(&collection);
    let vocabulary_total = total(&matches);
    let vocabulary_percentage = percentage(vocabulary_total, word_total);

    info!(
        distinct_words = collection.len(),
        word_total,
        vocabulary_matches = matches.len(),
        vocabulary_total,
        "Built collection histogram"
    );

    let contents = histogram::build(corpus, TABLE_OF_CONTENTS.trim());
    let contents_matches = restrict_to_vocabulary(&contents, vocabulary);

    let sentiments = if options.score_sentiment {
        FEATURED
            .iter()
            .map(|excerpt| {
                Ok(ExcerptSentiment {
                    excerpt: excerpt.name.to_string(),
                    scores: scorer.score(excerpt.extract(corpus))?,
                })
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        Vec::new()
    };

    let excerpt_hists: Vec<Histogram> = FEATURED
        .iter()
        .map(|excerpt| histogram::build(corpus, excerpt.trim()))
        .collect();
    let similarities = FEATURED_PAIRS
        .iter()
        .map(|&(i, j)| {
            pair_similarity(&FEATURED[i], &excerpt_hists[i], &FEATURED[j], &excerpt_hists[j])
        })
        .collect();

    Ok(Analysis {
        top_words: top(&filtered, options.top_words),
        vocabulary_matches: rank(&matches),
        vocabulary_total,
        word_total,
        vocabulary_percentage,
        contents_top: top(&contents_matches, options.top_vocabulary),
        corpus_top: top(&matches, options.top_vocabulary),
        sentiments,
        similarities,
    })
}

fn pair_similarity(
    first: &Excerpt,
    first_hist: &Histogram,
    second: &Excerpt,
    second_hist: &Histogram,
) -> PairSimilarity {
    let result = similarity::normalized_similarity(first_hist, second_hist);
    if let Err(e) = &result {
        warn!(first = first.name, second = second.name, error = %e, "Similarity undefined");
    }
    PairSimilarity {
        first: first.name.to_string(),
        second: second.name.to_string(),
        outcome: result.into(),
    }
}

/// Normalized similarity of two caller-chosen spans of `corpus`.
///
/// `conventional` switches to the textbook cosine denominator.
pub fn compare_spans(
    corpus: &str,
    first: Trim<'_>,
    second: Trim<'_>,
    conventional: bool,
) -> Result<f64, SimilarityError> {
    let a = histogram::build(corpus, first);
    let b = histogram::build(corpus, second);
    if conventional {
        similarity::normalized_conventional(&a, &b)
    } else {
        similarity::normalized_similarity(&a, &b)
    }
}

/// `part / whole * 100`, or None when `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some(part as f64 / whole as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), Some(25.0));
        assert_eq!(percentage(0, 0), None);
    }

    #[test]
    fn test_outcome_from_error() {
        let outcome: SimilarityOutcome = Err(SimilarityError::NoOverlap).into();
        assert!(matches!(outcome, SimilarityOutcome::Undefined { .. }));
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = SimilarityOutcome::Score { normalized: 0.5 };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"status":"score","normalized":0.5}"#);
    }
}
