// Frequency ranking.
//
// Entries are sorted ascending by (count, word) and the whole list is then
// reversed, so ties on count come out with the lexicographically larger word
// first.

use serde::Serialize;

use super::histogram::Histogram;

/// One ranked histogram entry. Field order drives the derived ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct RankedWord {
    pub count: u64,
    pub word: String,
}

impl RankedWord {
    pub fn new(count: u64, word: impl Into<String>) -> Self {
        Self {
            count,
            word: word.into(),
        }
    }
}

/// Every entry of `hist`, most frequent first, ties broken word-descending.
pub fn rank(hist: &Histogram) -> Vec<RankedWord> {
    let mut ranked: Vec<RankedWord> = hist
        .iter()
        .map(|(word, count)| RankedWord::new(count, word))
        .collect();
    ranked.sort();
    ranked.reverse();
    ranked
}

/// The first `n` entries of [`rank`]; all of them if `n` is larger.
pub fn top(hist: &Histogram, n: usize) -> Vec<RankedWord> {
    let mut ranked = rank(hist);
    ranked.truncate(n);
    ranked
}

/// Sum of all counts.
pub fn total(hist: &Histogram) -> u64 {
    hist.iter().map(|(_, count)| count).sum()
}
