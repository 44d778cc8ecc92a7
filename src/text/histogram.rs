// Histogram: word -> occurrence count.
//
// Built by accumulating tokens from a text source. Counts only ever go up
// during construction; once built, every derived histogram (filtered,
// restricted) is a fresh copy.

use std::collections::HashMap;

use serde::Serialize;

use super::span;
use super::tokenize::tokenize;
use crate::fables::{COLLECTION_END, COLLECTION_START};

/// Map from normalized token to the number of times it occurs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Histogram {
    counts: HashMap<String, u64>,
}

/// Which part of the text a histogram is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim<'a> {
    /// The whole text.
    Full,
    /// The fable collection body: after the last table-of-contents line, up
    /// to (excluding) the end-of-collection notice.
    CollectionBody,
    /// After `start` up to and including `end`.
    Between { start: &'a str, end: &'a str },
}

impl<'a> Trim<'a> {
    /// The substring of `text` this trim mode selects.
    ///
    /// Missing markers degrade rather than fail; see [`span`].
    pub fn apply<'t>(&self, text: &'t str) -> &'t str {
        match *self {
            Trim::Full => text,
            Trim::CollectionBody => span::between_exclusive(text, COLLECTION_START, COLLECTION_END),
            Trim::Between { start, end } => span::extract_between(text, start, end),
        }
    }

    /// Like [`Trim::apply`] but fails when a boundary marker is absent.
    pub fn try_apply<'t>(&self, text: &'t str) -> Result<&'t str, span::SpanError> {
        match *self {
            Trim::Full => Ok(text),
            Trim::CollectionBody => {
                span::try_between_exclusive(text, COLLECTION_START, COLLECTION_END)
            }
            Trim::Between { start, end } => span::try_extract_between(text, start, end),
        }
    }
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `token`.
    pub fn add(&mut self, token: impl Into<String>) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
    }

    /// Count of `token`; 0 if absent.
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub(crate) fn insert_count(&mut self, token: String, count: u64) {
        self.counts.insert(token, count);
    }

    pub(crate) fn remove(&mut self, token: &str) {
        self.counts.remove(token);
    }
}

impl<S: Into<String>> FromIterator<S> for Histogram {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut hist = Histogram::new();
        for token in iter {
            hist.add(token);
        }
        hist
    }
}

impl<S: Into<String>> From<Vec<(S, u64)>> for Histogram {
    /// Build directly from (token, count) pairs. Later pairs overwrite earlier ones.
    fn from(pairs: Vec<(S, u64)>) -> Self {
        let mut hist = Histogram::new();
        for (token, count) in pairs {
            hist.insert_count(token.into(), count);
        }
        hist
    }
}

/// Build a histogram from the part of `text` selected by `trim`.
pub fn build(text: &str, trim: Trim<'_>) -> Histogram {
    tokenize(trim.apply(text)).into_iter().collect()
}

/// Strict form of [`build`]: fails if `trim` names a marker missing from `text`.
pub fn try_build(text: &str, trim: Trim<'_>) -> Result<Histogram, span::SpanError> {
    Ok(tokenize(trim.try_apply(text)?).into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_full_counts_tokens() {
        let hist = build("The fox and the goat. The FOX!", Trim::Full);
        assert_eq!(hist.get("the"), 3);
        assert_eq!(hist.get("fox"), 2);
        assert_eq!(hist.get("goat"), 1);
        assert_eq!(hist.get("wolf"), 0);
        assert_eq!(hist.len(), 4);
    }

    #[test]
    fn test_build_between_markers() {
        let text = "preface [[ a wolf and a lamb ]] afterword wolf";
        let hist = build(
            text,
            Trim::Between {
                start: "[[",
                end: "]]",
            },
        );
        assert_eq!(hist.get("wolf"), 1);
        assert_eq!(hist.get("a"), 2);
        assert!(!hist.contains("afterword"));
        // The closing marker is inside the span and strips to an empty token.
        assert_eq!(hist.get(""), 1);
    }

    #[test]
    fn test_try_build_reports_missing_marker() {
        let result = try_build(
            "no markers here",
            Trim::Between {
                start: "<<",
                end: ">>",
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_token_is_counted() {
        let hist = build("fox ... !!", Trim::Full);
        assert_eq!(hist.get(""), 2);
        assert_eq!(hist.get("fox"), 1);
    }

    #[test]
    fn test_from_pairs() {
        let hist = Histogram::from(vec![("fox", 3), ("grapes", 2)]);
        assert_eq!(hist.get("fox"), 3);
        assert_eq!(hist.get("grapes"), 2);
    }
}
