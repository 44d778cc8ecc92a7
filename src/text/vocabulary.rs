// Vocabulary set: the curated word list (animal names) matched against a text.

use std::collections::HashSet;

use super::tokenize::tokenize_lines;

/// Ordered, de-duplicated list of vocabulary tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Wrap an already-cleaned word list. No header is dropped here.
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Parse a word listing: one or more words per line, first token is a
    /// label and is discarded.
    ///
    /// Tokens go through the line tokenizer (no hyphen splitting) and are
    /// de-duplicated keeping first appearance, so the discarded label is the
    /// first distinct token of the listing.
    pub fn from_listing(listing: &str) -> Self {
        let mut seen = HashSet::new();
        let words = tokenize_lines(listing)
            .into_iter()
            .filter(|w| seen.insert(w.clone()))
            .skip(1)
            .collect();
        Self { words }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_listing_drops_header_and_dedups() {
        let vocab = Vocabulary::from_listing("Animals\nFox\nwolf\nfox\nGuinea-pig\n");
        let words: Vec<&str> = vocab.iter().collect();
        assert_eq!(words, vec!["fox", "wolf", "guinea-pig"]);
    }

    #[test]
    fn test_from_listing_empty() {
        assert!(Vocabulary::from_listing("").is_empty());
        assert!(Vocabulary::from_listing("Animals\n").is_empty());
    }
}
