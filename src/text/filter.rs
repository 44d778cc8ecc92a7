// Derived histograms: stop-word removal and vocabulary restriction.
//
// Both return a new histogram and leave the input untouched.

use super::histogram::Histogram;
use super::vocabulary::Vocabulary;

/// Copy of `hist` with every stop word removed.
///
/// Stop words that aren't in `hist` are ignored. Idempotent.
pub fn remove_stopwords<S: AsRef<str>>(hist: &Histogram, stopwords: &[S]) -> Histogram {
    let mut filtered = hist.clone();
    for word in stopwords {
        filtered.remove(word.as_ref());
    }
    filtered
}

/// Intersection of `hist` with `vocabulary`, keeping the counts from `hist`.
///
/// Vocabulary words missing from `hist` are left out, not zero-filled.
pub fn restrict_to_vocabulary(hist: &Histogram, vocabulary: &Vocabulary) -> Histogram {
    let mut matched = Histogram::new();
    for word in vocabulary.iter() {
        if hist.contains(word) {
            matched.insert_count(word.to_string(), hist.get(word));
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_stopwords_does_not_mutate_input() {
        let hist = Histogram::from(vec![("the", 5), ("fox", 3)]);
        let filtered = remove_stopwords(&hist, &["the", "a"]);
        assert!(!filtered.contains("the"));
        assert_eq!(filtered.get("fox"), 3);
        assert_eq!(hist.get("the"), 5);
    }

    #[test]
    fn test_restrict_is_intersection() {
        let hist = Histogram::from(vec![("fox", 4), ("sheep", 1)]);
        let vocab = Vocabulary::new(vec!["fox".to_string(), "wolf".to_string()]);
        let matched = restrict_to_vocabulary(&hist, &vocab);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched.get("fox"), 4);
        assert!(!matched.contains("wolf"));
    }
}
