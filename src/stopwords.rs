// Stop-word lists, looked up by language tag.
//
// The lists are NLTK's, as bundled by `stop-words` under its `nltk` feature.
// `stop_words::get` panics on a language it has no list for, so only the
// languages matched below are ever passed to it.

use stop_words::{get, LANGUAGE};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StopwordError {
    #[error("no stop-word list for language {0:?}")]
    UnsupportedLanguage(String),
}

/// Supplies the stop words for a language.
pub trait StopwordSource {
    fn get_stopwords(&self, language_tag: &str) -> Result<Vec<String>, StopwordError>;
}

/// NLTK stop words bundled with the `stop-words` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStopwords;

impl StopwordSource for BundledStopwords {
    fn get_stopwords(&self, language_tag: &str) -> Result<Vec<String>, StopwordError> {
        let language = match language_tag.to_ascii_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "fr" | "french" => LANGUAGE::French,
            "de" | "german" => LANGUAGE::German,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            _ => return Err(StopwordError::UnsupportedLanguage(language_tag.to_string())),
        };
        Ok(get(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_contains_common_words() {
        let words = BundledStopwords.get_stopwords("en").unwrap();
        assert!(words.iter().any(|w| w == "the"));
        assert!(words.iter().any(|w| w == "and"));
    }

    #[test]
    fn test_english_is_the_nltk_list() {
        let words = BundledStopwords.get_stopwords("en").unwrap();
        assert_eq!(words.len(), 179);
        for content_word in ["said", "shall", "able", "across", "ago"] {
            assert!(!words.iter().any(|w| w == content_word), "{content_word}");
        }
        assert!(words.iter().any(|w| w == "mustn't"));
    }

    #[test]
    fn test_every_matched_language_resolves() {
        for tag in ["en", "fr", "de", "es", "it", "nl", "pt"] {
            let words = BundledStopwords.get_stopwords(tag).unwrap();
            assert!(!words.is_empty(), "{tag}");
        }
    }

    #[test]
    fn test_tag_is_case_insensitive() {
        assert!(BundledStopwords.get_stopwords("English").is_ok());
    }

    #[test]
    fn test_unknown_language() {
        assert_eq!(
            BundledStopwords.get_stopwords("xx"),
            Err(StopwordError::UnsupportedLanguage("xx".to_string()))
        );
    }
}
