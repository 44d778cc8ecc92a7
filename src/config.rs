use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::fables::DEFAULT_CORPUS_URL;
use crate::source::{GutenbergSource, LocalSource, TextSource};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where to download the corpus from (AESOP_CORPUS_URL)
    pub corpus_url: String,
    /// Local corpus file; when set it replaces the download (AESOP_CORPUS_FILE)
    pub corpus_file: Option<PathBuf>,
    /// Vocabulary listing, first line is a label (AESOP_VOCABULARY_FILE)
    pub vocabulary_file: PathBuf,
    /// Stop-word language tag (AESOP_STOPWORDS_LANGUAGE)
    pub stopwords_language: String,
}

impl Config {
    /// Load configuration from environment variables. Every field has a default.
    pub fn load() -> Result<Self> {
        Ok(Self {
            corpus_url: env::var("AESOP_CORPUS_URL")
                .unwrap_or_else(|_| DEFAULT_CORPUS_URL.to_string()),
            corpus_file: env::var("AESOP_CORPUS_FILE")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            vocabulary_file: env::var("AESOP_VOCABULARY_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("animals.txt")),
            stopwords_language: env::var("AESOP_STOPWORDS_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
        })
    }

    /// Check that the vocabulary listing exists.
    /// Call this before anything that matches against the vocabulary.
    pub fn require_vocabulary(&self) -> Result<()> {
        if !self.vocabulary_file.exists() {
            anyhow::bail!(
                "Vocabulary file not found: {}\n\
                 Set AESOP_VOCABULARY_FILE or pass --vocabulary. The first line is a label \
                 and is skipped.",
                self.vocabulary_file.display()
            );
        }
        Ok(())
    }

    /// The corpus source this configuration selects.
    pub fn text_source(&self, quiet: bool) -> Box<dyn TextSource> {
        match &self.corpus_file {
            Some(path) => Box::new(LocalSource::new(
                path.clone(),
                self.vocabulary_file.clone(),
            )),
            None => {
                let source = GutenbergSource::new(
                    self.corpus_url.clone(),
                    self.vocabulary_file.clone(),
                );
                Box::new(if quiet { source.quiet() } else { source })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_vocabulary_missing() {
        let config = Config {
            corpus_url: DEFAULT_CORPUS_URL.to_string(),
            corpus_file: None,
            vocabulary_file: PathBuf::from("/nonexistent/animals.txt"),
            stopwords_language: "en".to_string(),
        };
        let err = config.require_vocabulary().unwrap_err();
        assert!(err.to_string().contains("Vocabulary file not found"));
    }

    #[tokio::test]
    async fn test_corpus_file_selects_local_source() {
        let config = Config {
            corpus_url: DEFAULT_CORPUS_URL.to_string(),
            corpus_file: Some(PathBuf::from("/nonexistent/aesop.txt")),
            vocabulary_file: PathBuf::from("/nonexistent/animals.txt"),
            stopwords_language: "en".to_string(),
        };
        // A local source fails on the missing file; the download source would
        // report an HTTP error instead.
        let err = config.text_source(true).get_corpus().await.unwrap_err();
        assert!(matches!(err, crate::source::RetrievalError::Io { .. }));
    }
}
