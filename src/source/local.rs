// Local file corpus: for offline runs and tests.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use super::traits::{load_vocabulary, read_utf8, RetrievalError, TextSource};
use crate::text::Vocabulary;

/// Reads both the corpus and the vocabulary from disk.
pub struct LocalSource {
    corpus_path: PathBuf,
    vocabulary_path: PathBuf,
}

impl LocalSource {
    pub fn new(corpus_path: impl Into<PathBuf>, vocabulary_path: impl Into<PathBuf>) -> Self {
        Self {
            corpus_path: corpus_path.into(),
            vocabulary_path: vocabulary_path.into(),
        }
    }
}

#[async_trait]
impl TextSource for LocalSource {
    async fn get_corpus(&self) -> Result<String, RetrievalError> {
        let text = read_utf8(&self.corpus_path).await?;
        info!(
            path = %self.corpus_path.display(),
            chars = text.chars().count(),
            "Loaded corpus from file"
        );
        Ok(text)
    }

    async fn get_vocabulary(&self) -> Result<Vocabulary, RetrievalError> {
        load_vocabulary(&self.vocabulary_path).await
    }
}
