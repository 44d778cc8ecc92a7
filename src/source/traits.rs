// Text source trait: where the corpus and vocabulary come from.
//
// The analysis core only ever sees already-resolved strings. Implementations
// decide whether that means an HTTP download or a local file read.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::text::Vocabulary;

/// The corpus or vocabulary could not be obtained. Always fatal.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("{origin} is not valid UTF-8")]
    Decode {
        origin: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Supplies the corpus text and the vocabulary word list.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// The full corpus as decoded text.
    async fn get_corpus(&self) -> Result<String, RetrievalError>;

    /// The vocabulary, header label already dropped.
    async fn get_vocabulary(&self) -> Result<Vocabulary, RetrievalError>;
}

/// Read a UTF-8 file, mapping failures to [`RetrievalError`].
pub(crate) async fn read_utf8(path: &Path) -> Result<String, RetrievalError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| RetrievalError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    String::from_utf8(bytes).map_err(|source| RetrievalError::Decode {
        origin: path.display().to_string(),
        source,
    })
}

/// Load a vocabulary listing file (one word per line, first line a label).
pub async fn load_vocabulary(path: &Path) -> Result<Vocabulary, RetrievalError> {
    let listing = read_utf8(path).await?;
    Ok(Vocabulary::from_listing(&listing))
}
