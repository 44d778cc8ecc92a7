// Project Gutenberg corpus download.
//
// The whole book is fetched in one request and decoded as strict UTF-8. The
// vocabulary still comes from a local listing file.

use std::path::PathBuf;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing::info;

use super::traits::{load_vocabulary, RetrievalError, TextSource};
use crate::text::Vocabulary;

/// Downloads the corpus over HTTP.
pub struct GutenbergSource {
    client: Client,
    url: String,
    vocabulary_path: PathBuf,
    show_progress: bool,
}

impl GutenbergSource {
    pub fn new(url: impl Into<String>, vocabulary_path: impl Into<PathBuf>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            vocabulary_path: vocabulary_path.into(),
            show_progress: true,
        }
    }

    /// Disable the terminal spinner (for JSON output or non-interactive runs).
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    fn progress_bar(&self, total_size: Option<u64>) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let pb = match total_size {
            Some(size) => {
                let pb = ProgressBar::new(size);
                if let Ok(style) =
                    ProgressStyle::default_bar().template("  [{bar:40.cyan/blue}] {bytes}/{total_bytes}")
                {
                    pb.set_style(style.progress_chars("=> "));
                }
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner} {bytes}") {
                    pb.set_style(style);
                }
                pb
            }
        };
        Some(pb)
    }
}

#[async_trait]
impl TextSource for GutenbergSource {
    async fn get_corpus(&self) -> Result<String, RetrievalError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| RetrievalError::Http {
                url: self.url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(RetrievalError::Status {
                url: self.url.clone(),
                status: response.status(),
            });
        }

        let pb = self.progress_bar(response.content_length());

        let bytes = response
            .bytes()
            .await
            .map_err(|source| RetrievalError::Http {
                url: self.url.clone(),
                source,
            })?;

        if let Some(pb) = pb {
            pb.set_position(bytes.len() as u64);
            pb.finish_and_clear();
        }

        info!(url = %self.url, bytes = bytes.len(), "Downloaded corpus");

        String::from_utf8(bytes.to_vec()).map_err(|source| RetrievalError::Decode {
            origin: self.url.clone(),
            source,
        })
    }

    async fn get_vocabulary(&self) -> Result<Vocabulary, RetrievalError> {
        load_vocabulary(&self.vocabulary_path).await
    }
}
