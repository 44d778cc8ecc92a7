// Unit tests for local text sources and collaborators.
//
// Uses the fixture files under tests/fixtures and temp files; no network.

use std::io::Write;
use std::path::PathBuf;

use aesop::sentiment::{NoopScorer, SentimentScorer};
use aesop::source::{load_vocabulary, LocalSource, RetrievalError, TextSource};
use aesop::stopwords::{BundledStopwords, StopwordSource};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[tokio::test]
async fn local_source_reads_corpus_and_vocabulary() {
    let source = LocalSource::new(fixture("fables.txt"), fixture("animals.txt"));

    let corpus = source.get_corpus().await.unwrap();
    assert!(corpus.contains("Plodding wins the race."));

    let vocabulary = source.get_vocabulary().await.unwrap();
    let words: Vec<&str> = vocabulary.iter().collect();
    assert_eq!(words.first(), Some(&"fox"));
    assert!(!words.contains(&"animals"), "header label must be dropped");
    assert_eq!(words.iter().filter(|w| **w == "fox").count(), 1);
    assert!(words.contains(&"guinea-pig"));
    assert_eq!(vocabulary.len(), 10);
}

#[tokio::test]
async fn missing_vocabulary_is_retrieval_error() {
    let err = load_vocabulary(&fixture("no-such-file.txt")).await.unwrap_err();
    assert!(matches!(err, RetrievalError::Io { .. }));
}

#[tokio::test]
async fn invalid_utf8_corpus_is_decode_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x66, 0x6f, 0x78, 0xff, 0xfe]).unwrap();

    let source = LocalSource::new(file.path(), fixture("animals.txt"));
    let err = source.get_corpus().await.unwrap_err();
    assert!(matches!(err, RetrievalError::Decode { .. }));
}

#[tokio::test]
async fn vocabulary_from_temp_listing() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Animal Names").unwrap();
    writeln!(file, "Lion").unwrap();
    writeln!(file, "Mouse").unwrap();

    let vocabulary = load_vocabulary(file.path()).await.unwrap();
    let words: Vec<&str> = vocabulary.iter().collect();
    // Only the first distinct token is the label; "names" is a word.
    assert_eq!(words, vec!["names", "lion", "mouse"]);
}

#[test]
fn english_stopwords_cover_articles() {
    let words = BundledStopwords.get_stopwords("en").unwrap();
    for article in ["the", "a", "an"] {
        assert!(words.iter().any(|w| w == article), "missing {article}");
    }
}

#[test]
fn noop_scorer_refuses_to_score() {
    assert!(NoopScorer.score("The Fox and the Grapes").is_err());
}
