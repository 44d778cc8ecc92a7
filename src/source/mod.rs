// Corpus and vocabulary retrieval: trait-based so the analysis never does I/O.
//
// GutenbergSource downloads the book; LocalSource reads it from disk. Both read
// the vocabulary listing from a local file.

pub mod gutenberg;
pub mod local;
pub mod traits;

pub use gutenberg::GutenbergSource;
pub use local::LocalSource;
pub use traits::{load_vocabulary, RetrievalError, TextSource};
