// Text processing: tokenization, histograms, filtering and ranking.

pub mod filter;
pub mod histogram;
pub mod rank;
pub mod span;
pub mod tokenize;
pub mod vocabulary;

pub use histogram::{Histogram, Trim};
pub use rank::RankedWord;
pub use vocabulary::Vocabulary;
