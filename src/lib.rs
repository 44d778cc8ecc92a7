// Aesop: word frequency, vocabulary coverage and excerpt similarity for
// Aesop's Fables.
//
// This is the library root. Each module corresponds to one stage of the
// analysis, from raw text to the printed report.

pub mod config;
pub mod fables;
pub mod report;
pub mod sentiment;
pub mod similarity;
pub mod source;
pub mod stopwords;
pub mod text;
