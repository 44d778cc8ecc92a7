// Report generation: analysis assembly and terminal display.

pub mod analysis;
pub mod terminal;

pub use analysis::{analyze, Analysis, AnalysisOptions};
