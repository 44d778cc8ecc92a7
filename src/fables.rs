// Boundary markers for the Project Gutenberg edition of Aesop's Fables (#28).
//
// Every span is located by the first occurrence of a literal string, so these
// constants must match the corpus byte for byte, runs of spaces included.

use crate::text::span::extract_between;
use crate::text::Trim;

/// Project Gutenberg plain-text URL for Aesop's Fables.
pub const DEFAULT_CORPUS_URL: &str = "http://www.gutenberg.org/cache/epub/28/pg28.txt";

/// Last line of the table of contents; the fable bodies start right after it.
pub const COLLECTION_START: &str =
    "The Man, the Boy, and the Donkey        The Fox and the Goat";

/// Project Gutenberg end-of-book notice.
pub const COLLECTION_END: &str =
    "End of the Project Gutenberg EBook of Aesop's Fables, by Aesop";

/// A named span of the corpus, bounded by two literal markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Excerpt {
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

impl Excerpt {
    /// The excerpt text, end marker included. Missing markers degrade.
    pub fn extract<'t>(&self, corpus: &'t str) -> &'t str {
        extract_between(corpus, self.start, self.end)
    }

    pub fn trim(&self) -> Trim<'static> {
        Trim::Between {
            start: self.start,
            end: self.end,
        }
    }
}

/// The fable titles listed in the table of contents.
pub const TABLE_OF_CONTENTS: Excerpt = Excerpt {
    name: "Table of Contents",
    start: "1-21                                    22-42",
    end: "The Fox and the Goat",
};

pub const HARE_AND_TORTOISE: Excerpt = Excerpt {
    name: "The Hare and the Tortoise",
    start: "It is easy to propose impossible remedies.",
    end: "Plodding wins the race.",
};

pub const WOLF_IN_SHEEPS_CLOTHING: Excerpt = Excerpt {
    name: "The Wolf in Sheep's Clothing",
    start: "you cannot reckon.",
    end: "Appearances are deceptive.",
};

pub const FOX_AND_GRAPES: Excerpt = Excerpt {
    name: "The Fox and the Grapes",
    start: "Nothing escapes the master's eye.",
    end: "It is easy to despise what you cannot get.",
};

/// The excerpts whose sentiment and pairwise similarity the report shows.
pub const FEATURED: [Excerpt; 3] = [HARE_AND_TORTOISE, WOLF_IN_SHEEPS_CLOTHING, FOX_AND_GRAPES];

/// Index pairs into [`FEATURED`] compared in the report, in display order.
pub const FEATURED_PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];
