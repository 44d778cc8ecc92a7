// Colored terminal output for the fable report.
//
// main.rs delegates all console formatting here.

use colored::Colorize;

use super::analysis::{Analysis, ExcerptSentiment, PairSimilarity, SimilarityOutcome};
use crate::text::RankedWord;

fn separator() {
    println!();
    println!("{}", "-".repeat(60).dimmed());
    println!();
}

fn heading(text: &str) {
    println!("{}", text.bold());
}

/// Print ranked words as `word` padded to 14 columns, then the count.
pub fn display_ranked(words: &[RankedWord]) {
    if words.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }
    for entry in words {
        println!("{:14}{}", entry.word, entry.count);
    }
}

/// Render an undefined similarity distinctly from any numeric value.
pub fn format_outcome(outcome: &SimilarityOutcome) -> String {
    match outcome {
        SimilarityOutcome::Score { normalized } => format!("{normalized:.2}%"),
        SimilarityOutcome::Undefined { reason } => format!("undefined ({reason})"),
    }
}

fn display_sentiment(entry: &ExcerptSentiment) {
    let s = &entry.scores;
    let compound = format!("{:.4}", s.compound);
    let compound = if s.compound >= 0.05 {
        compound.green()
    } else if s.compound <= -0.05 {
        compound.red()
    } else {
        compound.normal()
    };
    println!("Sentiment analysis results of {}:", entry.excerpt.bold());
    println!(
        "  neg: {:.3}  neu: {:.3}  pos: {:.3}  compound: {}",
        s.negative, s.neutral, s.positive, compound
    );
    println!();
}

fn display_similarity(pair: &PairSimilarity) {
    let value = format_outcome(&pair.outcome);
    let value = match pair.outcome {
        SimilarityOutcome::Score { .. } => value.bold(),
        SimilarityOutcome::Undefined { .. } => value.yellow(),
    };
    println!("{} and {} is {} similar.", pair.first, pair.second, value);
    println!();
}

/// Display the full report.
pub fn display_analysis(analysis: &Analysis) {
    println!();
    heading("The most common words in the text (without stop words) are:");
    display_ranked(&analysis.top_words);
    separator();

    heading("List of all the animals appearing in Aesop's Fables");
    display_ranked(&analysis.vocabulary_matches);
    println!();
    println!(
        "Total number of animals appearing in text: {}",
        analysis.vocabulary_total
    );
    separator();

    println!(
        "Total number of words in Aesop's Fables collection: {}",
        analysis.word_total
    );
    match analysis.vocabulary_percentage {
        Some(pct) => println!("Percentage of total words in text that are animals: {pct:.2}%"),
        None => println!(
            "Percentage of total words in text that are animals: {}",
            "undefined (empty collection)".yellow()
        ),
    }
    separator();

    heading("The 5 most common animals in the Aesop's Fables' titles:");
    display_ranked(&analysis.contents_top);
    separator();

    heading("The 5 most common animals in the entire text:");
    display_ranked(&analysis.corpus_top);
    separator();

    if !analysis.sentiments.is_empty() {
        for entry in &analysis.sentiments {
            display_sentiment(entry);
        }
        separator();
    }

    for pair in &analysis.similarities {
        display_similarity(pair);
    }
    println!("{}", "-".repeat(60).dimmed());
    println!("{}", "END OF ANALYSIS".bold());
    println!("{}", "-".repeat(60).dimmed());
}
