use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use aesop::config::Config;
use aesop::report::{analysis, terminal, AnalysisOptions};
use aesop::sentiment::{NoopScorer, SentimentScorer, VaderScorer};
use aesop::stopwords::{BundledStopwords, StopwordSource};
use aesop::text::rank::top;
use aesop::text::{filter, histogram, Trim};

/// Aesop: word frequency, animal coverage and fable similarity for Aesop's Fables.
///
/// Run with no subcommand to print the full report.
#[derive(Parser)]
#[command(name = "aesop", version, about)]
struct Cli {
    /// Read the corpus from this file instead of downloading it
    #[arg(long, global = true)]
    corpus_file: Option<PathBuf>,

    /// Vocabulary listing (one word per line, first line is a label)
    #[arg(long, global = true)]
    vocabulary: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full fable collection report (the default)
    Report {
        /// How many stop-word-filtered words to list (default: 10)
        #[arg(long, default_value = "10")]
        top: usize,

        /// Emit the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Skip sentiment scoring of the featured fables
        #[arg(long)]
        skip_sentiment: bool,
    },

    /// List the most frequent words in the fable collection
    Top {
        /// Number of words to list (default: 10)
        #[arg(long, default_value = "10")]
        count: usize,

        /// Keep stop words in the ranking
        #[arg(long)]
        keep_stopwords: bool,
    },

    /// Compare two excerpts, each delimited by a start and end marker
    Compare {
        #[arg(long)]
        first_start: String,
        #[arg(long)]
        first_end: String,
        #[arg(long)]
        second_start: String,
        #[arg(long)]
        second_end: String,

        /// Use the textbook cosine denominator sqrt(a.a * b.b)
        #[arg(long)]
        conventional: bool,

        /// Fail if a marker does not occur in the corpus
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("aesop=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(path) = cli.corpus_file {
        config.corpus_file = Some(path);
    }
    if let Some(path) = cli.vocabulary {
        config.vocabulary_file = path;
    }

    let command = cli.command.unwrap_or(Commands::Report {
        top: 10,
        json: false,
        skip_sentiment: false,
    });

    match command {
        Commands::Report {
            top,
            json,
            skip_sentiment,
        } => {
            config.require_vocabulary()?;
            let source = config.text_source(json);

            // Load once, then pass explicitly to every stage
            let corpus = source.get_corpus().await.context("Failed to load corpus")?;
            let vocabulary = source
                .get_vocabulary()
                .await
                .context("Failed to load vocabulary")?;
            info!(words = vocabulary.len(), "Loaded vocabulary");

            let stopwords = BundledStopwords.get_stopwords(&config.stopwords_language)?;

            // Create the sentiment scorer if we'll be scoring
            let scorer: Box<dyn SentimentScorer> = if skip_sentiment {
                Box::new(NoopScorer)
            } else {
                Box::new(VaderScorer)
            };

            let options = AnalysisOptions {
                top_words: top,
                score_sentiment: !skip_sentiment,
                ..AnalysisOptions::default()
            };
            let report =
                analysis::analyze(&corpus, &vocabulary, &stopwords, scorer.as_ref(), &options)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_analysis(&report);
            }
        }

        Commands::Top {
            count,
            keep_stopwords,
        } => {
            let source = config.text_source(false);
            let corpus = source.get_corpus().await.context("Failed to load corpus")?;

            let mut hist = histogram::build(&corpus, Trim::CollectionBody);
            if !keep_stopwords {
                let stopwords = BundledStopwords.get_stopwords(&config.stopwords_language)?;
                hist = filter::remove_stopwords(&hist, &stopwords);
            }

            println!(
                "\n{}",
                format!("=== Top {count} words in the collection ===").bold()
            );
            terminal::display_ranked(&top(&hist, count));
        }

        Commands::Compare {
            first_start,
            first_end,
            second_start,
            second_end,
            conventional,
            strict,
        } => {
            let source = config.text_source(false);
            let corpus = source.get_corpus().await.context("Failed to load corpus")?;

            let first = Trim::Between {
                start: &first_start,
                end: &first_end,
            };
            let second = Trim::Between {
                start: &second_start,
                end: &second_end,
            };
            if strict {
                first.try_apply(&corpus)?;
                second.try_apply(&corpus)?;
            }

            let outcome: analysis::SimilarityOutcome =
                analysis::compare_spans(&corpus, first, second, conventional).into();
            println!("Similarity: {}", terminal::format_outcome(&outcome));
        }
    }

    Ok(())
}
