//! # Content Analyzer CLI (`cana`)
//!
//! The `cana` binary is the primary interface for Content Analyzer. It
//! provides commands for analyzing text, managing the in-memory document
//! collection, searching, corpus statistics, and starting the tool
//! server.
//!
//! ## Usage
//!
//! ```bash
//! cana --config ./config/cana.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cana analyze "<text>"` | Analyze a piece of text |
//! | `cana analyze --id <id>` | Analyze a stored document |
//! | `cana add --title T --content C` | Add a document |
//! | `cana get <id>` | Print a document |
//! | `cana list` | List documents |
//! | `cana search "<query>"` | Rank documents against a query |
//! | `cana delete <id>` | Remove a document |
//! | `cana stats` | Corpus overview |
//! | `cana serve` | Start the tool HTTP server |
//!
//! The document collection lives in process memory: mutations from one
//! CLI invocation do not survive into the next. Long-lived state belongs
//! to `cana serve`, which holds the collection for as long as the server
//! runs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use content_analyzer::analyze::Analyzer;
use content_analyzer::config;
use content_analyzer::models::{
    Document, DocumentDraft, KeywordResult, ReadabilityResult, SearchResult, Sentiment,
    SentimentResult, TextStats,
};
use content_analyzer::search::{self, SearchOptions};
use content_analyzer::server;
use content_analyzer::stats;
use content_analyzer::store::DocumentStore;

/// Content Analyzer CLI — sentiment, keywords, readability, statistics,
/// and relevance search over an in-memory document collection.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. Defaults apply when the file does not exist; see
/// `config/cana.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "cana",
    about = "Content Analyzer — text analysis and document retrieval",
    version,
    long_about = "Content Analyzer computes sentiment polarity, ranked keywords, a readability \
    grade, and corpus statistics for free-form text, and maintains an in-memory document \
    collection with relevance search, exposed via this CLI and a tool-dispatch HTTP server."
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/cana.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Analyze text or a stored document.
    ///
    /// Prints sentiment, ranked keywords, readability, and statistics.
    /// Pass text directly, or `--id` to analyze a document from the
    /// collection (cached analyses are reused).
    Analyze {
        /// Text to analyze. Ignored when `--id` is given.
        text: Option<String>,

        /// Analyze the stored document with this id instead.
        #[arg(long)]
        id: Option<String>,

        /// Maximum number of keywords to report. Negative values are
        /// treated as 0.
        #[arg(long)]
        keywords: Option<i64>,
    },

    /// Add a document to the collection.
    Add {
        /// Document title.
        #[arg(long)]
        title: String,

        /// Document body text.
        #[arg(long)]
        content: String,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// May be repeated: `--tag a --tag b`.
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Print a document by id.
    Get {
        /// Document id.
        id: String,
    },

    /// List documents in insertion order.
    List {
        /// Exact-match category filter.
        #[arg(long)]
        category: Option<String>,

        /// Exact-match author filter.
        #[arg(long)]
        author: Option<String>,

        /// Maximum number of documents to print.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Rank documents against a query.
    ///
    /// Terms of one or two characters are ignored. Title matches weigh
    /// three times content matches.
    Search {
        /// The search query string.
        query: String,

        /// Maximum number of results to return.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Remove a document from the collection.
    Delete {
        /// Document id.
        id: String,
    },

    /// Print a corpus overview: document counts and cached analyses.
    Stats,

    /// Start the tool-dispatch HTTP server.
    ///
    /// Exposes every operation as a callable tool for agent runtimes and
    /// other tool-calling clients.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    if let Commands::Serve = cli.command {
        return server::run_server(&cfg).await;
    }

    let analyzer = Analyzer::from_config(&cfg.analysis)?;
    let store = if cfg.analysis.seed_samples {
        DocumentStore::with_samples()
    } else {
        DocumentStore::new()
    };

    match cli.command {
        Commands::Analyze { text, id, keywords } => {
            let keyword_limit = keywords.map(|k| k.max(0) as usize);
            if let Some(id) = id {
                let analysis = store.analyze_document(&id, &analyzer)?;
                print_analysis_header(&store.get(&id)?);
                print_report(
                    &analysis.sentiment,
                    &analysis.keywords,
                    &analysis.readability,
                    &analysis.stats,
                );
            } else {
                let text = text.ok_or_else(|| {
                    anyhow::anyhow!("provide text to analyze, or --id for a stored document")
                })?;
                let report = analyzer.report(&text, keyword_limit);
                print_report(
                    &report.sentiment,
                    &report.keywords,
                    &report.readability,
                    &report.stats,
                );
            }
        }
        Commands::Add {
            title,
            content,
            author,
            category,
            tags,
        } => {
            let document = store.add(DocumentDraft {
                title,
                content,
                author,
                category,
                tags,
                metadata: Default::default(),
            });
            println!("Added document {}", document.id);
            println!("  title: {}", document.title);
        }
        Commands::Get { id } => {
            let document = store.get(&id)?;
            print_document(&document);
        }
        Commands::List {
            category,
            author,
            limit,
        } => {
            let mut documents = if let Some(category) = category {
                store.list_by_category(&category)
            } else if let Some(author) = author {
                store.list_by_author(&author)
            } else {
                store.list()
            };
            if let Some(limit) = limit {
                documents.truncate(limit);
            }

            if documents.is_empty() {
                println!("No documents.");
            }
            for (i, doc) in documents.iter().enumerate() {
                println!(
                    "{}. {} [{}]",
                    i + 1,
                    doc.title,
                    doc.category.as_deref().unwrap_or("-")
                );
                println!("    id: {}", doc.id);
            }
        }
        Commands::Search { query, limit } => {
            let opts = SearchOptions {
                limit: Some(limit.unwrap_or(cfg.search.limit)),
                title_weight: cfg.search.title_weight,
                content_weight: cfg.search.content_weight,
            };
            let results = search::search(&store.list(), &query, &opts);
            print_search_results(&results);
        }
        Commands::Delete { id } => {
            if store.delete(&id) {
                println!("Deleted document {}", id);
            } else {
                println!("No document with id {}", id);
            }
        }
        Commands::Stats => {
            stats::run_stats(&store);
        }
        Commands::Serve => unreachable!(),
    }

    Ok(())
}

fn sentiment_label(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "positive",
        Sentiment::Negative => "negative",
        Sentiment::Neutral => "neutral",
    }
}

fn print_analysis_header(document: &Document) {
    println!("Document: {}", document.title);
    println!("  id: {}", document.id);
    println!();
}

fn print_report(
    sentiment: &SentimentResult,
    keywords: &[KeywordResult],
    readability: &ReadabilityResult,
    stats: &TextStats,
) {
    println!(
        "Sentiment:   {} (score {:.2}, comparative {:.3})",
        sentiment_label(sentiment.classification),
        sentiment.score,
        sentiment.comparative
    );
    if !sentiment.positive.is_empty() {
        println!("  positive:  {}", sentiment.positive.join(", "));
    }
    if !sentiment.negative.is_empty() {
        println!("  negative:  {}", sentiment.negative.join(", "));
    }

    println!(
        "Readability: {:.2} — {} ({})",
        readability.flesch_kincaid,
        readability.grade_level,
        match readability.complexity {
            content_analyzer::models::Complexity::Easy => "easy",
            content_analyzer::models::Complexity::Medium => "medium",
            content_analyzer::models::Complexity::Hard => "hard",
        }
    );

    println!(
        "Statistics:  {} words, {} sentences, {} paragraphs, {} unique words",
        stats.word_count, stats.sentence_count, stats.paragraph_count, stats.unique_words
    );
    println!(
        "             {:.2} words/sentence, {:.3} vocabulary diversity",
        stats.avg_words_per_sentence, stats.vocabulary_diversity
    );

    if keywords.is_empty() {
        println!("Keywords:    (none)");
    } else {
        println!("Keywords:");
        for (i, kw) in keywords.iter().enumerate() {
            println!(
                "  {}. {} (frequency {}, importance {:.1})",
                i + 1,
                kw.term,
                kw.frequency,
                kw.importance
            );
        }
    }
}

fn print_document(document: &Document) {
    println!("{}", document.title);
    println!("  id:       {}", document.id);
    if let Some(ref author) = document.author {
        println!("  author:   {}", author);
    }
    if let Some(ref category) = document.category {
        println!("  category: {}", category);
    }
    if !document.tags.is_empty() {
        println!("  tags:     {}", document.tags.join(", "));
    }
    println!("  created:  {}", document.created_at.format("%Y-%m-%d %H:%M"));
    println!("  updated:  {}", document.updated_at.format("%Y-%m-%d %H:%M"));
    println!();
    println!("{}", document.content);
}

fn print_search_results(results: &[SearchResult]) {
    if results.is_empty() {
        println!("No results.");
        return;
    }

    for (i, result) in results.iter().enumerate() {
        println!("{}. [{:.2}] {}", i + 1, result.relevance, result.title);
        println!("    matched: {}", result.matched_terms.join(", "));
        println!("    excerpt: \"{}\"", result.snippet.replace('\n', " "));
        println!("    id: {}", result.document_id);
        println!();
    }
}
