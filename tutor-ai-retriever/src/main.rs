use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process;
use tutor_ai_retriever::retrieval::{
    prompt::build_context,
    retriever::{Retriever, RetrieverConfig},
};

/// A CLI tool to index a plain-text document and retrieve relevant passages.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the plain-text document to index
    #[arg(short, long)]
    document: PathBuf,

    /// Optional TOML file overriding the retrieval defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Retrieve the passages most relevant to a query
    Search {
        /// Free-text query
        query: String,
        /// Maximum number of passages to return (defaults to the configured top_k)
        #[arg(short, long)]
        top_k: Option<usize>,
        /// Assemble the results into a single context block capped at this many characters
        #[arg(long)]
        context_chars: Option<usize>,
        /// Output format
        #[arg(short, long, default_value = "summary")]
        format: OutputFormat,
    },
    /// Show statistics about the indexed document
    Stats {
        /// Output format
        #[arg(short, long, default_value = "summary")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum OutputFormat {
    Summary,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {s}")),
        }
    }
}

#[derive(Serialize)]
struct SearchOutput {
    query: String,
    passages: Vec<PassageOutput>,
}

#[derive(Serialize)]
struct PassageOutput {
    sequence: usize,
    score: f64,
    text: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => RetrieverConfig::default(),
    };

    let document = fs::read_to_string(&args.document)?;
    let mut retriever = Retriever::new(config);
    retriever.index_document(&document);

    match args.command {
        Commands::Search {
            query,
            top_k,
            context_chars,
            format,
        } => {
            let top_k = top_k.unwrap_or(retriever.config().top_k);
            let results = retriever.retrieve_scored(&query, top_k);

            if let Some(max_chars) = context_chars {
                let passages: Vec<String> = results
                    .into_iter()
                    .map(|scored| scored.passage.text)
                    .collect();
                println!("{}", build_context(&passages, max_chars));
                return Ok(());
            }

            match format {
                OutputFormat::Json => {
                    let output = SearchOutput {
                        query,
                        passages: results
                            .into_iter()
                            .map(|scored| PassageOutput {
                                sequence: scored.passage.sequence,
                                score: scored.score,
                                text: scored.passage.text,
                            })
                            .collect(),
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Summary => {
                    println!("Found {} relevant passages:", results.len());
                    for scored in results {
                        println!(
                            "  Score: {:.3} | Passage {} | {}",
                            scored.score,
                            scored.passage.sequence,
                            preview(&scored.passage.text, 80)
                        );
                    }
                }
            }
            Ok(())
        }
        Commands::Stats { format } => {
            let stats = retriever.stats();

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                }
                OutputFormat::Summary => {
                    println!("Index statistics:");
                    println!("  Passages: {}", stats.passages);
                    println!("  Distinct keywords: {}", stats.distinct_keywords);
                    println!(
                        "  Total keyword occurrences: {}",
                        stats.total_keyword_occurrences
                    );
                    if let Some(built_at) = stats.built_at {
                        println!("  Built at: {built_at}");
                    }
                }
            }
            Ok(())
        }
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    }
}
