use clap::Parser;
use std::fs;
use std::io::{self, Read};
use tutor_ai_context::text::{DEFAULT_MAX_PASSAGE_SIZE, PassageSplitter};

/// A CLI tool to split plain-text documents into retrieval passages as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input text file. If not provided, reads from stdin.
    #[arg(short, long)]
    input: Option<String>,

    /// Maximum character budget for each passage.
    #[arg(short, long, default_value_t = DEFAULT_MAX_PASSAGE_SIZE)]
    max_passage_size: usize,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let document = if let Some(input_path) = args.input {
        fs::read_to_string(input_path)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let splitter = PassageSplitter::new(args.max_passage_size);
    let passages = splitter.split(&document);

    let json_output = serde_json::to_string_pretty(&passages)?;
    println!("{}", json_output);

    Ok(())
}
