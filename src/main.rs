//! Sozluk CLI - Clean and sort Turkish dictionary dumps
//!
//! # Main Command
//!
//! ```bash
//! sozluk clean gts.jsonl --json sozluk.json --csv sozluk.csv
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! sozluk parse gts.jsonl           # Just parse the dump to JSON
//! ```

use clap::{Parser, Subcommand};
use sozluk::{clean_dictionary, load_file};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sozluk")]
#[command(about = "Clean and sort Turkish dictionary dumps into JSON and CSV", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full cleaning pipeline: JSON lines → sorted JSON + CSV
    Clean {
        /// Input dump (one JSON object per line)
        input: PathBuf,

        /// Structured JSON output file
        #[arg(short, long)]
        json: PathBuf,

        /// Tabular CSV output file
        #[arg(short, long)]
        csv: PathBuf,
    },

    /// Parse the dump and output the raw entries as JSON
    Parse {
        /// Input dump
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean { input, json, csv } => cmd_clean(&input, &json, &csv),
        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_clean(input: &Path, json: &Path, csv: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📖 Reading dump: {}", input.display());

    let summary = clean_dictionary(input, json, csv)?;

    eprintln!("   Encoding: {}", summary.encoding);
    eprintln!(
        "   Lines: {} ({} parsed, {} malformed)",
        summary.line_count, summary.parsed_count, summary.skipped_count
    );
    eprintln!(
        "⚙️  Cleaned: {} entries ({} dropped)",
        summary.entry_count, summary.dropped_count
    );
    eprintln!("💾 JSON written to: {}", json.display());
    eprintln!("💾 CSV written to: {}", csv.display());
    eprintln!("\n✨ Done!");

    Ok(())
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing dump: {}", input.display());

    let result = load_file(input)?;

    eprintln!("   Encoding: {}", result.encoding);
    eprintln!(
        "✅ Parsed {} entries ({} lines skipped)",
        result.entries.len(),
        result.skipped
    );

    let json = serde_json::to_string_pretty(&result.entries)?;
    write_output(&json, output)?;

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
