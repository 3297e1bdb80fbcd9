//! Extract the text structure of an OpenDocument text file as JSON.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example odt_to_json -- report.odt --pretty
//! ```
//!
//! Set `RUST_LOG=debug` to see what the walker skips.

use clap::Parser;
use odtext::{CoveredCells, Document, ParseOptions};
use std::path::PathBuf;

/// Print the paragraphs and tables of an .odt file as JSON
#[derive(Parser, Debug)]
#[command(name = "odt_to_json", version)]
struct Args {
    /// Input .odt file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Emit empty cells for merged-away table cells instead of failing
    #[arg(long)]
    placeholder_covered_cells: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print plain text instead of JSON
    #[arg(long, conflicts_with = "pretty")]
    text: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    if !args.input.is_file() {
        eprintln!("Error: Input file does not exist: {}", args.input.display());
        std::process::exit(1);
    }

    let covered_cells = if args.placeholder_covered_cells {
        CoveredCells::Placeholder
    } else {
        CoveredCells::Reject
    };
    let options = ParseOptions::new().with_covered_cells(covered_cells);

    let document = Document::open_with_options(&args.input, &options)?;

    if args.text {
        println!("{}", document.text());
    } else if args.pretty {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        println!("{}", serde_json::to_string(&document)?);
    }

    Ok(())
}
