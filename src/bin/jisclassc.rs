//! Compacts the verbose classification source into the shipped resource.
//!
//! Usage:
//!   jisclassc [in-file] [out-file]
//!
//! Defaults to `resources/jisclass-verbose.txt` and `resources/jisclass.txt`
//! so a plain `cargo run --bin jisclassc` regenerates the bundled table.

use std::env;
use std::fs;
use std::process::ExitCode;

use jiscodec::chardb::{self, CharDb};
use jiscodec::Category;

const DEFAULT_IN: &str = "resources/jisclass-verbose.txt";
const DEFAULT_OUT: &str = "resources/jisclass.txt";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") || args.len() > 3 {
        eprintln!("Usage: {} [in-file] [out-file]", args[0]);
        return ExitCode::from(1);
    }
    let in_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_IN);
    let out_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUT);

    let source = match fs::read_to_string(in_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", in_path, e);
            return ExitCode::from(1);
        }
    };
    let db = match CharDb::parse(&source) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Error: cannot parse {}: {}", in_path, e);
            return ExitCode::from(1);
        }
    };

    let points: Vec<(u32, Category)> = db
        .ranges()
        .iter()
        .flat_map(|&(start, end, category)| (start..=end).map(move |cp| (cp, category)))
        .collect();
    let ranges = chardb::compact_ranges(&points);

    let mut output = String::new();
    output.push_str("# Range-compacted form of jisclass-verbose.txt.\n");
    output.push_str("# Regenerate with: cargo run --bin jisclassc\n");
    output.push_str(&chardb::format_ranges(&ranges));

    if let Err(e) = fs::write(out_path, &output) {
        eprintln!("Error: cannot write {}: {}", out_path, e);
        return ExitCode::from(1);
    }
    eprintln!(
        "{}: {} codepoints in {} ranges",
        out_path,
        points.len(),
        ranges.len()
    );
    ExitCode::SUCCESS
}
