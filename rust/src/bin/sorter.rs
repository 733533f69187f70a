use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bst_report::config::init_logging;
use bst_report::sorter::{sort_entries, SortMode};
use clap::Parser;
use log::debug;

#[derive(Parser, Debug)]
#[command(name = "sorter")]
#[command(about = "Merge sort the lines of a file numerically or as text")]
struct Args {
    /// File with one entry per line
    input: PathBuf,

    /// Buffer size; must be at least 1
    entries: usize,

    /// `numeric` or `text`
    mode: SortMode,

    /// File receiving the sorted entries, one per line
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(false);

    let contents = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let lines: Vec<&str> = contents.lines().collect();
    debug!("read {} lines (buffer {}), sorting as {}", lines.len(), args.entries, args.mode);

    let sorted = sort_entries(&lines, args.entries, args.mode)?;
    let mut formatted = String::new();
    for entry in &sorted {
        formatted.push_str(entry);
        formatted.push('\n');
    }
    fs::write(&args.output, formatted)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}
