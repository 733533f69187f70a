use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bst_report::config::{init_logging, RunOptions};
use bst_report::session::process;
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "bst")]
#[command(about = "Apply add/delete commands to a binary search tree and report its final shape")]
struct Args {
    /// Command file: one `add <key> <value>` or `delete <key>` per line
    input: PathBuf,

    /// File receiving the not-found notices and the shape report
    output: PathBuf,

    /// Stop at the first malformed command instead of skipping it
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Verify every tree invariant after each command
    #[arg(long, default_value_t = false)]
    validate: bool,

    /// Log progress at debug level (RUST_LOG overrides)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = RunOptions::new()
        .strict(args.strict)
        .validate(args.validate);

    let input = File::open(&args.input)
        .with_context(|| format!("failed to open input file {}", args.input.display()))?;
    let output = File::create(&args.output)
        .with_context(|| format!("failed to create output file {}", args.output.display()))?;

    let mut writer = BufWriter::new(output);
    let summary = process(BufReader::new(input), &mut writer, options)?;
    info!(
        "{} added, {} duplicates, {} removed, {} not found, {} skipped",
        summary.added, summary.duplicates, summary.removed, summary.not_found, summary.skipped
    );

    println!("Processed successfully.");
    Ok(())
}
