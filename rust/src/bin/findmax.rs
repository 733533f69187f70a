use anyhow::Result;
use bst_report::config::init_logging;
use bst_report::find_max::{find_max, parse_numbers};
use clap::Parser;
use log::debug;

#[derive(Parser, Debug)]
#[command(name = "findmax")]
#[command(about = "Print the largest of the given integers")]
struct Args {
    /// Integers to scan
    #[arg(required = true, allow_negative_numbers = true)]
    numbers: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(false);

    let numbers = parse_numbers(&args.numbers)?;
    debug!("scanning {} numbers", numbers.len());
    println!("Max: {}", find_max(&numbers)?);
    Ok(())
}
