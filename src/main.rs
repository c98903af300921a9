//! # custclean command-line entry point
//!
//! ```bash
//! custclean clean --file customers.csv
//! custclean clean --file customers.csv --spec pipeline.json --output clean.parquet
//! custclean spec --output pipeline.json
//! custclean steps
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // Allow println! in main binary

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    custclean::logging::init(args.log_to_file)?;
    cli::run_command(args.command)
}
