//! Payout Converter CLI
//!
//! Reads a card processor transaction export and writes accounting import
//! lines to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- [--quiet|--verbose] transactions.csv > import.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Overrides the log filter chosen by `--quiet`/`--verbose`

use payout_converter::{Config, Converter, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_args(env::args().skip(1))?;

    env_logger::Builder::new()
        .filter_level(config.verbosity.level_filter())
        .parse_default_env()
        .init();

    let file = File::open(&config.input)?;
    let reader = BufReader::new(file);

    let conversion = Converter::new(config.verbosity).convert(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    conversion.write_output(handle)?;

    Ok(())
}
