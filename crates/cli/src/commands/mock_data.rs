//! Mock season generation command.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;
use hoopstats_data::{CsvStorage, MockSeasonGenerator};

use super::session::GlobalArgs;

/// Arguments for the mock-data command.
#[derive(Args, Debug, Clone)]
pub struct MockDataArgs {
    /// First game date (YYYY-MM-DD)
    #[arg(long, default_value = "2025-02-01")]
    pub start: NaiveDate,

    /// Last game date (YYYY-MM-DD)
    #[arg(long, default_value = "2025-04-15")]
    pub end: NaiveDate,

    /// Output CSV file path
    #[arg(short, long)]
    pub output: String,

    /// RNG seed; the same seed produces the same season
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

/// Runs the mock-data command for every configured trade.
///
/// # Errors
/// Returns an error if the date range is inverted or the file cannot be written.
pub fn run_mock_data(args: &MockDataArgs, global: &GlobalArgs) -> Result<()> {
    if args.start > args.end {
        bail!("Start date {} is after end date {}", args.start, args.end);
    }

    let config = global.load_config()?;
    let games = MockSeasonGenerator::new(args.seed).generate(args.start, args.end, &config.trades);
    CsvStorage::write_games(&args.output, &games)?;

    tracing::info!(
        rows = games.len(),
        output = %args.output,
        seed = args.seed,
        "Mock season written"
    );
    println!("Wrote {} rows to {}", games.len(), args.output);
    Ok(())
}
