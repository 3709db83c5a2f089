//! MVP race command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use hoopstats_analytics::chart::scoring_scatter;
use hoopstats_analytics::{mvp_leaderboard, player_scoring_lines, ChartSlot, ReportFormatter};

use super::session::{emit_chart, GlobalArgs, Session};

/// Arguments for the scoring command.
#[derive(Args, Debug, Clone)]
pub struct ScoringArgs {
    /// Number of leaderboard entries to show
    #[arg(long, default_value = "10")]
    pub top: usize,

    /// Minimum games played (overrides `mvp.min_games` from the config)
    #[arg(long)]
    pub min_games: Option<usize>,

    /// Directory for chart JSON files
    #[arg(long)]
    pub chart_out: Option<PathBuf>,
}

/// Runs the scoring command.
///
/// # Errors
/// Returns an error if the season cannot be loaded or the chart cannot be written.
pub async fn run_scoring(args: ScoringArgs, global: &GlobalArgs) -> Result<()> {
    let session = Session::open(global).await?;

    let mut weights = session.config.mvp.clone();
    if let Some(min_games) = args.min_games {
        weights.min_games = min_games;
    }

    let leaderboard = mvp_leaderboard(&session.games, &weights, args.top);
    println!("{}", ReportFormatter::format_mvp_leaderboard(&leaderboard));

    if let Some(dir) = &args.chart_out {
        let lines = player_scoring_lines(&session.games);
        let mut slot = ChartSlot::new("scoring");
        emit_chart(&mut slot, dir, "scoring", || scoring_scatter(&lines))?;
    }
    Ok(())
}
