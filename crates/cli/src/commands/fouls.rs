//! Fouls versus win rate command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use hoopstats_analytics::chart::{fouls_scatter_chart, player_fouls_chart, team_color};
use hoopstats_analytics::{
    foul_trend_line, player_fouls_for_team, team_foul_summaries, ChartSlot, ReportFormatter,
};

use super::session::{emit_chart, GlobalArgs, Session};

/// Arguments for the fouls command.
#[derive(Args, Debug, Clone)]
pub struct FoulsArgs {
    /// Team code to drill into (e.g., "BOS")
    #[arg(long)]
    pub team: Option<String>,

    /// Directory for chart JSON files
    #[arg(long)]
    pub chart_out: Option<PathBuf>,
}

/// Runs the fouls command.
///
/// # Errors
/// Returns an error if the season cannot be loaded or a chart cannot be written.
pub async fn run_fouls(args: FoulsArgs, global: &GlobalArgs) -> Result<()> {
    let session = Session::open(global).await?;

    let summaries = team_foul_summaries(&session.games);
    let trend = foul_trend_line(&summaries);
    println!("{}", ReportFormatter::format_fouls(&summaries, trend.as_ref()));

    let mut slot = ChartSlot::new("fouls");
    if let Some(dir) = &args.chart_out {
        emit_chart(&mut slot, dir, "fouls", || {
            fouls_scatter_chart(&summaries, trend.as_ref())
        })?;
    }

    if let Some(team) = &args.team {
        let team = team.to_uppercase();
        let players = player_fouls_for_team(&session.games, &team);
        tracing::debug!(team = %team, players = players.len(), "Foul drill-down");
        println!("{}", ReportFormatter::format_player_fouls(&team, &players));

        if let Some(dir) = &args.chart_out {
            let index = summaries.iter().position(|s| s.team == team).unwrap_or(0);
            let color = team_color(index, summaries.len());
            emit_chart(&mut slot, dir, &format!("fouls {team}"), || {
                player_fouls_chart(&team, &players, &color)
            })?;
        }
    }

    Ok(())
}
