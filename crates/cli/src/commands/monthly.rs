//! Championship race commands: monthly records and monthly points.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use hoopstats_analytics::chart::{monthly_points_bar, monthly_record_pie};
use hoopstats_analytics::{
    monthly_points, monthly_records, points_for_team, records_for_month, ChartSlot,
    ReportFormatter, SeasonMonth,
};

use super::session::{emit_chart, GlobalArgs, Session};

/// Arguments for the monthly-record command.
#[derive(Args, Debug, Clone)]
pub struct MonthlyRecordArgs {
    /// Month as a number or name (e.g., "02", "feb")
    #[arg(short, long)]
    pub month: SeasonMonth,

    /// Directory for chart JSON files
    #[arg(long)]
    pub chart_out: Option<PathBuf>,
}

/// Arguments for the monthly-points command.
#[derive(Args, Debug, Clone)]
pub struct MonthlyPointsArgs {
    /// Team code (e.g., "BOS")
    #[arg(short, long)]
    pub team: String,

    /// Directory for chart JSON files
    #[arg(long)]
    pub chart_out: Option<PathBuf>,
}

/// Runs the monthly-record command.
///
/// # Errors
/// Returns an error if the season cannot be loaded or the chart cannot be written.
pub async fn run_monthly_record(args: MonthlyRecordArgs, global: &GlobalArgs) -> Result<()> {
    let session = Session::open(global).await?;

    let records = records_for_month(&monthly_records(&session.games), args.month);
    println!("{}", ReportFormatter::format_monthly_records(args.month, &records));

    if let Some(dir) = &args.chart_out {
        let mut slot = ChartSlot::new("monthly-record");
        emit_chart(&mut slot, dir, &format!("record {}", args.month), || {
            monthly_record_pie(&records)
        })?;
    }
    Ok(())
}

/// Runs the monthly-points command.
///
/// # Errors
/// Returns an error if the season cannot be loaded or the chart cannot be written.
pub async fn run_monthly_points(args: MonthlyPointsArgs, global: &GlobalArgs) -> Result<()> {
    let session = Session::open(global).await?;

    let team = args.team.to_uppercase();
    let points = points_for_team(&monthly_points(&session.games), &team);
    if points.is_empty() {
        tracing::warn!(team = %team, "No games found for team");
    }
    println!("{}", ReportFormatter::format_monthly_points(&team, &points));

    if let Some(dir) = &args.chart_out {
        let mut slot = ChartSlot::new("monthly-points");
        emit_chart(&mut slot, dir, &format!("points {team}"), || {
            monthly_points_bar(&team, &points)
        })?;
    }
    Ok(())
}
