//! Trade impact and trade catalog commands.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use hoopstats_analytics::chart::{player_stats_chart, win_percentage_chart};
use hoopstats_analytics::{analyze_trade, ChartSlot, ReportFormatter};

use super::session::{emit_chart, GlobalArgs, Session};

/// Arguments for the trade-impact command.
#[derive(Args, Debug, Clone)]
pub struct TradeImpactArgs {
    /// Trade id from the catalog (e.g., "LAL-DAL")
    #[arg(short, long)]
    pub trade: String,

    /// Directory for chart JSON files
    #[arg(long)]
    pub chart_out: Option<PathBuf>,
}

/// Runs the trade-impact command.
///
/// # Errors
/// Returns an error if the trade is unknown or the season cannot be loaded.
pub async fn run_trade_impact(args: TradeImpactArgs, global: &GlobalArgs) -> Result<()> {
    let session = Session::open(global).await?;
    let trade = session.config.trade(&args.trade).ok_or_else(|| {
        let known: Vec<&str> = session.config.trades.iter().map(|t| t.id.as_str()).collect();
        anyhow!("Unknown trade: '{}'. Available: {}", args.trade, known.join(", "))
    })?;

    tracing::info!(trade = %trade.id, date = %trade.date, "Analyzing trade");
    let report = analyze_trade(&session.games, trade);
    println!("{}", ReportFormatter::format_trade_impact(&report));

    if let Some(dir) = &args.chart_out {
        let mut slot = ChartSlot::new("trade-impact");
        emit_chart(&mut slot, dir, &format!("{} players", report.trade_id), || {
            player_stats_chart(&report)
        })?;
        emit_chart(&mut slot, dir, &format!("{} win-pct", report.trade_id), || {
            win_percentage_chart(&report)
        })?;
    }

    Ok(())
}

/// Prints the configured trade catalog.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded.
pub fn run_trades(global: &GlobalArgs) -> Result<()> {
    let config = global.load_config()?;
    println!("{}", ReportFormatter::format_trade_catalog(&config.trades));
    Ok(())
}
