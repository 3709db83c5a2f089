//! Aggregations over season box scores.
//!
//! Every analysis takes a slice of [`hoopstats_core::GameRecord`] and returns
//! plain serializable values. The [`chart`] module turns those values into
//! chart specifications and [`report`] into terminal tables.

pub mod chart;
pub mod fouls;
pub mod monthly;
pub mod regression;
pub mod report;
pub mod scoring;
pub mod team_games;
pub mod trade_impact;

pub use chart::{ChartHandle, ChartKind, ChartSlot, ChartSpec, DataPoint, Series, XValue};
pub use fouls::{
    foul_trend_line, player_fouls_for_team, team_foul_summaries, PlayerFoulTotal,
    TeamFoulSummary, TrendLine,
};
pub use monthly::{
    monthly_points, monthly_records, months_played, points_for_team, records_for_month,
    MonthlyPoints, MonthlyRecord, SeasonMonth,
};
pub use regression::{linear_regression, LinearRegression};
pub use report::ReportFormatter;
pub use scoring::{
    mvp_leaderboard, mvp_score, player_scoring_lines, MvpCandidate, PlayerScoringLine,
};
pub use trade_impact::{
    analyze_trade, compute_player_averages, compute_win_percentage_timeline,
    filter_player_games_since, filter_team_games_since, PlayerImpact, PlayerPostTradeStats,
    TeamTimeline, TradeImpactReport, WinPercentagePoint,
};
