//! Chart specifications and their ownership.
//!
//! Builders turn aggregation results into serializable [`ChartSpec`]s that a
//! front end can draw. A [`ChartSlot`] owns at most one rendered chart: a new
//! render tears the previous [`ChartHandle`] down before the replacement is
//! built.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fouls::{PlayerFoulTotal, TeamFoulSummary, TrendLine};
use crate::monthly::{MonthlyPoints, MonthlyRecord};
use crate::scoring::PlayerScoringLine;
use crate::trade_impact::{PlayerPostTradeStats, TradeImpactReport};

const NBA_RED: &str = "rgba(206, 17, 65, 1)";
const NBA_BLUE: &str = "rgba(23, 64, 139, 1)";
const LINE_COLORS: [&str; 4] = [
    NBA_RED,
    NBA_BLUE,
    "rgba(0, 125, 195, 1)",
    "rgba(253, 185, 39, 1)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
    Pie,
}

/// Horizontal position of a point: a number, a calendar date, or a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Number(f64),
    Date(NaiveDate),
    Category(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: XValue,
    pub y: f64,
    /// Hover text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DataPoint {
    fn new(x: XValue, y: f64) -> Self {
        Self { x, y, label: None }
    }

    fn labelled(x: XValue, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: Some(label.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub points: Vec<DataPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl ChartSpec {
    fn new(kind: ChartKind, title: impl Into<String>, x_label: &str, y_label: &str) -> Self {
        Self {
            kind,
            title: title.into(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            series: Vec::new(),
        }
    }

    /// True when there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize chart")
    }

    /// Writes the spec as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write chart file: {}", path.display()))
    }
}

/// Evenly spaced hue for the `index`-th of `count` teams.
#[must_use]
pub fn team_color(index: usize, count: usize) -> String {
    let hue = if count == 0 {
        0.0
    } else {
        360.0 * index as f64 / count as f64
    };
    format!("hsl({hue:.0}, 70%, 50%)")
}

// =============================================================================
// Builders
// =============================================================================

/// Bar chart of post-trade points and minutes per game for each moved player.
#[must_use]
pub fn player_stats_chart(report: &TradeImpactReport) -> ChartSpec {
    let mut chart = ChartSpec::new(
        ChartKind::Bar,
        format!("{} post-trade averages", report.trade_id),
        "Player",
        "Value",
    );

    let bars = |value: fn(&PlayerPostTradeStats) -> f64| {
        report
            .players
            .iter()
            .map(|p| {
                DataPoint::labelled(
                    XValue::Category(format!("{} ({})", p.player, p.team)),
                    value(&p.stats),
                    format!(
                        "FG%: {:.1}%, Games: {}",
                        p.stats.fg_percent, p.stats.games_played
                    ),
                )
            })
            .collect::<Vec<_>>()
    };

    chart.series.push(Series {
        name: "Avg PPG (Post-Trade)".to_string(),
        color: Some(NBA_RED.to_string()),
        points: bars(|s| s.avg_points),
    });
    chart.series.push(Series {
        name: "Avg MPG (Post-Trade)".to_string(),
        color: Some(NBA_BLUE.to_string()),
        points: bars(|s| s.avg_minutes),
    });
    chart
}

/// Line chart of cumulative win percentage per team since the trade.
///
/// Teams without games are left out rather than drawn as empty lines.
#[must_use]
pub fn win_percentage_chart(report: &TradeImpactReport) -> ChartSpec {
    let mut chart = ChartSpec::new(
        ChartKind::Line,
        format!("{} win % since {}", report.trade_id, report.trade_date),
        "Date",
        "Win Percentage (%)",
    );

    for (i, timeline) in report
        .teams
        .iter()
        .filter(|t| !t.points.is_empty())
        .enumerate()
    {
        chart.series.push(Series {
            name: format!("{} Win % (Post-Trade)", timeline.team),
            color: Some(LINE_COLORS[i % LINE_COLORS.len()].to_string()),
            points: timeline
                .points
                .iter()
                .map(|p| DataPoint::new(XValue::Date(p.date), p.win_percentage))
                .collect(),
        });
    }
    chart
}

/// Scatter of average fouls against win percentage, one point per team,
/// with the trend line as a second series.
#[must_use]
pub fn fouls_scatter_chart(summaries: &[TeamFoulSummary], trend: Option<&TrendLine>) -> ChartSpec {
    let mut chart = ChartSpec::new(
        ChartKind::Scatter,
        "Do Team Fouls Affect Win Rate?",
        "Average Fouls per Game",
        "Win Percentage",
    );

    chart.series.push(Series {
        name: "Teams".to_string(),
        color: None,
        points: summaries
            .iter()
            .map(|s| {
                DataPoint::labelled(
                    XValue::Number(s.avg_fouls_per_game),
                    s.win_percentage,
                    &s.team,
                )
            })
            .collect(),
    });

    if let Some(trend) = trend {
        chart.series.push(Series {
            name: "Trend Line".to_string(),
            color: Some("black".to_string()),
            points: trend
                .endpoints()
                .iter()
                .map(|(x, y)| DataPoint::new(XValue::Number(*x), *y))
                .collect(),
        });
    }
    chart
}

/// Foul totals for the players of one team.
#[must_use]
pub fn player_fouls_chart(team: &str, players: &[PlayerFoulTotal], color: &str) -> ChartSpec {
    let mut chart = ChartSpec::new(
        ChartKind::Scatter,
        format!("Fouls by Player ({team})"),
        "Player",
        "Total Fouls",
    );
    chart.series.push(Series {
        name: team.to_string(),
        color: Some(color.to_string()),
        points: players
            .iter()
            .map(|p| {
                DataPoint::labelled(
                    XValue::Category(p.player.clone()),
                    p.fouls,
                    format!("{}: {} fouls", p.player, p.fouls),
                )
            })
            .collect(),
    });
    chart
}

/// Pie of games played per team in one month.
#[must_use]
pub fn monthly_record_pie(records: &[MonthlyRecord]) -> ChartSpec {
    let title = records
        .first()
        .map_or_else(|| "Games per team".to_string(), |r| format!("Games per team, {}", r.month));
    let mut chart = ChartSpec::new(ChartKind::Pie, title, "Team", "Games");
    chart.series.push(Series {
        name: "Games".to_string(),
        color: None,
        points: records
            .iter()
            .map(|r| {
                DataPoint::labelled(
                    XValue::Category(r.team.clone()),
                    f64::from(r.games()),
                    format!("{} - Wins: {}, Losses: {}", r.team, r.wins, r.losses),
                )
            })
            .collect(),
    });
    chart
}

/// Bar chart of one team's total points per month.
#[must_use]
pub fn monthly_points_bar(team: &str, points: &[MonthlyPoints]) -> ChartSpec {
    let mut chart = ChartSpec::new(
        ChartKind::Bar,
        format!("{team} total points by month"),
        "Month",
        "Points",
    );
    chart.series.push(Series {
        name: team.to_string(),
        color: Some("#a3c9f9".to_string()),
        points: points
            .iter()
            .map(|p| {
                DataPoint::labelled(
                    XValue::Category(p.month.to_string()),
                    p.points,
                    format!("{}: {} points", p.month, p.points),
                )
            })
            .collect(),
    });
    chart
}

/// Scatter of average minutes against average points, one series per team.
#[must_use]
pub fn scoring_scatter(lines: &[PlayerScoringLine]) -> ChartSpec {
    let mut chart = ChartSpec::new(
        ChartKind::Scatter,
        "Points vs. minutes",
        "Average Minutes Played per Game (MP)",
        "Average Points per Game (PTS)",
    );

    let mut teams: Vec<&str> = lines.iter().map(|l| l.team.as_str()).collect();
    teams.sort_unstable();
    teams.dedup();

    for (i, team) in teams.iter().enumerate() {
        chart.series.push(Series {
            name: (*team).to_string(),
            color: Some(team_color(i, teams.len())),
            points: lines
                .iter()
                .filter(|l| l.team == *team)
                .map(|l| {
                    DataPoint::labelled(XValue::Number(l.avg_minutes), l.avg_points, &l.player)
                })
                .collect(),
        });
    }
    chart
}

// =============================================================================
// Ownership
// =============================================================================

/// A rendered chart. Dropping the handle tears the chart down.
#[derive(Debug)]
pub struct ChartHandle {
    slot: String,
    generation: u64,
    spec: ChartSpec,
    live: Arc<AtomicUsize>,
}

impl ChartHandle {
    #[must_use]
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Render count of the owning slot when this chart was built, from 1.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
        debug!(slot = %self.slot, generation = self.generation, "Chart torn down");
    }
}

/// Owner of at most one live chart.
#[derive(Debug)]
pub struct ChartSlot {
    name: String,
    generation: u64,
    current: Option<ChartHandle>,
    live: Arc<AtomicUsize>,
}

impl ChartSlot {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generation: 0,
            current: None,
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Tears down the current chart, then builds and keeps a new one.
    pub fn render(&mut self, build: impl FnOnce() -> ChartSpec) -> &ChartHandle {
        self.clear();
        let spec = build();

        self.generation += 1;
        self.live.fetch_add(1, Ordering::SeqCst);
        debug!(
            slot = %self.name,
            generation = self.generation,
            empty = spec.is_empty(),
            "Chart rendered"
        );

        self.current.insert(ChartHandle {
            slot: self.name.clone(),
            generation: self.generation,
            spec,
            live: Arc::clone(&self.live),
        })
    }

    /// Tears down the current chart, if any.
    pub fn clear(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<&ChartHandle> {
        self.current.as_ref()
    }

    /// Counter of this slot's handles that are still alive.
    #[must_use]
    pub fn live_handles(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fouls::foul_trend_line;
    use crate::trade_impact::{PlayerImpact, TeamTimeline, WinPercentagePoint};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, d).unwrap()
    }

    fn report() -> TradeImpactReport {
        TradeImpactReport {
            trade_id: "LAL-DAL".to_string(),
            trade_date: date(1),
            players: vec![PlayerImpact {
                player: "X".to_string(),
                team: "LAL".to_string(),
                stats: PlayerPostTradeStats {
                    avg_points: 30.0,
                    avg_minutes: 36.0,
                    fg_percent: 50.0,
                    games_played: 1,
                },
            }],
            teams: vec![
                TeamTimeline {
                    team: "LAL".to_string(),
                    points: vec![WinPercentagePoint { date: date(3), win_percentage: 100.0 }],
                },
                TeamTimeline {
                    team: "DAL".to_string(),
                    points: vec![],
                },
            ],
        }
    }

    fn summary(team: &str, fouls: f64, win_percentage: f64) -> TeamFoulSummary {
        TeamFoulSummary {
            team: team.to_string(),
            games: 1,
            wins: usize::from(win_percentage > 0.5),
            total_fouls: fouls,
            avg_fouls_per_game: fouls,
            win_percentage,
        }
    }

    // ==================== Builder Tests ====================

    #[test]
    fn test_player_stats_chart() {
        let chart = player_stats_chart(&report());
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.series.len(), 2);

        let ppg = &chart.series[0].points[0];
        assert_eq!(ppg.x, XValue::Category("X (LAL)".to_string()));
        assert_eq!(ppg.y, 30.0);
        assert_eq!(ppg.label.as_deref(), Some("FG%: 50.0%, Games: 1"));
        assert_eq!(chart.series[1].points[0].y, 36.0);
    }

    #[test]
    fn test_win_percentage_chart_skips_idle_teams() {
        let chart = win_percentage_chart(&report());
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].name, "LAL Win % (Post-Trade)");
        assert_eq!(chart.series[0].points[0].x, XValue::Date(date(3)));
    }

    #[test]
    fn test_empty_inputs_give_empty_charts() {
        assert!(fouls_scatter_chart(&[], None).is_empty());
        assert!(scoring_scatter(&[]).is_empty());
        assert!(monthly_record_pie(&[]).is_empty());
        assert!(monthly_points_bar("BOS", &[]).is_empty());

        let mut idle = report();
        idle.teams.clear();
        assert!(win_percentage_chart(&idle).is_empty());
    }

    #[test]
    fn test_fouls_chart_with_trend() {
        let summaries = vec![
            summary("A", 15.0, 1.0),
            summary("B", 25.0, 0.0),
        ];
        let trend = foul_trend_line(&summaries);
        let chart = fouls_scatter_chart(&summaries, trend.as_ref());

        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[1].points.len(), 2);
        assert_eq!(chart.series[0].points[0].label.as_deref(), Some("A"));
    }

    #[test]
    fn test_chart_json_shape() {
        let json = win_percentage_chart(&report()).to_json().unwrap();
        assert!(json.contains("\"kind\": \"line\""));
        assert!(json.contains("\"x\": \"2025-02-03\""));
        assert!(!json.contains("\"label\""));

        let back: ChartSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back.series[0].points[0].x, XValue::Date(date(3)));
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        player_stats_chart(&report()).write_json(&path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("Avg PPG"));
    }

    #[test]
    fn test_team_colors() {
        assert_eq!(team_color(0, 4), "hsl(0, 70%, 50%)");
        assert_eq!(team_color(1, 4), "hsl(90, 70%, 50%)");
        assert_eq!(team_color(3, 0), "hsl(0, 70%, 50%)");
    }

    // ==================== Slot Lifecycle Tests ====================

    #[test]
    fn test_render_tears_down_previous_first() {
        let mut slot = ChartSlot::new("player-stats");
        let live = slot.live_handles();

        slot.render(|| player_stats_chart(&report()));
        assert_eq!(live.load(Ordering::SeqCst), 1);

        let seen = Arc::clone(&live);
        let handle = slot.render(move || {
            // The first chart is gone before the second is built
            assert_eq!(seen.load(Ordering::SeqCst), 0);
            win_percentage_chart(&report())
        });
        assert_eq!(handle.generation(), 2);
        assert_eq!(handle.spec().kind, ChartKind::Line);
        assert_eq!(live.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_and_drop() {
        let mut slot = ChartSlot::new("fouls");
        let live = slot.live_handles();

        slot.render(|| fouls_scatter_chart(&[], None));
        slot.clear();
        assert!(slot.current().is_none());
        assert_eq!(live.load(Ordering::SeqCst), 0);

        slot.render(|| fouls_scatter_chart(&[], None));
        drop(slot);
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }
}
