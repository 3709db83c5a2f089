#![allow(clippy::format_push_string)]
#![allow(clippy::uninlined_format_args)]

use hoopstats_core::TradeEvent;

use crate::fouls::{PlayerFoulTotal, TeamFoulSummary, TrendLine};
use crate::monthly::{MonthlyPoints, MonthlyRecord, SeasonMonth};
use crate::scoring::MvpCandidate;
use crate::trade_impact::TradeImpactReport;

const HEAVY_RULE: &str = "═══════════════════════════════════════════════════════════════\n";
const LIGHT_RULE: &str = "───────────────────────────────────────────────────────────────\n";
const NO_DATA: &str = "No data\n";

/// Plain-text tables for terminal output.
pub struct ReportFormatter;

impl ReportFormatter {
    fn banner(output: &mut String, title: &str) {
        output.push('\n');
        output.push_str(HEAVY_RULE);
        output.push_str(&format!("{:^63}\n", title));
        output.push_str(HEAVY_RULE);
        output.push('\n');
    }

    fn section(output: &mut String, title: &str) {
        output.push_str(title);
        output.push('\n');
        output.push_str(LIGHT_RULE);
    }

    #[must_use]
    pub fn format_trade_impact(report: &TradeImpactReport) -> String {
        let mut output = String::new();
        Self::banner(&mut output, &format!("TRADE IMPACT: {}", report.trade_id));
        output.push_str(&format!("Trade Date:            {}\n", report.trade_date));
        output.push('\n');

        Self::section(&mut output, "Post-Trade Player Averages");
        if report.players.is_empty() {
            output.push_str(NO_DATA);
        } else {
            output.push_str(&format!(
                "{:<25} {:<5} {:>6} {:>6} {:>7} {:>6}\n",
                "Player", "Team", "PPG", "MPG", "FG%", "Games"
            ));
            for p in &report.players {
                output.push_str(&format!(
                    "{:<25} {:<5} {:>6.1} {:>6.1} {:>6.1}% {:>6}\n",
                    p.player,
                    p.team,
                    p.stats.avg_points,
                    p.stats.avg_minutes,
                    p.stats.fg_percent,
                    p.stats.games_played
                ));
            }
        }
        output.push('\n');

        Self::section(&mut output, "Team Win % Since Trade");
        for timeline in &report.teams {
            match timeline.latest() {
                Some(pct) => output.push_str(&format!(
                    "{:<25} {:>6.1}% after {} games\n",
                    timeline.team,
                    pct,
                    timeline.points.len()
                )),
                None => output.push_str(&format!("{:<25} {}", timeline.team, NO_DATA)),
            }
        }

        output.push('\n');
        output.push_str(HEAVY_RULE);
        output
    }

    #[must_use]
    pub fn format_trade_catalog(trades: &[TradeEvent]) -> String {
        let mut output = String::new();
        Self::banner(&mut output, "TRADES");
        if trades.is_empty() {
            output.push_str(NO_DATA);
            return output;
        }

        for trade in trades {
            output.push_str(&format!(
                "{:<12} {}  {}\n",
                trade.id,
                trade.date,
                trade.teams.join(" / ")
            ));
            for team in &trade.teams {
                let players: Vec<&str> = trade.acquired_by(team).collect();
                output.push_str(&format!("    {:<5} acquires {}\n", team, players.join(", ")));
            }
        }
        output
    }

    #[must_use]
    pub fn format_fouls(summaries: &[TeamFoulSummary], trend: Option<&TrendLine>) -> String {
        let mut output = String::new();
        Self::banner(&mut output, "FOULS VS WIN RATE");

        Self::section(&mut output, "Teams");
        if summaries.is_empty() {
            output.push_str(NO_DATA);
        } else {
            output.push_str(&format!(
                "{:<6} {:>6} {:>6} {:>10} {:>8}\n",
                "Team", "Games", "Wins", "Fouls/G", "Win %"
            ));
            for s in summaries {
                output.push_str(&format!(
                    "{:<6} {:>6} {:>6} {:>10.2} {:>7.1}%\n",
                    s.team,
                    s.games,
                    s.wins,
                    s.avg_fouls_per_game,
                    s.win_percentage * 100.0
                ));
            }
        }
        output.push('\n');

        Self::section(&mut output, "Trend");
        match trend {
            Some(trend) => {
                output.push_str(&format!("Slope:                 {:.4}\n", trend.fit.slope));
                output.push_str(&format!("Intercept:             {:.4}\n", trend.fit.intercept));
                output.push_str(&format!("R²:                    {:.4}\n", trend.fit.r_squared));
            }
            None => output.push_str("N/A (needs two teams with different foul rates)\n"),
        }
        output
    }

    #[must_use]
    pub fn format_player_fouls(team: &str, players: &[PlayerFoulTotal]) -> String {
        let mut output = String::new();
        output.push('\n');
        Self::section(&mut output, &format!("Fouls by Player ({})", team));
        if players.is_empty() {
            output.push_str(NO_DATA);
        }
        for p in players {
            output.push_str(&format!("{:<25} {:>6.0}\n", p.player, p.fouls));
        }
        output
    }

    #[must_use]
    pub fn format_monthly_records(month: SeasonMonth, records: &[MonthlyRecord]) -> String {
        let mut output = String::new();
        Self::banner(&mut output, &format!("RECORDS: {}", month.name().to_uppercase()));
        if records.iter().all(|r| r.games() == 0) {
            output.push_str(NO_DATA);
            return output;
        }

        output.push_str(&format!("{:<6} {:>5} {:>7} {:>6}\n", "Team", "Wins", "Losses", "Games"));
        for r in records {
            output.push_str(&format!(
                "{:<6} {:>5} {:>7} {:>6}\n",
                r.team,
                r.wins,
                r.losses,
                r.games()
            ));
        }
        output
    }

    #[must_use]
    pub fn format_monthly_points(team: &str, points: &[MonthlyPoints]) -> String {
        let mut output = String::new();
        Self::banner(&mut output, &format!("POINTS BY MONTH: {}", team));
        if points.is_empty() {
            output.push_str(NO_DATA);
            return output;
        }

        for p in points {
            output.push_str(&format!("{:<12} {:>8.0}\n", p.month.name(), p.points));
        }
        output.push_str(LIGHT_RULE);
        let total: f64 = points.iter().map(|p| p.points).sum();
        output.push_str(&format!("{:<12} {:>8.0}\n", "Total", total));
        output
    }

    #[must_use]
    pub fn format_mvp_leaderboard(candidates: &[MvpCandidate]) -> String {
        let mut output = String::new();
        Self::banner(&mut output, "MVP LEADERBOARD");
        if candidates.is_empty() {
            output.push_str(NO_DATA);
            return output;
        }

        output.push_str(&format!(
            "{:>3} {:<25} {:<5} {:>5} {:>6} {:>6} {:>6} {:>7} {:>8}\n",
            "#", "Player", "Team", "G", "PPG", "RPG", "APG", "Team W%", "Score"
        ));
        for (rank, c) in candidates.iter().enumerate() {
            output.push_str(&format!(
                "{:>3} {:<25} {:<5} {:>5} {:>6.1} {:>6.1} {:>6.1} {:>6.1}% {:>8.2}\n",
                rank + 1,
                c.line.player,
                c.line.team,
                c.line.games,
                c.line.avg_points,
                c.line.avg_rebounds,
                c.line.avg_assists,
                c.team_win_percentage * 100.0,
                c.score
            ));
        }
        output
    }
}
