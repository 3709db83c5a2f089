//! Post-trade impact aggregation.
//!
//! Given a trade, measures how the moved players performed on their new teams
//! and how each team's win percentage evolved from the trade date onward.
//! Every function is pure over the input slice.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use hoopstats_core::{GameRecord, TradeEvent};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-player averages over a set of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerPostTradeStats {
    pub avg_points: f64,
    pub avg_minutes: f64,
    /// Field-goal percentage in `[0, 100]`.
    pub fg_percent: f64,
    pub games_played: usize,
}

/// Cumulative win percentage after the games played on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinPercentagePoint {
    pub date: NaiveDate,
    /// In `[0, 100]`.
    pub win_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerImpact {
    pub player: String,
    pub team: String,
    pub stats: PlayerPostTradeStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamTimeline {
    pub team: String,
    /// Empty when the team has not played since the trade.
    pub points: Vec<WinPercentagePoint>,
}

impl TeamTimeline {
    /// Win percentage after the last game, if any.
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.points.last().map(|p| p.win_percentage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeImpactReport {
    pub trade_id: String,
    pub trade_date: NaiveDate,
    pub players: Vec<PlayerImpact>,
    pub teams: Vec<TeamTimeline>,
}

/// Rows for `player` on `team` dated on or after `since`, in input order.
#[must_use]
pub fn filter_player_games_since<'a>(
    records: &'a [GameRecord],
    player: &str,
    team: &str,
    since: NaiveDate,
) -> Vec<&'a GameRecord> {
    records
        .iter()
        .filter(|r| r.player == player && r.team == team && r.date >= since)
        .collect()
}

/// Averages points, minutes and field-goal percentage over `games`.
///
/// Empty input yields all zeros.
#[must_use]
pub fn compute_player_averages(games: &[&GameRecord]) -> PlayerPostTradeStats {
    let games_played = games.len();
    if games_played == 0 {
        return PlayerPostTradeStats::default();
    }

    let (points, minutes, made, attempted) =
        games
            .iter()
            .fold((0.0, 0.0, 0.0, 0.0), |(pts, min, fgm, fga), g| {
                (
                    pts + g.points,
                    min + g.minutes,
                    fgm + g.field_goals_made,
                    fga + g.field_goals_attempted,
                )
            });

    let n = games_played as f64;
    PlayerPostTradeStats {
        avg_points: points / n,
        avg_minutes: minutes / n,
        fg_percent: if attempted > 0.0 {
            made / attempted * 100.0
        } else {
            0.0
        },
        games_played,
    }
}

/// Rows for `team` dated on or after `since`, ascending by date.
///
/// Same-day rows keep their input order.
#[must_use]
pub fn filter_team_games_since<'a>(
    records: &'a [GameRecord],
    team: &str,
    since: NaiveDate,
) -> Vec<&'a GameRecord> {
    let mut games: Vec<&GameRecord> = records
        .iter()
        .filter(|r| r.team == team && r.date >= since)
        .collect();
    games.sort_by_key(|r| r.date);
    games
}

/// Cumulative win percentage per game date for `team`.
///
/// Rows sharing a date collapse to one game whose outcome is taken from the
/// first row seen. Anything other than a win counts as a loss. Returns one
/// point per date, ascending; empty when the team has no games.
#[must_use]
pub fn compute_win_percentage_timeline(
    games: &[&GameRecord],
    team: &str,
) -> Vec<WinPercentagePoint> {
    let mut by_date: BTreeMap<NaiveDate, &GameRecord> = BTreeMap::new();
    for &game in games.iter().filter(|g| g.team == team) {
        by_date.entry(game.date).or_insert(game);
    }

    let mut wins = 0u32;
    let mut losses = 0u32;
    by_date
        .into_iter()
        .map(|(date, game)| {
            if game.result.is_win() {
                wins += 1;
            } else {
                losses += 1;
            }
            WinPercentagePoint {
                date,
                win_percentage: f64::from(wins) / f64::from(wins + losses) * 100.0,
            }
        })
        .collect()
}

/// Runs the full post-trade analysis for one trade.
///
/// Players and teams appear in the trade's configured order.
#[must_use]
pub fn analyze_trade(records: &[GameRecord], trade: &TradeEvent) -> TradeImpactReport {
    let players = trade
        .assignments
        .iter()
        .map(|assignment| {
            let games = filter_player_games_since(
                records,
                &assignment.player,
                &assignment.destination,
                trade.date,
            );
            PlayerImpact {
                player: assignment.player.clone(),
                team: assignment.destination.clone(),
                stats: compute_player_averages(&games),
            }
        })
        .collect::<Vec<_>>();

    let teams = trade
        .teams
        .iter()
        .map(|team| {
            let games = filter_team_games_since(records, team, trade.date);
            TeamTimeline {
                team: team.clone(),
                points: compute_win_percentage_timeline(&games, team),
            }
        })
        .collect::<Vec<_>>();

    debug!(
        trade = %trade.id,
        players = players.len(),
        teams = teams.len(),
        "Analyzed trade impact"
    );

    TradeImpactReport {
        trade_id: trade.id.clone(),
        trade_date: trade.date,
        players,
        teams,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoopstats_core::{default_trade_catalog, GameResult};
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(day: u32, player: &str, team: &str, result: GameResult) -> GameRecord {
        GameRecord::new(date(2025, 2, day), player, team, result)
    }

    fn line(
        day: u32,
        player: &str,
        team: &str,
        points: f64,
        minutes: f64,
        fgm: f64,
        fga: f64,
    ) -> GameRecord {
        let mut r = row(day, player, team, GameResult::Win);
        r.points = points;
        r.minutes = minutes;
        r.field_goals_made = fgm;
        r.field_goals_attempted = fga;
        r
    }

    // ==================== Player Filter Tests ====================

    #[test]
    fn test_filter_player_games_inclusive_cutoff() {
        let records = vec![
            line(1, "X", "LAL", 10.0, 30.0, 4.0, 9.0),
            line(2, "X", "LAL", 20.0, 30.0, 8.0, 15.0),
            line(2, "X", "DAL", 30.0, 30.0, 8.0, 15.0),
            line(3, "Y", "LAL", 40.0, 30.0, 8.0, 15.0),
            line(4, "X", "LAL", 50.0, 30.0, 8.0, 15.0),
        ];

        let games = filter_player_games_since(&records, "X", "LAL", date(2025, 2, 2));
        let points: Vec<f64> = games.iter().map(|g| g.points).collect();
        assert_eq!(points, vec![20.0, 50.0]);
    }

    #[test]
    fn test_filter_player_no_match() {
        let records = vec![line(5, "X", "LAL", 10.0, 30.0, 4.0, 9.0)];
        assert!(filter_player_games_since(&records, "Z", "LAL", date(2025, 2, 1)).is_empty());
        assert!(filter_player_games_since(&records, "X", "BOS", date(2025, 2, 1)).is_empty());
    }

    // ==================== Averages Tests ====================

    #[test]
    fn test_single_game_averages() {
        // One 30-point, 36-minute game
        let records = vec![line(3, "X", "LAL", 30.0, 36.0, 12.0, 20.0)];
        let games = filter_player_games_since(&records, "X", "LAL", date(2025, 2, 1));
        let stats = compute_player_averages(&games);

        assert_eq!(stats.avg_points, 30.0);
        assert_eq!(stats.avg_minutes, 36.0);
        assert!((stats.fg_percent - 60.0).abs() < 1e-9);
        assert_eq!(stats.games_played, 1);
    }

    #[test]
    fn test_multi_game_averages() {
        let records = vec![
            line(3, "X", "LAL", 30.0, 36.0, 10.0, 20.0),
            line(5, "X", "LAL", 20.0, 30.0, 5.0, 20.0),
        ];
        let games: Vec<&GameRecord> = records.iter().collect();
        let stats = compute_player_averages(&games);

        assert_eq!(stats.avg_points, 25.0);
        assert_eq!(stats.avg_minutes, 33.0);
        assert_eq!(stats.fg_percent, 37.5);
        assert_eq!(stats.games_played, 2);
    }

    #[test]
    fn test_averages_empty_input() {
        let stats = compute_player_averages(&[]);
        assert_eq!(stats, PlayerPostTradeStats::default());
        assert_eq!(stats.avg_points, 0.0);
        assert_eq!(stats.fg_percent, 0.0);
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn test_averages_no_attempts() {
        let records = vec![line(3, "X", "LAL", 4.0, 12.0, 0.0, 0.0)];
        let games: Vec<&GameRecord> = records.iter().collect();
        let stats = compute_player_averages(&games);
        assert_eq!(stats.fg_percent, 0.0);
        assert_eq!(stats.avg_points, 4.0);
    }

    #[test]
    fn test_unmatched_player_yields_zero_averages() {
        let records = vec![line(3, "X", "LAL", 30.0, 36.0, 12.0, 20.0)];
        let games = filter_player_games_since(&records, "Nobody", "LAL", date(2025, 2, 1));
        assert_eq!(compute_player_averages(&games), PlayerPostTradeStats::default());
    }

    // ==================== Team Filter Tests ====================

    #[test]
    fn test_filter_team_games_sorted_stable() {
        let records = vec![
            row(9, "A", "BOS", GameResult::Win),
            row(7, "B", "BOS", GameResult::Loss),
            row(7, "C", "BOS", GameResult::Loss),
            row(6, "D", "BOS", GameResult::Win),
            row(8, "E", "NYK", GameResult::Win),
        ];

        let games = filter_team_games_since(&records, "BOS", date(2025, 2, 7));
        let players: Vec<&str> = games.iter().map(|g| g.player.as_str()).collect();
        assert_eq!(players, vec!["B", "C", "A"]);
    }

    // ==================== Timeline Tests ====================

    #[test]
    fn test_timeline_win_then_loss() {
        let records = vec![
            row(10, "A", "BOS", GameResult::Win),
            row(11, "A", "BOS", GameResult::Loss),
        ];
        let games = filter_team_games_since(&records, "BOS", date(2025, 2, 10));
        let timeline = compute_win_percentage_timeline(&games, "BOS");

        assert_eq!(
            timeline,
            vec![
                WinPercentagePoint {
                    date: date(2025, 2, 10),
                    win_percentage: 100.0
                },
                WinPercentagePoint {
                    date: date(2025, 2, 11),
                    win_percentage: 50.0
                },
            ]
        );
    }

    #[test]
    fn test_timeline_collapses_player_rows() {
        let records = vec![
            row(10, "A", "BOS", GameResult::Win),
            row(10, "B", "BOS", GameResult::Win),
            row(10, "C", "BOS", GameResult::Win),
            row(12, "A", "BOS", GameResult::Loss),
            row(12, "B", "BOS", GameResult::Loss),
            row(14, "", "BOS", GameResult::Win),
        ];
        let games = filter_team_games_since(&records, "BOS", date(2025, 2, 1));
        let timeline = compute_win_percentage_timeline(&games, "BOS");

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[0].win_percentage, 100.0);
        assert_eq!(timeline[1].win_percentage, 50.0);
        assert!((timeline[2].win_percentage - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_timeline_unknown_counts_as_loss() {
        let records = vec![row(10, "A", "BOS", GameResult::Unknown)];
        let games: Vec<&GameRecord> = records.iter().collect();
        let timeline = compute_win_percentage_timeline(&games, "BOS");
        assert_eq!(timeline[0].win_percentage, 0.0);
    }

    #[test]
    fn test_timeline_no_games() {
        let records = vec![row(10, "A", "NYK", GameResult::Win)];
        let games = filter_team_games_since(&records, "BOS", date(2025, 2, 1));
        assert!(games.is_empty());
        assert!(compute_win_percentage_timeline(&games, "BOS").is_empty());
    }

    // ==================== Trade Analysis Tests ====================

    #[test]
    fn test_analyze_trade() {
        let trade = default_trade_catalog().remove(0);
        let mut before = line(1, "Luka Dončić", "DAL", 40.0, 40.0, 15.0, 25.0);
        before.date = date(2025, 1, 31);
        let mut lal_before = row(1, "", "LAL", GameResult::Loss);
        lal_before.date = date(2025, 1, 31);
        let mut loss = line(4, "Luka Dončić", "LAL", 20.0, 30.0, 8.0, 20.0);
        loss.result = GameResult::Loss;

        let records = vec![
            before,
            lal_before,
            line(3, "Luka Dončić", "LAL", 30.0, 36.0, 10.0, 20.0),
            loss,
            row(3, "", "LAL", GameResult::Win),
            row(4, "", "LAL", GameResult::Loss),
        ];

        let report = analyze_trade(&records, &trade);

        assert_eq!(report.trade_id, "LAL-DAL");
        assert_eq!(report.players.len(), 2);
        assert_eq!(report.players[0].player, "Luka Dončić");
        assert_eq!(report.players[0].team, "LAL");
        assert_eq!(report.players[0].stats.avg_points, 25.0);
        assert_eq!(report.players[0].stats.games_played, 2);
        assert_eq!(report.players[1].stats, PlayerPostTradeStats::default());

        assert_eq!(report.teams[0].team, "LAL");
        assert_eq!(report.teams[0].points.len(), 2);
        assert_eq!(report.teams[0].latest(), Some(50.0));
        assert_eq!(report.teams[1].team, "DAL");
        assert!(report.teams[1].points.is_empty());
        assert_eq!(report.teams[1].latest(), None);
    }

    #[test]
    fn test_analyze_trade_is_deterministic() {
        let trade = default_trade_catalog().remove(0);
        let records = vec![
            line(3, "Luka Dončić", "LAL", 33.0, 35.5, 11.0, 23.0),
            row(3, "", "LAL", GameResult::Win),
            row(5, "", "DAL", GameResult::Loss),
        ];

        let first = analyze_trade(&records, &trade);
        let second = analyze_trade(&records, &trade);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    // ==================== Properties ====================

    fn arb_games() -> impl Strategy<Value = Vec<GameRecord>> {
        prop::collection::vec(
            (1u32..=28, 0.0f64..60.0, 0.0f64..48.0, any::<bool>()),
            1..40,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(day, points, minutes, won)| {
                    let result = if won { GameResult::Win } else { GameResult::Loss };
                    let mut r = row(day, "X", "BOS", result);
                    r.points = points;
                    r.minutes = minutes;
                    r
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_average_bounded_by_max(games in arb_games()) {
            let refs: Vec<&GameRecord> = games.iter().collect();
            let stats = compute_player_averages(&refs);
            let max = games.iter().map(|g| g.points).fold(0.0, f64::max);

            prop_assert_eq!(stats.games_played, games.len());
            prop_assert!(stats.avg_points >= 0.0);
            prop_assert!(stats.avg_points <= max + 1e-9);
        }

        #[test]
        fn prop_timeline_dates_ascend_and_end_at_total(games in arb_games()) {
            let refs = filter_team_games_since(&games, "BOS", date(2025, 2, 1));
            let timeline = compute_win_percentage_timeline(&refs, "BOS");

            prop_assert!(timeline.windows(2).all(|w| w[0].date < w[1].date));

            // One outcome per date: first row seen
            let mut outcomes: BTreeMap<NaiveDate, bool> = BTreeMap::new();
            for g in &refs {
                outcomes.entry(g.date).or_insert(g.result.is_win());
            }
            let wins = outcomes.values().filter(|w| **w).count() as f64;
            let expected = wins / outcomes.len() as f64 * 100.0;
            let last = timeline.last().map(|p| p.win_percentage).unwrap_or_default();
            prop_assert!((last - expected).abs() < 1e-9);
        }
    }
}
