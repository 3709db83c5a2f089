//! Fouls versus win rate.
//!
//! Team-level foul averages against win percentage, the least-squares trend
//! through them, and the per-player drill-down for a selected team.

use std::collections::{BTreeMap, HashMap};

use hoopstats_core::GameRecord;
use serde::{Deserialize, Serialize};

use crate::regression::{linear_regression, LinearRegression};
use crate::team_games::group_team_games;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamFoulSummary {
    pub team: String,
    pub games: usize,
    pub wins: usize,
    pub total_fouls: f64,
    pub avg_fouls_per_game: f64,
    /// Fraction of games won, in `[0, 1]`.
    pub win_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerFoulTotal {
    pub player: String,
    pub fouls: f64,
}

/// Fitted line drawn across the observed range of average fouls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub fit: LinearRegression,
    pub x_min: f64,
    pub x_max: f64,
}

impl TrendLine {
    /// The two endpoints `(x, y)` of the drawn segment.
    #[must_use]
    pub fn endpoints(&self) -> [(f64, f64); 2] {
        [
            (self.x_min, self.fit.predict(self.x_min)),
            (self.x_max, self.fit.predict(self.x_max)),
        ]
    }
}

/// Per-team foul and win summaries, sorted by team code.
///
/// A team game is every row of that team on one date; its fouls are the sum
/// of the players' fouls and its outcome comes from the first row with a win
/// or loss. Both averages are per team game, not per player row, so a team
/// with five players fouling twice each averages 10 fouls, not 2.
#[must_use]
pub fn team_foul_summaries(records: &[GameRecord]) -> Vec<TeamFoulSummary> {
    let mut by_team: BTreeMap<&str, (usize, usize, f64)> = BTreeMap::new();
    for ((team, _date), game) in group_team_games(records) {
        let entry = by_team.entry(team).or_insert((0, 0, 0.0));
        entry.0 += 1;
        if game.result.is_win() {
            entry.1 += 1;
        }
        entry.2 += game.personal_fouls;
    }

    by_team
        .into_iter()
        .map(|(team, (games, wins, total_fouls))| TeamFoulSummary {
            team: team.to_string(),
            games,
            wins,
            total_fouls,
            avg_fouls_per_game: total_fouls / games as f64,
            win_percentage: wins as f64 / games as f64,
        })
        .collect()
}

/// Season foul totals for each player of `team`, most fouls first.
///
/// Ties sort by name. Team-level rows are ignored.
#[must_use]
pub fn player_fouls_for_team(records: &[GameRecord], team: &str) -> Vec<PlayerFoulTotal> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for record in records
        .iter()
        .filter(|r| r.team == team && !r.is_team_row())
    {
        *totals.entry(record.player.as_str()).or_default() += record.personal_fouls;
    }

    let mut players: Vec<PlayerFoulTotal> = totals
        .into_iter()
        .map(|(player, fouls)| PlayerFoulTotal {
            player: player.to_string(),
            fouls,
        })
        .collect();
    players.sort_by(|a, b| {
        b.fouls
            .total_cmp(&a.fouls)
            .then_with(|| a.player.cmp(&b.player))
    });
    players
}

/// Fits win percentage against average fouls.
///
/// Returns `None` with fewer than two teams or when every team averages the
/// same number of fouls.
#[must_use]
pub fn foul_trend_line(summaries: &[TeamFoulSummary]) -> Option<TrendLine> {
    if summaries.len() < 2 {
        return None;
    }

    let x: Vec<f64> = summaries.iter().map(|s| s.avg_fouls_per_game).collect();
    let y: Vec<f64> = summaries.iter().map(|s| s.win_percentage).collect();

    let x_min = x.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (x_max - x_min).abs() < f64::EPSILON {
        return None;
    }

    Some(TrendLine {
        fit: linear_regression(&x, &y),
        x_min,
        x_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hoopstats_core::GameResult;

    fn foul_row(day: u32, player: &str, team: &str, result: GameResult, fouls: f64) -> GameRecord {
        let date = NaiveDate::from_ymd_opt(2024, 12, day).unwrap();
        let mut r = GameRecord::new(date, player, team, result);
        r.personal_fouls = fouls;
        r
    }

    fn season() -> Vec<GameRecord> {
        vec![
            // BOS: two games, 20 and 16 fouls, one win
            foul_row(1, "A", "BOS", GameResult::Win, 12.0),
            foul_row(1, "B", "BOS", GameResult::Win, 8.0),
            foul_row(3, "A", "BOS", GameResult::Loss, 10.0),
            foul_row(3, "B", "BOS", GameResult::Loss, 6.0),
            // NYK: two games, 14 and 16 fouls, two wins
            foul_row(1, "C", "NYK", GameResult::Win, 14.0),
            foul_row(2, "C", "NYK", GameResult::Win, 16.0),
            // MIA: one game, 24 fouls, loss
            foul_row(2, "D", "MIA", GameResult::Loss, 24.0),
        ]
    }

    #[test]
    fn test_team_summaries() {
        let summaries = team_foul_summaries(&season());
        let teams: Vec<&str> = summaries.iter().map(|s| s.team.as_str()).collect();
        assert_eq!(teams, vec!["BOS", "MIA", "NYK"]);

        let bos = &summaries[0];
        assert_eq!(bos.games, 2);
        assert_eq!(bos.wins, 1);
        assert_eq!(bos.total_fouls, 36.0);
        assert_eq!(bos.avg_fouls_per_game, 18.0);
        assert_eq!(bos.win_percentage, 0.5);

        let nyk = &summaries[2];
        assert_eq!(nyk.avg_fouls_per_game, 15.0);
        assert_eq!(nyk.win_percentage, 1.0);
    }

    #[test]
    fn test_empty_season() {
        assert!(team_foul_summaries(&[]).is_empty());
        assert!(foul_trend_line(&[]).is_none());
        assert!(player_fouls_for_team(&[], "BOS").is_empty());
    }

    #[test]
    fn test_trend_line_slopes_down() {
        let summaries = team_foul_summaries(&season());
        let trend = foul_trend_line(&summaries).expect("three teams");

        assert!(trend.fit.slope < 0.0);
        assert_eq!(trend.x_min, 15.0);
        assert_eq!(trend.x_max, 24.0);

        let [(x0, y0), (x1, y1)] = trend.endpoints();
        assert_eq!(x0, 15.0);
        assert_eq!(x1, 24.0);
        assert!(y0 > y1);
    }

    #[test]
    fn test_averages_are_per_team_game() {
        let records: Vec<GameRecord> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|p| foul_row(4, p, "LAL", GameResult::Win, 2.0))
            .collect();

        let summaries = team_foul_summaries(&records);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].games, 1);
        assert_eq!(summaries[0].avg_fouls_per_game, 10.0);
        assert_eq!(summaries[0].win_percentage, 1.0);
    }

    #[test]
    fn test_trend_line_needs_spread() {
        let records = vec![
            foul_row(1, "A", "BOS", GameResult::Win, 10.0),
            foul_row(1, "B", "NYK", GameResult::Loss, 10.0),
        ];
        let summaries = team_foul_summaries(&records);
        assert!(foul_trend_line(&summaries).is_none());
    }

    #[test]
    fn test_player_fouls_sorted() {
        let mut records = season();
        records.push(foul_row(5, "C", "BOS", GameResult::Win, 22.0));
        records.push(foul_row(5, "", "BOS", GameResult::Win, 99.0));

        let players = player_fouls_for_team(&records, "BOS");
        let names: Vec<&str> = players.iter().map(|p| p.player.as_str()).collect();
        // A and C tie at 22; B has 14
        assert_eq!(names, vec!["A", "C", "B"]);
        assert_eq!(players[0].fouls, 22.0);
        assert_eq!(players[2].fouls, 14.0);
    }
}
