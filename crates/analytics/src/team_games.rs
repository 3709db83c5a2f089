//! Collapses player rows into team games.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use hoopstats_core::{GameRecord, GameResult};

/// All rows of one team on one date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamGame {
    /// Outcome of the first row seen for this team and date that has one.
    pub result: GameResult,
    pub personal_fouls: f64,
    pub points: f64,
}

/// Groups rows by `(team, date)`, summing fouls and points.
///
/// A row with an unknown outcome never decides the game; a later row with a
/// win or loss does. Keyed and iterated in team order, then date order.
#[must_use]
pub fn group_team_games(records: &[GameRecord]) -> BTreeMap<(&str, NaiveDate), TeamGame> {
    let mut games: BTreeMap<(&str, NaiveDate), TeamGame> = BTreeMap::new();
    for record in records {
        let game = games
            .entry((record.team.as_str(), record.date))
            .or_insert(TeamGame {
                result: record.result,
                personal_fouls: 0.0,
                points: 0.0,
            });
        if game.result == GameResult::Unknown {
            game.result = record.result;
        }
        game.personal_fouls += record.personal_fouls;
        game.points += record.points;
    }
    games
}
