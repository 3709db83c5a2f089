//! Box-score rows.
//!
//! A [`GameRecord`] is one player's line for one game. Every field is typed and
//! normalized when the row is loaded, so aggregations never re-parse strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder used for team and opponent codes that are missing from a row.
pub const UNKNOWN_TEAM: &str = "unknown";

/// Outcome of a team game, shared by every player row of that team on that date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum GameResult {
    Win,
    Loss,
    #[default]
    Unknown,
}

impl GameResult {
    /// Parses a result marker such as `W`, `L`, `Win`, `Loss` or `W 112-104`.
    ///
    /// Only the leading letter is significant. Anything unrecognized maps to
    /// [`GameResult::Unknown`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().chars().next() {
            Some('W' | 'w') => Self::Win,
            Some('L' | 'l') => Self::Loss,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::Win
    }

    /// Short marker written back to CSV files.
    #[must_use]
    pub fn as_marker(self) -> &'static str {
        match self {
            Self::Win => "W",
            Self::Loss => "L",
            Self::Unknown => "",
        }
    }
}

/// One player-game row.
///
/// Rows with an empty `player` are team-level rows: they carry a team outcome
/// but never match a player filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub player: String,
    pub team: String,
    pub opponent: String,
    pub result: GameResult,
    /// Fractional minutes played.
    pub minutes: f64,
    pub field_goals_made: f64,
    pub field_goals_attempted: f64,
    pub three_pointers_made: f64,
    pub three_pointers_attempted: f64,
    pub free_throws_made: f64,
    pub free_throws_attempted: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub personal_fouls: f64,
    pub points: f64,
}

impl GameRecord {
    /// Creates a row with the identifying fields set and every stat at zero.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        player: impl Into<String>,
        team: impl Into<String>,
        result: GameResult,
    ) -> Self {
        Self {
            date,
            player: player.into(),
            team: team.into(),
            opponent: UNKNOWN_TEAM.to_string(),
            result,
            ..Self::default()
        }
    }

    /// Team-level rows have no player attached.
    #[must_use]
    pub fn is_team_row(&self) -> bool {
        self.player.is_empty()
    }
}
