//! Trade events.
//!
//! A trade is configuration, not data: it names the date, the teams involved,
//! and where each tracked player landed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A player moved to `destination` by a trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAssignment {
    pub player: String,
    pub destination: String,
}

impl PlayerAssignment {
    #[must_use]
    pub fn new(player: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            destination: destination.into(),
        }
    }
}

/// A trade between two or more teams on a given date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TradeEvent {
    /// Short identifier such as `LAL-DAL`.
    pub id: String,
    /// First day the new rosters count.
    pub date: NaiveDate,
    pub teams: Vec<String>,
    /// Tracked players in display order.
    pub assignments: Vec<PlayerAssignment>,
}

impl TradeEvent {
    /// Players that landed on `team`.
    pub fn acquired_by<'a>(&'a self, team: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.assignments
            .iter()
            .filter(move |a| a.destination == team)
            .map(|a| a.player.as_str())
    }
}

fn trade(id: &str, date: (i32, u32, u32), teams: [&str; 2], moves: &[(&str, &str)]) -> TradeEvent {
    TradeEvent {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        teams: teams.iter().map(|t| (*t).to_string()).collect(),
        assignments: moves
            .iter()
            .map(|(player, team)| PlayerAssignment::new(*player, *team))
            .collect(),
    }
}

/// The 2025 trade-deadline deals shipped with the tool.
#[must_use]
pub fn default_trade_catalog() -> Vec<TradeEvent> {
    vec![
        trade(
            "LAL-DAL",
            (2025, 2, 1),
            ["LAL", "DAL"],
            &[("Luka Dončić", "LAL"), ("Anthony Davis", "DAL")],
        ),
        trade(
            "MIL-WAS",
            (2025, 2, 5),
            ["MIL", "WAS"],
            &[("Kyle Kuzma", "MIL"), ("Khris Middleton", "WAS")],
        ),
        trade(
            "TOR-NOP",
            (2025, 2, 6),
            ["TOR", "NOP"],
            &[("Brandon Ingram", "TOR"), ("Bruce Brown", "NOP")],
        ),
        trade(
            "CLE-ATL",
            (2025, 2, 6),
            ["CLE", "ATL"],
            &[("De'Andre Hunter", "CLE"), ("Caris LeVert", "ATL")],
        ),
    ]
}
