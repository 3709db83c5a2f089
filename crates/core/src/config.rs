use serde::{Deserialize, Serialize};

use crate::trade::{default_trade_catalog, TradeEvent};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub data: DataConfig,
    pub trades: Vec<TradeEvent>,
    pub mvp: MvpWeights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Season box-score CSV.
    pub path: String,
    pub schema: SchemaMapping,
}

/// CSV header names for each canonical column.
///
/// The defaults describe the box-score export (`Tm`, `Player`, `Res`, ...).
/// Other exports are adapted by overriding individual names; the loader never
/// guesses between layouts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SchemaMapping {
    pub date: String,
    pub player: String,
    pub team: String,
    pub opponent: String,
    pub result: String,
    pub minutes: String,
    pub field_goals_made: String,
    pub field_goals_attempted: String,
    pub three_pointers_made: String,
    pub three_pointers_attempted: String,
    pub free_throws_made: String,
    pub free_throws_attempted: String,
    pub rebounds: String,
    pub assists: String,
    pub steals: String,
    pub blocks: String,
    pub turnovers: String,
    pub personal_fouls: String,
    pub points: String,
}

impl SchemaMapping {
    /// Box-score layout of the season export.
    #[must_use]
    pub fn box_score() -> Self {
        Self {
            date: "Data".to_string(),
            player: "Player".to_string(),
            team: "Tm".to_string(),
            opponent: "Opp".to_string(),
            result: "Res".to_string(),
            minutes: "MP".to_string(),
            field_goals_made: "FG".to_string(),
            field_goals_attempted: "FGA".to_string(),
            three_pointers_made: "3P".to_string(),
            three_pointers_attempted: "3PA".to_string(),
            free_throws_made: "FT".to_string(),
            free_throws_attempted: "FTA".to_string(),
            rebounds: "TRB".to_string(),
            assists: "AST".to_string(),
            steals: "STL".to_string(),
            blocks: "BLK".to_string(),
            turnovers: "TOV".to_string(),
            personal_fouls: "PF".to_string(),
            points: "PTS".to_string(),
        }
    }
}

impl Default for SchemaMapping {
    fn default() -> Self {
        Self::box_score()
    }
}

/// Weights for the heuristic MVP score.
///
/// `score = (pts*points + reb*rebounds + ast*assists + (stl+blk)*stocks - tov*turnovers)
///          * ((1 - team_success) + team_success * team_win_pct)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MvpWeights {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub stocks: f64,
    pub turnovers: f64,
    /// Share of the score scaled by team win percentage, in `[0, 1]`.
    pub team_success: f64,
    /// Players with fewer games are left off the leaderboard.
    pub min_games: usize,
}

impl Default for MvpWeights {
    fn default() -> Self {
        Self {
            points: 1.0,
            rebounds: 1.2,
            assists: 1.5,
            stocks: 2.0,
            turnovers: 1.0,
            team_success: 0.3,
            min_games: 10,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig {
                path: "data/database_24_25.csv".to_string(),
                schema: SchemaMapping::box_score(),
            },
            trades: default_trade_catalog(),
            mvp: MvpWeights::default(),
        }
    }
}

impl AppConfig {
    /// Looks up a configured trade by id, ignoring ASCII case.
    #[must_use]
    pub fn trade(&self, id: &str) -> Option<&TradeEvent> {
        self.trades.iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }
}
