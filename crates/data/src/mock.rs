//! Seeded mock season for trade analysis.
//!
//! Produces box-score rows for every team in a set of trades between two
//! dates, including lines for each tracked player on their new team. Useful
//! when the real season export is unavailable.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Days, NaiveDate};
use hoopstats_core::{GameRecord, GameResult, TradeEvent};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Every NBA franchise code.
pub const NBA_TEAMS: [&str; 30] = [
    "ATL", "BOS", "BKN", "CHA", "CHI", "CLE", "DAL", "DEN", "DET", "GSW", "HOU", "IND", "LAC",
    "LAL", "MEM", "MIA", "MIL", "MIN", "NOP", "NYK", "OKC", "ORL", "PHI", "PHX", "POR", "SAC",
    "SAS", "TOR", "UTA", "WAS",
];

/// Chance that a team plays on a given step.
const PLAY_PROBABILITY: f64 = 0.4;

pub struct MockSeasonGenerator {
    rng: ChaCha8Rng,
}

impl MockSeasonGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generates rows from `start` to `end` inclusive.
    ///
    /// The calendar advances two or three days per step. On each step every
    /// involved team plays with probability 0.4 against a random opponent and
    /// gets one team-level row plus a line for each player assigned to it.
    pub fn generate(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
        trades: &[TradeEvent],
    ) -> Vec<GameRecord> {
        let teams: BTreeSet<&str> = trades
            .iter()
            .flat_map(|t| t.teams.iter().map(String::as_str))
            .collect();

        // Later trades win if a player moves twice.
        let mut rosters: BTreeMap<&str, &str> = BTreeMap::new();
        for trade in trades {
            for assignment in &trade.assignments {
                rosters.insert(&assignment.player, &assignment.destination);
            }
        }

        let mut games = Vec::new();
        let mut current = start;

        while current <= end {
            for team in &teams {
                if self.rng.gen_bool(1.0 - PLAY_PROBABILITY) {
                    continue;
                }

                let opponent = self.pick_opponent(team);
                let result = if self.rng.gen_bool(0.5) {
                    GameResult::Win
                } else {
                    GameResult::Loss
                };

                let mut team_row = GameRecord::new(current, "", *team, result);
                team_row.opponent = opponent.to_string();
                games.push(team_row);

                for (player, _) in rosters.iter().filter(|(_, dest)| *dest == team) {
                    games.push(self.player_line(current, player, team, opponent, result));
                }
            }

            let step = self.rng.gen_range(2..=3);
            match current.checked_add_days(Days::new(step)) {
                Some(next) => current = next,
                None => break,
            }
        }

        info!(
            rows = games.len(),
            teams = teams.len(),
            players = rosters.len(),
            "Generated mock season"
        );

        games
    }

    fn pick_opponent(&mut self, team: &str) -> &'static str {
        let others: Vec<&'static str> = NBA_TEAMS.iter().copied().filter(|t| *t != team).collect();
        others[self.rng.gen_range(0..others.len())]
    }

    fn player_line(
        &mut self,
        date: NaiveDate,
        player: &str,
        team: &str,
        opponent: &str,
        result: GameResult,
    ) -> GameRecord {
        let rng = &mut self.rng;
        let made: u32 = rng.gen_range(5..=15);
        let attempted: u32 = rng.gen_range(10..=25);
        let bonus: u32 = rng.gen_range(0..=5);

        GameRecord {
            date,
            player: player.to_string(),
            team: team.to_string(),
            opponent: opponent.to_string(),
            result,
            minutes: f64::from(rng.gen_range(20u32..=38)),
            field_goals_made: f64::from(made),
            field_goals_attempted: f64::from(attempted),
            three_pointers_made: f64::from(rng.gen_range(0u32..=5)),
            three_pointers_attempted: f64::from(rng.gen_range(1u32..=10)),
            free_throws_made: f64::from(rng.gen_range(0u32..=8)),
            free_throws_attempted: f64::from(rng.gen_range(0u32..=10)),
            rebounds: f64::from(rng.gen_range(2u32..=12)),
            assists: f64::from(rng.gen_range(1u32..=8)),
            steals: f64::from(rng.gen_range(0u32..=3)),
            blocks: f64::from(rng.gen_range(0u32..=3)),
            turnovers: f64::from(rng.gen_range(0u32..=5)),
            personal_fouls: f64::from(rng.gen_range(0u32..=6)),
            points: (f64::from(made) * 2.1 + f64::from(bonus)).floor(),
        }
    }
}
