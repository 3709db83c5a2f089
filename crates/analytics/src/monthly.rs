//! Month-by-month team aggregates for the championship race.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::Datelike;
use hoopstats_core::{GameRecord, GameResult};
use serde::{Deserialize, Serialize};

use crate::team_games::group_team_games;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar month ordered by the NBA season (October first, September last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SeasonMonth(u32);

impl SeasonMonth {
    /// `month` is 1-based (January = 1).
    #[must_use]
    pub fn new(month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self(month))
    }

    #[must_use]
    pub fn number(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }

    fn season_index(self) -> u32 {
        (self.0 + 2) % 12
    }
}

impl Ord for SeasonMonth {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.season_index().cmp(&other.season_index())
    }
}

impl PartialOrd for SeasonMonth {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<u32> for SeasonMonth {
    type Error = String;

    fn try_from(month: u32) -> std::result::Result<Self, Self::Error> {
        Self::new(month).ok_or_else(|| format!("month out of range: {month}"))
    }
}

impl From<SeasonMonth> for u32 {
    fn from(month: SeasonMonth) -> Self {
        month.0
    }
}

impl FromStr for SeasonMonth {
    type Err = anyhow::Error;

    /// Accepts `2`, `02`, `feb` or `February`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(number) = s.parse::<u32>() {
            return Self::new(number).ok_or_else(|| anyhow!("Invalid month: '{}'", s));
        }

        let lower = s.to_lowercase();
        MONTH_NAMES
            .iter()
            .position(|name| {
                let name = name.to_lowercase();
                name == lower || (lower.len() >= 3 && name.starts_with(&lower))
            })
            .and_then(|i| Self::new(i as u32 + 1))
            .ok_or_else(|| anyhow!("Invalid month: '{}'. Use 1-12 or a month name", s))
    }
}

impl fmt::Display for SeasonMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub team: String,
    pub month: SeasonMonth,
    pub wins: u32,
    pub losses: u32,
}

impl MonthlyRecord {
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoints {
    pub team: String,
    pub month: SeasonMonth,
    pub points: f64,
}

fn month_of(date: chrono::NaiveDate) -> SeasonMonth {
    SeasonMonth(date.month())
}

/// Wins and losses per team per month, counting each team-date once.
///
/// Sorted by team, then season month. The outcome of a team-date comes from
/// its first row with a win or loss; games where no row has one count toward
/// neither column.
#[must_use]
pub fn monthly_records(records: &[GameRecord]) -> Vec<MonthlyRecord> {
    let mut tally: BTreeMap<(&str, SeasonMonth), (u32, u32)> = BTreeMap::new();
    for ((team, date), game) in group_team_games(records) {
        let entry = tally.entry((team, month_of(date))).or_default();
        match game.result {
            GameResult::Win => entry.0 += 1,
            GameResult::Loss => entry.1 += 1,
            GameResult::Unknown => {}
        }
    }

    tally
        .into_iter()
        .map(|((team, month), (wins, losses))| MonthlyRecord {
            team: team.to_string(),
            month,
            wins,
            losses,
        })
        .collect()
}

/// One record per team for `month`, zero-filled for teams idle that month.
#[must_use]
pub fn records_for_month(records: &[MonthlyRecord], month: SeasonMonth) -> Vec<MonthlyRecord> {
    let teams: BTreeSet<&str> = records.iter().map(|r| r.team.as_str()).collect();
    teams
        .into_iter()
        .map(|team| {
            records
                .iter()
                .find(|r| r.team == team && r.month == month)
                .cloned()
                .unwrap_or_else(|| MonthlyRecord {
                    team: team.to_string(),
                    month,
                    wins: 0,
                    losses: 0,
                })
        })
        .collect()
}

/// Months present in the data, in season order.
#[must_use]
pub fn months_played(records: &[GameRecord]) -> Vec<SeasonMonth> {
    let months: BTreeSet<SeasonMonth> = records.iter().map(|r| month_of(r.date)).collect();
    months.into_iter().collect()
}

/// Total points per team for every month present in the data.
///
/// The grid is complete: a team without games in a month gets a zero entry.
/// Sorted by team, then season month.
#[must_use]
pub fn monthly_points(records: &[GameRecord]) -> Vec<MonthlyPoints> {
    let mut totals: BTreeMap<(&str, SeasonMonth), f64> = BTreeMap::new();
    for ((team, date), game) in group_team_games(records) {
        *totals.entry((team, month_of(date))).or_default() += game.points;
    }

    let teams: BTreeSet<&str> = totals.keys().map(|(team, _)| *team).collect();
    let months = months_played(records);

    teams
        .into_iter()
        .flat_map(|team| months.iter().map(move |&month| (team, month)))
        .map(|(team, month)| MonthlyPoints {
            team: team.to_string(),
            month,
            points: totals.get(&(team, month)).copied().unwrap_or(0.0),
        })
        .collect()
}

/// One team's monthly totals, in season order.
#[must_use]
pub fn points_for_team(points: &[MonthlyPoints], team: &str) -> Vec<MonthlyPoints> {
    points.iter().filter(|p| p.team == team).cloned().collect()
}
