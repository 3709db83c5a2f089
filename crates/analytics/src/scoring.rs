//! Player scoring lines and the MVP leaderboard.

use std::collections::{BTreeMap, HashMap};

use hoopstats_core::{GameRecord, MvpWeights};
use serde::{Deserialize, Serialize};

use crate::team_games::group_team_games;

/// Season per-game averages for one player on one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerScoringLine {
    pub player: String,
    pub team: String,
    pub games: usize,
    pub avg_minutes: f64,
    pub avg_points: f64,
    pub avg_rebounds: f64,
    pub avg_assists: f64,
    pub avg_steals: f64,
    pub avg_blocks: f64,
    pub avg_turnovers: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MvpCandidate {
    pub line: PlayerScoringLine,
    /// Fraction of team games won, in `[0, 1]`.
    pub team_win_percentage: f64,
    pub score: f64,
}

#[derive(Default)]
struct Totals {
    games: usize,
    minutes: f64,
    points: f64,
    rebounds: f64,
    assists: f64,
    steals: f64,
    blocks: f64,
    turnovers: f64,
}

/// Per-game averages for every player, keyed by player and team.
///
/// A player traded mid-season gets one line per team. Sorted by player, then
/// team. Team-level rows are ignored.
#[must_use]
pub fn player_scoring_lines(records: &[GameRecord]) -> Vec<PlayerScoringLine> {
    let mut totals: BTreeMap<(&str, &str), Totals> = BTreeMap::new();
    for record in records.iter().filter(|r| !r.is_team_row()) {
        let t = totals
            .entry((record.player.as_str(), record.team.as_str()))
            .or_default();
        t.games += 1;
        t.minutes += record.minutes;
        t.points += record.points;
        t.rebounds += record.rebounds;
        t.assists += record.assists;
        t.steals += record.steals;
        t.blocks += record.blocks;
        t.turnovers += record.turnovers;
    }

    totals
        .into_iter()
        .map(|((player, team), t)| {
            let n = t.games as f64;
            PlayerScoringLine {
                player: player.to_string(),
                team: team.to_string(),
                games: t.games,
                avg_minutes: t.minutes / n,
                avg_points: t.points / n,
                avg_rebounds: t.rebounds / n,
                avg_assists: t.assists / n,
                avg_steals: t.steals / n,
                avg_blocks: t.blocks / n,
                avg_turnovers: t.turnovers / n,
            }
        })
        .collect()
}

/// Heuristic MVP score for one line.
#[must_use]
pub fn mvp_score(line: &PlayerScoringLine, team_win_percentage: f64, weights: &MvpWeights) -> f64 {
    let production = line.avg_points * weights.points
        + line.avg_rebounds * weights.rebounds
        + line.avg_assists * weights.assists
        + (line.avg_steals + line.avg_blocks) * weights.stocks
        - line.avg_turnovers * weights.turnovers;

    let team_share = weights.team_success.clamp(0.0, 1.0);
    production * ((1.0 - team_share) + team_share * team_win_percentage)
}

/// Top `limit` MVP candidates, best first.
///
/// Lines with fewer than `weights.min_games` games are excluded. Ties sort by
/// player name.
#[must_use]
pub fn mvp_leaderboard(
    records: &[GameRecord],
    weights: &MvpWeights,
    limit: usize,
) -> Vec<MvpCandidate> {
    let mut team_record: HashMap<&str, (u32, u32)> = HashMap::new();
    for ((team, _), game) in group_team_games(records) {
        let entry = team_record.entry(team).or_default();
        entry.1 += 1;
        if game.result.is_win() {
            entry.0 += 1;
        }
    }

    let mut candidates: Vec<MvpCandidate> = player_scoring_lines(records)
        .into_iter()
        .filter(|line| line.games >= weights.min_games)
        .map(|line| {
            let team_win_percentage = team_record
                .get(line.team.as_str())
                .filter(|(_, games)| *games > 0)
                .map_or(0.0, |(wins, games)| f64::from(*wins) / f64::from(*games));
            let score = mvp_score(&line, team_win_percentage, weights);
            MvpCandidate {
                line,
                team_win_percentage,
                score,
            }
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.line.player.cmp(&b.line.player))
    });
    candidates.truncate(limit);
    candidates
}
