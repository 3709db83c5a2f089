use anyhow::{Context, Result};
use csv::Writer;
use hoopstats_core::{GameRecord, SchemaMapping};
use std::fs::File;
use std::io::Write;

pub struct CsvStorage;

impl CsvStorage {
    /// Writes box-score records to a CSV file readable by the loader with the
    /// default box-score mapping.
    ///
    /// Format: Player,Tm,Opp,Res,MP,FG,FGA,3P,3PA,FT,FTA,TRB,AST,STL,BLK,TOV,PF,PTS,Data
    ///
    /// # Errors
    /// Returns error if file cannot be created or writing fails
    pub fn write_games(path: &str, records: &[GameRecord]) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("Failed to create CSV file: {}", path))?;
        Self::write_games_to(file, records)
            .with_context(|| format!("Failed to write CSV file: {}", path))
    }

    /// Writes box-score records to any writer.
    ///
    /// # Errors
    /// Returns error if writing fails
    pub fn write_games_to<W: Write>(out: W, records: &[GameRecord]) -> Result<()> {
        let schema = SchemaMapping::box_score();
        let mut writer = Writer::from_writer(out);

        writer.write_record([
            &schema.player,
            &schema.team,
            &schema.opponent,
            &schema.result,
            &schema.minutes,
            &schema.field_goals_made,
            &schema.field_goals_attempted,
            &schema.three_pointers_made,
            &schema.three_pointers_attempted,
            &schema.free_throws_made,
            &schema.free_throws_attempted,
            &schema.rebounds,
            &schema.assists,
            &schema.steals,
            &schema.blocks,
            &schema.turnovers,
            &schema.personal_fouls,
            &schema.points,
            &schema.date,
        ])?;

        // Chronological, stable for same-day rows
        let mut sorted: Vec<&GameRecord> = records.iter().collect();
        sorted.sort_by_key(|r| r.date);

        for record in sorted {
            writer.write_record(&[
                record.player.clone(),
                record.team.clone(),
                record.opponent.clone(),
                record.result.as_marker().to_string(),
                record.minutes.to_string(),
                record.field_goals_made.to_string(),
                record.field_goals_attempted.to_string(),
                record.three_pointers_made.to_string(),
                record.three_pointers_attempted.to_string(),
                record.free_throws_made.to_string(),
                record.free_throws_attempted.to_string(),
                record.rebounds.to_string(),
                record.assists.to_string(),
                record.steals.to_string(),
                record.blocks.to_string(),
                record.turnovers.to_string(),
                record.personal_fouls.to_string(),
                record.points.to_string(),
                record.date.format("%Y-%m-%d").to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}
