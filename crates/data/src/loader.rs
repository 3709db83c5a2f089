//! Box-score CSV loading.
//!
//! Column names come from a [`SchemaMapping`]; each row is normalized into a
//! typed [`GameRecord`] exactly once. Row-level defects are coerced (stats to
//! zero, missing codes to `"unknown"`) and rows without a usable date are
//! skipped and counted. Only source-level failures abort the load.

use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use hoopstats_core::{
    parse_minutes, GameRecord, GameResult, GameSource, SchemaMapping, UNKNOWN_TEAM,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::DataError;

/// Outcome counters for one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Data rows encountered (header excluded).
    pub rows_read: u64,
    /// Rows normalized into records.
    pub rows_loaded: u64,
    /// Rows dropped for an unusable date or an unreadable record.
    pub rows_skipped: u64,
}

/// Header positions resolved from a [`SchemaMapping`].
#[derive(Debug)]
struct ColumnIndex {
    date: usize,
    player: usize,
    team: usize,
    result: usize,
    opponent: Option<usize>,
    minutes: Option<usize>,
    field_goals_made: Option<usize>,
    field_goals_attempted: Option<usize>,
    three_pointers_made: Option<usize>,
    three_pointers_attempted: Option<usize>,
    free_throws_made: Option<usize>,
    free_throws_attempted: Option<usize>,
    rebounds: Option<usize>,
    assists: Option<usize>,
    steals: Option<usize>,
    blocks: Option<usize>,
    turnovers: Option<usize>,
    personal_fouls: Option<usize>,
    points: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, schema: &SchemaMapping) -> Result<Self, DataError> {
        let names: Vec<&str> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();
        let find = |column: &str| names.iter().position(|h| *h == column);

        let required = |field: &'static str, column: &str| {
            find(column).ok_or_else(|| DataError::MissingColumn {
                field,
                column: column.to_string(),
            })
        };
        let optional = |field: &'static str, column: &str| {
            let index = find(column);
            if index.is_none() {
                warn!(field, column, "Column not in header, values default to zero");
            }
            index
        };

        Ok(Self {
            date: required("date", &schema.date)?,
            player: required("player", &schema.player)?,
            team: required("team", &schema.team)?,
            result: required("result", &schema.result)?,
            opponent: optional("opponent", &schema.opponent),
            minutes: optional("minutes", &schema.minutes),
            field_goals_made: optional("field_goals_made", &schema.field_goals_made),
            field_goals_attempted: optional("field_goals_attempted", &schema.field_goals_attempted),
            three_pointers_made: optional("three_pointers_made", &schema.three_pointers_made),
            three_pointers_attempted: optional(
                "three_pointers_attempted",
                &schema.three_pointers_attempted,
            ),
            free_throws_made: optional("free_throws_made", &schema.free_throws_made),
            free_throws_attempted: optional("free_throws_attempted", &schema.free_throws_attempted),
            rebounds: optional("rebounds", &schema.rebounds),
            assists: optional("assists", &schema.assists),
            steals: optional("steals", &schema.steals),
            blocks: optional("blocks", &schema.blocks),
            turnovers: optional("turnovers", &schema.turnovers),
            personal_fouls: optional("personal_fouls", &schema.personal_fouls),
            points: optional("points", &schema.points),
        })
    }

    fn build(&self, row: &StringRecord) -> Option<GameRecord> {
        let date = parse_date(row.get(self.date).unwrap_or_default())?;
        let stat = |index: Option<usize>| index.and_then(|i| row.get(i)).map_or(0.0, parse_stat);
        let code = |index: Option<usize>| {
            index
                .and_then(|i| row.get(i))
                .filter(|v| !v.is_empty())
                .map_or_else(|| UNKNOWN_TEAM.to_string(), str::to_string)
        };

        Some(GameRecord {
            date,
            player: row.get(self.player).unwrap_or_default().to_string(),
            team: code(Some(self.team)),
            opponent: code(self.opponent),
            result: GameResult::parse(row.get(self.result).unwrap_or_default()),
            minutes: self
                .minutes
                .and_then(|i| row.get(i))
                .map_or(0.0, parse_minutes),
            field_goals_made: stat(self.field_goals_made),
            field_goals_attempted: stat(self.field_goals_attempted),
            three_pointers_made: stat(self.three_pointers_made),
            three_pointers_attempted: stat(self.three_pointers_attempted),
            free_throws_made: stat(self.free_throws_made),
            free_throws_attempted: stat(self.free_throws_attempted),
            rebounds: stat(self.rebounds),
            assists: stat(self.assists),
            steals: stat(self.steals),
            blocks: stat(self.blocks),
            turnovers: stat(self.turnovers),
            personal_fouls: stat(self.personal_fouls),
            points: stat(self.points),
        })
    }
}

/// Parses the calendar date from the first ten characters (`YYYY-MM-DD`), so
/// timestamps such as `2025-02-10T19:30:00` keep their day.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn parse_stat(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Loads every row from a CSV reader.
///
/// # Errors
/// Returns an error if the header lacks a required column or the underlying
/// reader fails.
pub fn load_games_from_reader<R: Read>(
    reader: R,
    schema: &SchemaMapping,
) -> Result<(Vec<GameRecord>, LoadReport), DataError> {
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers, schema)?;
    debug!(?columns, "Resolved CSV columns");

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for result in csv_reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                report.rows_read += 1;
                report.rows_skipped += 1;
                warn!(row = report.rows_read, error = %e, "Skipping unreadable row");
                continue;
            }
        };

        if row.iter().all(str::is_empty) {
            continue;
        }
        report.rows_read += 1;

        match columns.build(&row) {
            Some(record) => {
                records.push(record);
                report.rows_loaded += 1;
            }
            None => report.rows_skipped += 1,
        }
    }

    if report.rows_skipped > 0 {
        warn!(
            skipped = report.rows_skipped,
            "Skipped rows without a usable date"
        );
    }

    Ok((records, report))
}

/// Loads every row from a CSV file.
///
/// # Errors
/// Returns an error if the file cannot be opened, the header lacks a required
/// column, or reading fails.
pub fn load_games(
    path: &Path,
    schema: &SchemaMapping,
) -> Result<(Vec<GameRecord>, LoadReport), DataError> {
    let file = std::fs::File::open(path)?;
    let (records, report) = load_games_from_reader(file, schema)?;

    info!(
        path = %path.display(),
        rows = report.rows_read,
        loaded = report.rows_loaded,
        skipped = report.rows_skipped,
        "Loaded box-score data"
    );

    Ok((records, report))
}

/// Box-score CSV on disk, read through a column mapping.
#[derive(Debug, Clone)]
pub struct CsvGameSource {
    path: PathBuf,
    schema: SchemaMapping,
    name: String,
}

impl CsvGameSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, schema: SchemaMapping) -> Self {
        let path = path.into();
        let name = format!("csv:{}", path.display());
        Self { path, schema, name }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file on the blocking pool and returns the counters alongside
    /// the records.
    ///
    /// # Errors
    /// Returns an error if the load fails or the blocking task is cancelled.
    pub async fn load_with_report(&self) -> Result<(Vec<GameRecord>, LoadReport), DataError> {
        let path = self.path.clone();
        let schema = self.schema.clone();
        tokio::task::spawn_blocking(move || load_games(&path, &schema)).await?
    }
}

#[async_trait]
impl GameSource for CsvGameSource {
    async fn load(&self) -> anyhow::Result<Vec<GameRecord>> {
        let (records, _report) = self.load_with_report().await?;
        Ok(records)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
