//! Configuration and season loading shared by every command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use hoopstats_analytics::{ChartSlot, ChartSpec};
use hoopstats_core::config_loader::DEFAULT_CONFIG_PATH;
use hoopstats_core::{AppConfig, ConfigLoader, GameRecord, GameSource};
use hoopstats_data::CsvGameSource;

/// Options accepted by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Season box-score CSV (overrides `data.path` from the config)
    #[arg(long, global = true, env = "HOOPSTATS_DATA_FILE")]
    pub data: Option<String>,
}

impl GlobalArgs {
    /// Loads configuration and applies the `--data` override.
    ///
    /// # Errors
    /// Returns an error if the configuration cannot be parsed.
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = ConfigLoader::load_from(&self.config)
            .with_context(|| format!("Failed to load config: {}", self.config))?;
        if let Some(data) = &self.data {
            config.data.path.clone_from(data);
        }
        Ok(config)
    }
}

/// Configuration plus the loaded season.
pub struct Session {
    pub config: AppConfig,
    pub games: Vec<GameRecord>,
}

impl Session {
    /// Loads the configuration and then the season CSV it points at.
    ///
    /// # Errors
    /// Returns an error if the configuration or the data file cannot be loaded.
    pub async fn open(global: &GlobalArgs) -> Result<Self> {
        let config = global.load_config()?;
        let source = CsvGameSource::new(&config.data.path, config.data.schema.clone());

        let (games, report) = match source.load_with_report().await {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::error!(
                    path = %source.path().display(),
                    error = %e,
                    "Failed to load season data"
                );
                return Err(e).with_context(|| {
                    format!("Failed to load season data: {}", source.path().display())
                });
            }
        };

        tracing::info!(
            source = source.name(),
            games = games.len(),
            skipped = report.rows_skipped,
            "Season ready"
        );

        Ok(Self { config, games })
    }
}

/// Output file `name` inside the `--chart-out` directory.
#[must_use]
pub fn chart_path(dir: &Path, name: &str) -> PathBuf {
    let file: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    dir.join(format!("{file}.json"))
}

/// Renders a chart into `slot` and writes it to `dir/name.json`.
///
/// # Errors
/// Returns an error if the directory cannot be created or the file written.
pub fn emit_chart(
    slot: &mut ChartSlot,
    dir: &Path,
    name: &str,
    build: impl FnOnce() -> ChartSpec,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create chart directory: {}", dir.display()))?;

    let path = chart_path(dir, name);
    slot.render(build).spec().write_json(&path)?;
    tracing::info!(path = %path.display(), "Wrote chart");
    Ok(path)
}
