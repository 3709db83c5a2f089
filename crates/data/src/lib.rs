//! Data loading and generation for box-score analytics.
//!
//! This crate provides:
//! - CSV loading through a configurable column mapping
//! - CSV writing in the canonical box-score layout
//! - A seeded mock season generator for trade analysis

pub mod csv_storage;
pub mod error;
pub mod loader;
pub mod mock;

pub use csv_storage::CsvStorage;
pub use error::DataError;
pub use loader::{load_games, load_games_from_reader, CsvGameSource, LoadReport};
pub use mock::{MockSeasonGenerator, NBA_TEAMS};
