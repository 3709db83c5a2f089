pub mod config;
pub mod config_loader;
pub mod game;
pub mod minutes;
pub mod trade;
pub mod traits;

pub use config::{AppConfig, DataConfig, MvpWeights, SchemaMapping};
pub use config_loader::ConfigLoader;
pub use game::{GameRecord, GameResult, UNKNOWN_TEAM};
pub use minutes::parse_minutes;
pub use trade::{default_trade_catalog, PlayerAssignment, TradeEvent};
pub use traits::GameSource;
