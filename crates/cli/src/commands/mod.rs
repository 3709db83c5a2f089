//! CLI commands for season analytics.

pub mod fouls;
pub mod mock_data;
pub mod monthly;
pub mod scoring;
pub mod session;
pub mod trade_impact;

pub use fouls::{run_fouls, FoulsArgs};
pub use mock_data::{run_mock_data, MockDataArgs};
pub use monthly::{run_monthly_points, run_monthly_record, MonthlyPointsArgs, MonthlyRecordArgs};
pub use scoring::{run_scoring, ScoringArgs};
pub use session::GlobalArgs;
pub use trade_impact::{run_trade_impact, run_trades, TradeImpactArgs};
