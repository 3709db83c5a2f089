use clap::{Parser, Subcommand};

mod commands;

use commands::{
    FoulsArgs, GlobalArgs, MockDataArgs, MonthlyPointsArgs, MonthlyRecordArgs, ScoringArgs,
    TradeImpactArgs,
};

#[derive(Parser)]
#[command(name = "hoopstats")]
#[command(about = "NBA season analytics: trade impact, fouls, monthly records, MVP race")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Post-trade player averages and team win percentage for one trade
    TradeImpact(TradeImpactArgs),
    /// List the configured trades
    Trades,
    /// Average fouls against win rate, with an optional per-team drill-down
    Fouls(FoulsArgs),
    /// Wins and losses per team for one month
    MonthlyRecord(MonthlyRecordArgs),
    /// Total points per month for one team
    MonthlyPoints(MonthlyPointsArgs),
    /// Player scoring lines and the MVP leaderboard
    Scoring(ScoringArgs),
    /// Generate a seeded mock season CSV for the configured trades
    MockData(MockDataArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::TradeImpact(args) => {
            commands::run_trade_impact(args, &cli.global).await?;
        }
        Commands::Trades => {
            commands::run_trades(&cli.global)?;
        }
        Commands::Fouls(args) => {
            commands::run_fouls(args, &cli.global).await?;
        }
        Commands::MonthlyRecord(args) => {
            commands::run_monthly_record(args, &cli.global).await?;
        }
        Commands::MonthlyPoints(args) => {
            commands::run_monthly_points(args, &cli.global).await?;
        }
        Commands::Scoring(args) => {
            commands::run_scoring(args, &cli.global).await?;
        }
        Commands::MockData(args) => {
            commands::run_mock_data(&args, &cli.global)?;
        }
    }

    Ok(())
}
