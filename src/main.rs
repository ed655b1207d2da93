use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// mealmax - meal battle catalog
#[derive(Parser)]
#[command(name = "mealmax")]
#[command(about = "Catalog of battling meals and their leaderboard", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage meals
    Meal {
        #[command(subcommand)]
        command: cli::meal::MealCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealmax::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealmax::observability::init_observability(
        "mealmax",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Migrate => mealmax::migrate::migrate(&config).await,
        Commands::Reset => mealmax::migrate::reset(&config).await,
        Commands::Meal { command } => cli::meal::run(config, command).await,
    }
}
