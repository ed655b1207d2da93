use std::path::PathBuf;

use clap::Subcommand;
use mealmax_meal::{Command, CreateMealInput, Query, SortBy, ValidationError};
use serde::Serialize;

#[derive(Subcommand)]
pub enum MealCommand {
    /// Add a meal to the catalog
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        cuisine: String,
        #[arg(long)]
        price: String,
        /// LOW, MED or HIGH
        #[arg(long)]
        difficulty: String,
    },
    /// Soft-delete a meal
    Delete { id: i64 },
    /// Show a meal by id
    Get { id: i64 },
    /// Show a meal by name
    Find { name: String },
    /// List every live meal
    List,
    /// Record a battle outcome (win or loss) for a meal
    Battle { id: i64, outcome: String },
    /// Rank meals that have fought at least once
    Leaderboard {
        /// wins or win_pct
        #[arg(long, default_value_t = SortBy::default().to_string())]
        sort_by: String,
    },
    /// Create meals from a JSON array of objects
    Import { path: PathBuf },
    /// Remove every meal, including soft-deleted ones
    Clear,
}

pub async fn run(config: mealmax::Config, command: MealCommand) -> anyhow::Result<()> {
    let pool =
        mealmax::create_pool(&config.database.url, config.database.max_connections).await?;
    let cmd = Command(pool.clone());
    let query = Query(pool.clone());

    let result = execute(&cmd, &query, command).await;

    pool.close().await;

    result
}

async fn execute(cmd: &Command, query: &Query, command: MealCommand) -> anyhow::Result<()> {
    match command {
        MealCommand::Create {
            name,
            cuisine,
            price,
            difficulty,
        } => {
            let price = price
                .parse::<f64>()
                .map_err(|_| ValidationError::Price(price.to_owned()))?;
            let id = cmd
                .create(CreateMealInput {
                    name,
                    cuisine,
                    price,
                    difficulty,
                })
                .await?;
            print_json(&query.find(id).await?)
        }
        MealCommand::Delete { id } => Ok(cmd.delete(id).await?),
        MealCommand::Get { id } => print_json(&query.find(id).await?),
        MealCommand::Find { name } => print_json(&query.find_by_name(name).await?),
        MealCommand::List => print_json(&query.list().await?),
        MealCommand::Battle { id, outcome } => {
            cmd.update_stats(id, outcome).await?;
            print_json(&query.find(id).await?)
        }
        MealCommand::Leaderboard { sort_by } => print_json(&query.leaderboard(sort_by).await?),
        MealCommand::Import { path } => import(cmd, path).await,
        MealCommand::Clear => {
            let removed = cmd.clear().await?;
            tracing::info!("{removed} meals removed");
            Ok(())
        }
    }
}

/// Creates each entry of the file, skipping the ones that are rejected.
async fn import(cmd: &Command, path: PathBuf) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)?;
    let entries: Vec<serde_json::Value> = serde_json::from_str(&content)?;

    let mut created = 0;
    for (index, entry) in entries.iter().enumerate() {
        let input = match CreateMealInput::from_value(entry) {
            Ok(input) => input,
            Err(err) => {
                tracing::error!(index, "skipping entry: {err}");
                continue;
            }
        };

        match cmd.create(input).await {
            Ok(_) => created += 1,
            Err(err) => tracing::error!(index, "skipping entry: {err}"),
        }
    }

    tracing::info!(
        "{created} of {} meals imported from {}",
        entries.len(),
        path.display()
    );

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}
