use std::{path::PathBuf, str::FromStr, time::Duration};

use mealmax_meal::{Command, CreateMealInput, Query};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use sqlx_migrator::{Migrate, Plan};

pub struct State {
    pub command: Command,
    pub query: Query,
    #[allow(dead_code)]
    pub pool: SqlitePool,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));
    let pool = SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(opts)
        .await?;
    let mut conn = pool.acquire().await?;
    mealmax_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State {
        command: Command(pool.clone()),
        query: Query(pool.clone()),
        pool,
    })
}

#[allow(dead_code)]
pub fn input(name: impl Into<String>, price: f64, difficulty: &str) -> CreateMealInput {
    CreateMealInput {
        name: name.into(),
        cuisine: "Cuisine".to_owned(),
        price,
        difficulty: difficulty.to_owned(),
    }
}

#[allow(dead_code)]
pub async fn create_meal(cmd: &Command, name: impl Into<String>) -> anyhow::Result<i64> {
    Ok(cmd.create(input(name, 10.0, "MED")).await?)
}

/// Creates a meal and plays the given outcomes against it.
#[allow(dead_code)]
pub async fn create_meal_with_record(
    cmd: &Command,
    name: impl Into<String>,
    wins: u32,
    losses: u32,
) -> anyhow::Result<i64> {
    let id = create_meal(cmd, name).await?;
    for _ in 0..wins {
        cmd.update_stats(id, "win").await?;
    }
    for _ in 0..losses {
        cmd.update_stats(id, "loss").await?;
    }

    Ok(id)
}
