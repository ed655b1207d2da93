use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

/// Connection options with the PRAGMAs every connection of the pool gets
///
/// - WAL mode enables concurrent reads and writes
/// - busy_timeout reduces SQLITE_BUSY errors
/// - synchronous=NORMAL is safe with WAL
/// - foreign_keys must be explicitly enabled (disabled by default)
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(5000))
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .log_statements(LevelFilter::Debug))
}

/// Pool options running the remaining PRAGMAs on each new connection
///
/// - cache_size increases memory cache
/// - temp_store=memory speeds up temporary table operations
fn pool_options(max_connections: u32) -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("PRAGMA cache_size = -20000")
                    .execute(&mut *conn)
                    .await?;
                sqlx::query("PRAGMA temp_store = memory")
                    .execute(&mut *conn)
                    .await?;

                Ok(())
            })
        })
}

/// Create a pool for an existing database
///
/// Connections are borrowed per operation and returned on every exit path,
/// nothing holds one across calls.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = pool_options(max_connections)
        .connect_with(connect_options(database_url)?)
        .await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

/// Same as [`create_pool`] but creates the database file when missing
pub async fn create_pool_if_missing(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool> {
    let pool = pool_options(max_connections)
        .connect_with(connect_options(database_url)?.create_if_missing(true))
        .await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}
