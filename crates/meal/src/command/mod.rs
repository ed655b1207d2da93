mod clear;
mod create;
mod delete;
mod update_stats;

pub use create::*;

use mealmax_db::table::Meal;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

/// Write side of the catalog. Writes are single conditional statements so
/// concurrent callers only ever wait on the database write lock.
#[derive(Clone)]
pub struct Command(pub SqlitePool);

/// Reads the soft-delete flag of a meal, `None` when no row has that id.
async fn load_deleted(pool: &SqlitePool, id: i64) -> crate::Result<Option<bool>> {
    let statement = sea_query::Query::select()
        .column(Meal::Deleted)
        .from(Meal::Table)
        .and_where(Expr::col(Meal::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_scalar_with::<_, bool, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}
