use mealmax_db::table::Meal;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Error, MealRef};

impl super::Command {
    /// Soft-deletes a meal. The row stays in the table with its flag set and
    /// is skipped by every read afterwards.
    pub async fn delete(&self, id: i64) -> crate::Result<()> {
        let statement = Query::update()
            .table(Meal::Table)
            .value(Meal::Deleted, true)
            .and_where(Expr::col(Meal::Id).eq(id))
            .and_where(Expr::col(Meal::Deleted).eq(false))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() > 0 {
            tracing::info!(id, "meal deleted");

            return Ok(());
        }

        // Nothing matched: either the id is unknown or the flag was already set.
        match super::load_deleted(&self.0, id).await? {
            None => {
                tracing::info!(id, "cannot delete unknown meal");
                Err(Error::missing(MealRef::Id(id)))
            }
            Some(_) => {
                tracing::info!(id, "meal already deleted");
                Err(Error::AlreadyDeleted { id })
            }
        }
    }
}
