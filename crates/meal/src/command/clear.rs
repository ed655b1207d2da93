use mealmax_db::table::Meal;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Physically removes every meal, deleted or not. Administrative reset
    /// only, this bypasses the soft-delete lifecycle.
    pub async fn clear(&self) -> crate::Result<u64> {
        let statement = Query::delete().from_table(Meal::Table).to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let removed = sqlx::query_with(&sql, values)
            .execute(&self.0)
            .await?
            .rows_affected();

        tracing::warn!(removed, "meal catalog cleared");

        Ok(removed)
    }
}
