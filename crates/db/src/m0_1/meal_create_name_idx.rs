use sea_query::{Index, IndexDropStatement};

use crate::table::Meal;

pub struct Operation;

// Names only need to be unique among live meals, so a soft-deleted meal frees its name.
const UP_STATEMENT: &str =
    r#"CREATE UNIQUE INDEX "idx_meal_name" ON "meal" ("name") WHERE "deleted" = FALSE"#;

fn down_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_meal_name")
        .table(Meal::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        sqlx::query(UP_STATEMENT).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
