use sea_query::{ColumnDef, Expr, Table, TableCreateStatement, TableDropStatement};

use crate::table::Meal;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Meal::Table)
        .col(
            ColumnDef::new(Meal::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Meal::Name).string().not_null())
        .col(ColumnDef::new(Meal::Cuisine).string().not_null())
        .col(ColumnDef::new(Meal::Price).double().not_null())
        .col(
            ColumnDef::new(Meal::Difficulty)
                .string()
                .not_null()
                .string_len(4),
        )
        .col(
            ColumnDef::new(Meal::Battles)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Meal::Wins)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Meal::Deleted)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Meal::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Meal::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

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
