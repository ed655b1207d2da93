use mealmax_db::table::Meal as MealTable;
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Error, Meal, MealRef, meal::MealRow};

impl super::Query {
    pub async fn find(&self, id: i64) -> crate::Result<Meal> {
        let statement = sea_query::Query::select()
            .columns(super::MEAL_COLUMNS)
            .from(MealTable::Table)
            .and_where(Expr::col(MealTable::Id).eq(id))
            .limit(1)
            .to_owned();

        self.fetch_live(statement, MealRef::Id(id)).await
    }

    /// Looks a meal up by name. A soft-deleted meal may share its name with a
    /// live one, so the live row wins.
    pub async fn find_by_name(&self, name: impl Into<String>) -> crate::Result<Meal> {
        let name = name.into();
        let statement = sea_query::Query::select()
            .columns(super::MEAL_COLUMNS)
            .from(MealTable::Table)
            .and_where(Expr::col(MealTable::Name).eq(name.to_owned()))
            .order_by(MealTable::Deleted, Order::Asc)
            .order_by(MealTable::Id, Order::Desc)
            .limit(1)
            .to_owned();

        self.fetch_live(statement, MealRef::Name(name)).await
    }

    /// Every live meal, oldest first.
    pub async fn list(&self) -> crate::Result<Vec<Meal>> {
        let statement = sea_query::Query::select()
            .columns(super::MEAL_COLUMNS)
            .from(MealTable::Table)
            .and_where(Expr::col(MealTable::Deleted).eq(false))
            .order_by(MealTable::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, MealRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Meal::from).collect())
    }

    async fn fetch_live(&self, statement: SelectStatement, meal: MealRef) -> crate::Result<Meal> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, MealRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        match row {
            None => {
                tracing::debug!(%meal, "meal not found");
                Err(Error::missing(meal))
            }
            Some(row) if row.deleted => {
                tracing::debug!(%meal, "meal found but deleted");
                Err(Error::deleted(meal))
            }
            Some(row) => Ok(row.into()),
        }
    }
}
