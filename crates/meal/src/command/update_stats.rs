use mealmax_db::table::Meal;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Error, MealRef, Outcome, validate};

impl super::Command {
    /// Records one battle for a live meal. A missing or deleted meal is
    /// reported before the outcome itself is checked.
    pub async fn update_stats(&self, id: i64, outcome: impl AsRef<str>) -> crate::Result<()> {
        let outcome = match validate::outcome(outcome.as_ref()) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.ensure_live(id).await?;
                return Err(err.into());
            }
        };

        let mut statement = Query::update()
            .table(Meal::Table)
            .value(Meal::Battles, Expr::col(Meal::Battles).add(1))
            .and_where(Expr::col(Meal::Id).eq(id))
            .and_where(Expr::col(Meal::Deleted).eq(false))
            .to_owned();

        if outcome == Outcome::Win {
            statement.value(Meal::Wins, Expr::col(Meal::Wins).add(1));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            return match super::load_deleted(&self.0, id).await? {
                None => Err(Error::missing(MealRef::Id(id))),
                Some(_) => Err(Error::deleted(MealRef::Id(id))),
            };
        }

        tracing::info!(id, %outcome, "meal stats updated");

        Ok(())
    }

    async fn ensure_live(&self, id: i64) -> crate::Result<()> {
        match super::load_deleted(&self.0, id).await? {
            None => Err(Error::missing(MealRef::Id(id))),
            Some(true) => Err(Error::deleted(MealRef::Id(id))),
            Some(false) => Ok(()),
        }
    }
}
