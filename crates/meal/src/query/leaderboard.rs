use mealmax_db::table::Meal;
use sea_query::{Alias, Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{LeaderboardEntry, SortBy, meal::LeaderboardRow, validate};

impl super::Query {
    /// Ranks live meals that have fought at least once, best first. Ties keep
    /// creation order.
    pub async fn leaderboard(
        &self,
        sort_by: impl AsRef<str>,
    ) -> crate::Result<Vec<LeaderboardEntry>> {
        let sort_by = validate::sort_by(sort_by.as_ref())?;
        let win_pct = Alias::new("win_pct");

        let mut statement = sea_query::Query::select()
            .columns([
                Meal::Id,
                Meal::Name,
                Meal::Cuisine,
                Meal::Price,
                Meal::Difficulty,
                Meal::Battles,
                Meal::Wins,
            ])
            .expr_as(
                Expr::col(Meal::Wins).mul(1.0).div(Expr::col(Meal::Battles)),
                win_pct.clone(),
            )
            .from(Meal::Table)
            .and_where(Expr::col(Meal::Deleted).eq(false))
            .and_where(Expr::col(Meal::Battles).gt(0))
            .to_owned();

        match sort_by {
            SortBy::Wins => statement.order_by(Meal::Wins, Order::Desc),
            SortBy::WinPct => statement.order_by(win_pct, Order::Desc),
        };

        statement.order_by(Meal::Id, Order::Asc);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, LeaderboardRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        tracing::debug!(%sort_by, total = rows.len(), "leaderboard loaded");

        Ok(rows.into_iter().map(LeaderboardEntry::from).collect())
    }
}
