use mealmax_db::table::Meal;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, ValidationError, validate};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMealInput {
    #[serde(alias = "meal")]
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: String,
}

impl CreateMealInput {
    /// Reads an input from an untyped JSON object. A `price` that is not a
    /// number or a `difficulty` that is not a string fails validation.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let name = value
            .get("name")
            .or_else(|| value.get("meal"))
            .and_then(Value::as_str)
            .ok_or(ValidationError::Text("name"))?;

        let cuisine = value
            .get("cuisine")
            .and_then(Value::as_str)
            .ok_or(ValidationError::Text("cuisine"))?;

        let (price, difficulty) = validate::candidate(
            value.get("price").unwrap_or(&Value::Null),
            value.get("difficulty").unwrap_or(&Value::Null),
        )?;

        Ok(Self {
            name: name.to_owned(),
            cuisine: cuisine.to_owned(),
            price,
            difficulty: difficulty.to_string(),
        })
    }
}

impl super::Command {
    /// Inserts a new meal and returns the id assigned by the store.
    pub async fn create(&self, input: CreateMealInput) -> crate::Result<i64> {
        let price = validate::price(input.price)?;
        let difficulty = validate::difficulty(&input.difficulty)?;

        let statement = Query::insert()
            .into_table(Meal::Table)
            .columns([Meal::Name, Meal::Cuisine, Meal::Price, Meal::Difficulty])
            .values_panic([
                input.name.to_owned().into(),
                input.cuisine.into(),
                price.into(),
                difficulty.to_string().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        match sqlx::query_with(&sql, values).execute(&self.0).await {
            Ok(result) => {
                let id = result.last_insert_rowid();
                tracing::info!(id, name = %input.name, "meal created");

                Ok(id)
            }
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                tracing::warn!(name = %input.name, "meal name already taken");

                Err(Error::Duplicate { name: input.name })
            }
            Err(err) => {
                tracing::error!(name = %input.name, "failed to create meal: {err}");

                Err(err.into())
            }
        }
    }
}
