use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::{Difficulty, ValidationError, validate};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub battles: u32,
    pub wins: u32,
    pub deleted: bool,
}

impl Meal {
    /// Builds a fresh meal with no battle history, applying the same price and
    /// difficulty rules as [`Command::create`](crate::Command::create).
    pub fn new(
        id: i64,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: name.into(),
            cuisine: cuisine.into(),
            price: validate::price(price)?,
            difficulty: validate::difficulty(difficulty)?,
            battles: 0,
            wins: 0,
            deleted: false,
        })
    }

    /// Share of battles won, in `[0, 1]`. Undefined until the meal has fought.
    pub fn win_ratio(&self) -> Option<f64> {
        if self.battles == 0 {
            return None;
        }

        Some(f64::from(self.wins) / f64::from(self.battles))
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct MealRow {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: sqlx::types::Text<Difficulty>,
    pub battles: u32,
    pub wins: u32,
    pub deleted: bool,
}

impl From<MealRow> for Meal {
    fn from(row: MealRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            cuisine: row.cuisine,
            price: row.price,
            difficulty: row.difficulty.0,
            battles: row.battles,
            wins: row.wins,
            deleted: row.deleted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub battles: u32,
    pub wins: u32,
    /// Percentage in `[0, 100]`.
    pub win_pct: f64,
}

#[derive(Debug, FromRow)]
pub(crate) struct LeaderboardRow {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: sqlx::types::Text<Difficulty>,
    pub battles: u32,
    pub wins: u32,
    pub win_pct: f64,
}

impl From<LeaderboardRow> for LeaderboardEntry {
    fn from(row: LeaderboardRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            cuisine: row.cuisine,
            price: row.price,
            difficulty: row.difficulty.0,
            battles: row.battles,
            wins: row.wins,
            win_pct: row.win_pct * 100.0,
        }
    }
}
