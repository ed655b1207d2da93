mod find;
mod leaderboard;

use mealmax_db::table::Meal;
use sqlx::SqlitePool;

/// Read side of the catalog. Soft-deleted meals never come back as live
/// records from any of these reads.
#[derive(Clone)]
pub struct Query(pub SqlitePool);

const MEAL_COLUMNS: [Meal; 8] = [
    Meal::Id,
    Meal::Name,
    Meal::Cuisine,
    Meal::Price,
    Meal::Difficulty,
    Meal::Battles,
    Meal::Wins,
    Meal::Deleted,
];
