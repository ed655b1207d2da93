mod meal_create_leaderboard_idx;
mod meal_create_name_idx;
mod meal_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "main",
    "m0_1",
    vec_box![],
    vec_box![
        meal_create_table::Operation,
        meal_create_name_idx::Operation,
        meal_create_leaderboard_idx::Operation,
    ]
);
