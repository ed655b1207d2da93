use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Meal {
    Table,
    Id,
    Name,
    Cuisine,
    Price,
    Difficulty,
    Battles,
    Wins,
    Deleted,
    CreatedAt,
}
