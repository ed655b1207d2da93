use std::fmt;

/// Identifies the meal an operation was aimed at.
#[derive(Debug, Clone, PartialEq)]
pub enum MealRef {
    Id(i64),
    Name(String),
}

impl fmt::Display for MealRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealRef::Id(id) => write!(f, "ID {id}"),
            MealRef::Name(name) => write!(f, "name {name}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Absence {
    Missing,
    Deleted,
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Absence::Missing => f.write_str("not found"),
            Absence::Deleted => f.write_str("has been deleted"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid price: {0}. Price must be a positive number.")]
    Price(String),

    #[error("Invalid difficulty level: {0}. Must be 'LOW', 'MED', or 'HIGH'.")]
    Difficulty(String),

    #[error("Invalid {0}: expected a string.")]
    Text(&'static str),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgumentError {
    #[error("Invalid result: {0}. Expected 'win' or 'loss'.")]
    Outcome(String),

    #[error("Invalid sort_by parameter: {0}")]
    SortBy(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Meal with name '{name}' already exists")]
    Duplicate { name: String },

    #[error("Meal with {meal} {absence}")]
    NotFound { meal: MealRef, absence: Absence },

    #[error("Meal with ID {id} has been deleted")]
    AlreadyDeleted { id: i64 },

    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn missing(meal: MealRef) -> Self {
        Self::NotFound {
            meal,
            absence: Absence::Missing,
        }
    }

    pub(crate) fn deleted(meal: MealRef) -> Self {
        Self::NotFound {
            meal,
            absence: Absence::Deleted,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
