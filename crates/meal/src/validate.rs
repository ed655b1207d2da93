//! Input rules shared by [`Meal::new`](crate::Meal::new) and
//! [`Command::create`](crate::Command::create).
//!
//! Typed callers use [`price`] and [`difficulty`] directly. Input that arrives
//! untyped (JSON documents, command-line strings) goes through [`candidate`],
//! which rejects values of the wrong type with the same error as out-of-range
//! values.

use std::str::FromStr;

use serde_json::Value;

use crate::{ArgumentError, Difficulty, Outcome, SortBy, ValidationError};

pub fn price(value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        return Ok(value);
    }

    Err(ValidationError::Price(format!("{value:?}")))
}

pub fn difficulty(value: &str) -> Result<Difficulty, ValidationError> {
    Difficulty::from_str(value).map_err(|_| ValidationError::Difficulty(value.to_owned()))
}

pub fn candidate(price: &Value, difficulty: &Value) -> Result<(f64, Difficulty), ValidationError> {
    let Some(amount) = price.as_f64() else {
        return Err(ValidationError::Price(render(price)));
    };
    let price = self::price(amount)?;

    let Some(level) = difficulty.as_str() else {
        return Err(ValidationError::Difficulty(render(difficulty)));
    };

    Ok((price, self::difficulty(level)?))
}

pub fn outcome(value: &str) -> Result<Outcome, ArgumentError> {
    Outcome::from_str(value).map_err(|_| ArgumentError::Outcome(value.to_owned()))
}

pub fn sort_by(value: &str) -> Result<SortBy, ArgumentError> {
    SortBy::from_str(value).map_err(|_| ArgumentError::SortBy(value.to_owned()))
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_owned(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_price_must_be_positive() {
        assert_eq!(price(1.0), Ok(1.0));
        assert_eq!(price(12.5), Ok(12.5));

        for value in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(price(value), Err(ValidationError::Price(_))));
        }
    }

    #[test]
    fn test_price_error_message() {
        let err = price(0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid price: 0.0. Price must be a positive number."
        );
    }

    #[test]
    fn test_difficulty_is_case_sensitive() {
        assert_eq!(difficulty("LOW"), Ok(Difficulty::Low));
        assert_eq!(difficulty("MED"), Ok(Difficulty::Med));
        assert_eq!(difficulty("HIGH"), Ok(Difficulty::High));

        for value in ["low", "Med", "EASY", ""] {
            assert_eq!(
                difficulty(value),
                Err(ValidationError::Difficulty(value.to_owned()))
            );
        }
    }

    #[test]
    fn test_candidate_rejects_wrong_types() {
        let err = candidate(&json!("invalid"), &json!("MED")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid price: invalid. Price must be a positive number."
        );

        let err = candidate(&json!(1.0), &json!(3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid difficulty level: 3. Must be 'LOW', 'MED', or 'HIGH'."
        );

        let err = candidate(&json!(1.0), &json!("EASY")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid difficulty level: EASY. Must be 'LOW', 'MED', or 'HIGH'."
        );

        assert!(candidate(&json!(true), &json!("LOW")).is_err());
        assert!(candidate(&json!(null), &json!("LOW")).is_err());
    }

    #[test]
    fn test_candidate_accepts_integer_price() {
        assert_eq!(
            candidate(&json!(3), &json!("HIGH")),
            Ok((3.0, Difficulty::High))
        );
    }

    #[test]
    fn test_outcome_and_sort_by() {
        assert_eq!(outcome("win"), Ok(Outcome::Win));
        assert_eq!(outcome("loss"), Ok(Outcome::Loss));
        assert_eq!(
            outcome("invalid").unwrap_err().to_string(),
            "Invalid result: invalid. Expected 'win' or 'loss'."
        );

        assert_eq!(sort_by("wins"), Ok(SortBy::Wins));
        assert_eq!(sort_by("win_pct"), Ok(SortBy::WinPct));
        assert_eq!(
            sort_by("param").unwrap_err().to_string(),
            "Invalid sort_by parameter: param"
        );
    }
}
