use mealmax_meal::{CreateMealInput, Difficulty, Error, ValidationError};
use serde_json::json;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_create() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let id = state
        .command
        .create(CreateMealInput {
            name: "Pizza".to_owned(),
            cuisine: "Italian".to_owned(),
            price: 12.5,
            difficulty: "MED".to_owned(),
        })
        .await?;

    let meal = state.query.find(id).await?;
    assert_eq!(meal.id, id);
    assert_eq!(meal.name, "Pizza");
    assert_eq!(meal.cuisine, "Italian");
    assert_eq!(meal.price, 12.5);
    assert_eq!(meal.difficulty, Difficulty::Med);
    assert_eq!(meal.battles, 0);
    assert_eq!(meal.wins, 0);
    assert!(!meal.deleted);

    Ok(())
}

#[tokio::test]
async fn test_create_invalid_price_never_touches_storage() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    for price in [0.0, -3.0, f64::NAN] {
        let err = state
            .command
            .create(helpers::input("Pizza", price, "MED"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::Price(_))
        ));
    }

    let err = state
        .command
        .create(helpers::input("Pizza", 0.0, "MED"))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid price: 0.0. Price must be a positive number."
    );

    assert!(state.query.list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_create_invalid_difficulty() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let err = state
        .command
        .create(helpers::input("Pizza", 1.0, "EASY"))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid difficulty level: EASY. Must be 'LOW', 'MED', or 'HIGH'."
    );

    let err = CreateMealInput::from_value(&json!({
        "meal": "Pizza",
        "cuisine": "Italian",
        "price": 1.0,
        "difficulty": 3,
    }))
    .unwrap_err();
    assert_eq!(err, ValidationError::Difficulty("3".to_owned()));

    let err = CreateMealInput::from_value(&json!({
        "meal": "Pizza",
        "cuisine": "Italian",
        "price": "invalid",
        "difficulty": "MED",
    }))
    .unwrap_err();
    assert_eq!(err, ValidationError::Price("invalid".to_owned()));

    assert!(state.query.list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_create_from_value() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let input = CreateMealInput::from_value(&json!({
        "meal": "Ramen",
        "cuisine": "Japanese",
        "price": 9,
        "difficulty": "HIGH",
    }))?;
    let id = state.command.create(input).await?;

    let meal = state.query.find_by_name("Ramen").await?;
    assert_eq!(meal.id, id);
    assert_eq!(meal.price, 9.0);
    assert_eq!(meal.difficulty, Difficulty::High);

    Ok(())
}

#[tokio::test]
async fn test_create_duplicate() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    helpers::create_meal(&state.command, "meal").await?;

    let err = state
        .command
        .create(helpers::input("meal", 1.0, "LOW"))
        .await
        .unwrap_err();
    assert!(matches!(&err, Error::Duplicate { name } if name == "meal"));
    assert_eq!(err.to_string(), "Meal with name 'meal' already exists");

    assert_eq!(state.query.list().await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_create_reuses_name_of_deleted_meal() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let old = helpers::create_meal(&state.command, "Tacos").await?;
    state.command.delete(old).await?;

    let new = helpers::create_meal(&state.command, "Tacos").await?;
    assert_ne!(old, new);

    let meal = state.query.find_by_name("Tacos").await?;
    assert_eq!(meal.id, new);

    Ok(())
}
