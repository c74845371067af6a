//! Constraint errors raised by the database itself, reached by calling the
//! query layer directly without the service-level checks in front of it.

use crate::common::{database::count_rows, TestDb};
use sunnetna::{
    models::{recipes::{RecipeFields, SourceType}, users::NewUser},
    queries::{categories, recipes, users},
    Error,
};

fn new_user(email: &str) -> NewUser {
    NewUser {
        full_name: "Amina Hodžić".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
    }
}

fn recipe_fields(category_id: i64) -> RecipeFields {
    RecipeFields {
        title: "Telbina".to_string(),
        short_description: None,
        instructions: "Kuhati.".to_string(),
        source_type: SourceType::Zdravo,
        source_reference: None,
        image_url: None,
        category_id,
    }
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;

    users::create_user(&mut conn, new_user("amina@mail.com")).await.unwrap();
    let result = users::create_user(&mut conn, new_user("amina@mail.com")).await;

    assert!(matches!(result, Err(Error::Conflict(_))), "got {:?}", result);
    assert_eq!(count_rows(&mut conn, "users").await, 1);
}

#[tokio::test]
async fn test_duplicate_category_name_is_conflict() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;

    categories::create_category(&mut conn, "Med").await.unwrap();
    let result = categories::create_category(&mut conn, "Med").await;

    assert!(matches!(result, Err(Error::Conflict(_))), "got {:?}", result);
    assert_eq!(count_rows(&mut conn, "categories").await, 1);
}

#[tokio::test]
async fn test_rename_onto_taken_name_is_conflict() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;

    categories::create_category(&mut conn, "Med").await.unwrap();
    let hurme = categories::create_category(&mut conn, "Hurme").await.unwrap();
    let result = categories::update_category(&mut conn, hurme.id, "Med").await;

    assert!(matches!(result, Err(Error::Conflict(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_rename_missing_category_returns_none() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;

    let result = categories::update_category(&mut conn, 404, "Med").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_deleting_referenced_category_is_conflict() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;

    let category = categories::create_category(&mut conn, "Med").await.unwrap();
    recipes::create_recipe(&mut conn, &recipe_fields(category.id)).await.unwrap();

    let result = categories::delete_category(&mut conn, category.id).await;

    assert!(matches!(result, Err(Error::Conflict(_))), "got {:?}", result);
    assert_eq!(count_rows(&mut conn, "categories").await, 1);
    assert_eq!(count_rows(&mut conn, "recipes").await, 1);
}

#[tokio::test]
async fn test_recipe_with_missing_category_is_validation_error() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;

    let result = recipes::create_recipe(&mut conn, &recipe_fields(9999)).await;

    match result {
        Err(Error::Validation(message)) => {
            assert_eq!(message, "Neispravan categoryId (kategorija ne postoji).")
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
    assert_eq!(count_rows(&mut conn, "recipes").await, 0);
}

#[tokio::test]
async fn test_moving_recipe_to_missing_category_is_validation_error() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;

    let category = categories::create_category(&mut conn, "Med").await.unwrap();
    let id = recipes::create_recipe(&mut conn, &recipe_fields(category.id)).await.unwrap();

    let result = recipes::update_recipe(&mut conn, id, &recipe_fields(9999)).await;

    assert!(matches!(result, Err(Error::Validation(_))), "got {:?}", result);
    assert_eq!(recipes::count_recipes_by_category(&mut conn, category.id).await.unwrap(), 1);
}
