use crate::common::{database::count_rows, TestDb};
use sunnetna::{
    models::{
        categories::{Category, CreateCategoryRequest},
        recipes::{CreateRecipeRequest, SourceType, UpdateRecipeRequest},
    },
    services::{categories, recipes},
    DbConn, Error,
};
use tokio_test::assert_ok;

async fn seed_category(conn: &mut DbConn, name: &str) -> Category {
    categories::create_category(
        conn,
        CreateCategoryRequest {
            name: Some(name.to_string()),
        },
    )
    .await
    .unwrap()
}

fn telbina(category_id: i64) -> CreateRecipeRequest {
    CreateRecipeRequest {
        title: Some("Telbina".to_string()),
        instructions: Some("Skuhati ječmeno brašno u mlijeku, zasladiti medom.".to_string()),
        category_id: Some(category_id),
        short_description: Some("Kaša od ječma".to_string()),
        source_type: Some(SourceType::Hadis),
        source_reference: Some("Buhari".to_string()),
        image_url: None,
    }
}

#[tokio::test]
async fn test_create_recipe_embeds_category() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;
    let category = seed_category(&mut conn, "Med").await;

    let recipe = assert_ok!(recipes::create_recipe(&mut conn, telbina(category.id)).await);

    assert_eq!(recipe.title, "Telbina");
    assert_eq!(recipe.source_type, SourceType::Hadis);
    assert_eq!(recipe.category_id, category.id);
    assert_eq!(recipe.category, category);

    let fetched = recipes::get_recipe(&mut conn, recipe.id).await.unwrap();
    assert_eq!(fetched, recipe);
}

#[tokio::test]
async fn test_create_recipe_defaults_to_zdravo() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;
    let category = seed_category(&mut conn, "Med").await;

    let recipe = recipes::create_recipe(
        &mut conn,
        CreateRecipeRequest {
            source_type: None,
            ..telbina(category.id)
        },
    )
    .await
    .unwrap();

    assert_eq!(recipe.source_type, SourceType::Zdravo);
}

#[tokio::test]
async fn test_create_recipe_requires_title_instructions_and_category() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;
    let category = seed_category(&mut conn, "Med").await;

    let missing_title = CreateRecipeRequest {
        title: Some("  ".to_string()),
        ..telbina(category.id)
    };
    let missing_instructions = CreateRecipeRequest {
        instructions: None,
        ..telbina(category.id)
    };
    let missing_category = CreateRecipeRequest {
        category_id: None,
        ..telbina(category.id)
    };

    for request in [missing_title, missing_instructions, missing_category] {
        let result = recipes::create_recipe(&mut conn, request).await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }
    assert_eq!(count_rows(&mut conn, "recipes").await, 0);
}

#[tokio::test]
async fn test_create_recipe_unknown_category_rejected() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;

    let result = recipes::create_recipe(&mut conn, telbina(9999)).await;

    match result {
        Err(Error::Validation(message)) => {
            assert_eq!(message, "Neispravan categoryId (kategorija ne postoji).")
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
    assert_eq!(count_rows(&mut conn, "recipes").await, 0);
}

#[tokio::test]
async fn test_create_recipe_field_lengths() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;
    let category = seed_category(&mut conn, "Med").await;

    let long_reference = CreateRecipeRequest {
        source_reference: Some("r".repeat(121)),
        ..telbina(category.id)
    };
    let result = recipes::create_recipe(&mut conn, long_reference).await;
    assert!(matches!(result, Err(Error::Validation(_))));

    let long_image = CreateRecipeRequest {
        image_url: Some("i".repeat(301)),
        ..telbina(category.id)
    };
    let result = recipes::create_recipe(&mut conn, long_image).await;
    assert!(matches!(result, Err(Error::Validation(_))));

    let exact = CreateRecipeRequest {
        title: Some("t".repeat(140)),
        short_description: Some("s".repeat(300)),
        ..telbina(category.id)
    };
    assert_ok!(recipes::create_recipe(&mut conn, exact).await);
}

#[tokio::test]
async fn test_list_recipes_newest_first() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;
    let category = seed_category(&mut conn, "Med").await;

    for title in ["Prvi", "Drugi", "Treći"] {
        recipes::create_recipe(
            &mut conn,
            CreateRecipeRequest {
                title: Some(title.to_string()),
                ..telbina(category.id)
            },
        )
        .await
        .unwrap();
    }

    let titles: Vec<String> = recipes::list_recipes(&mut conn)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["Treći", "Drugi", "Prvi"]);
}

#[tokio::test]
async fn test_update_recipe_is_partial() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;
    let category = seed_category(&mut conn, "Med").await;
    let recipe = recipes::create_recipe(&mut conn, telbina(category.id)).await.unwrap();

    let updated = recipes::update_recipe(
        &mut conn,
        recipe.id,
        UpdateRecipeRequest {
            short_description: Some("Nova kratka priča".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.short_description.as_deref(), Some("Nova kratka priča"));
    assert_eq!(updated.title, recipe.title);
    assert_eq!(updated.instructions, recipe.instructions);
    assert_eq!(updated.source_type, recipe.source_type);
    assert_eq!(updated.source_reference, recipe.source_reference);
    assert_eq!(updated.category_id, recipe.category_id);
    assert_eq!(updated.created_at, recipe.created_at);
}

#[tokio::test]
async fn test_update_recipe_without_changes_keeps_row() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;
    let category = seed_category(&mut conn, "Med").await;
    let recipe = recipes::create_recipe(&mut conn, telbina(category.id)).await.unwrap();

    let updated = recipes::update_recipe(&mut conn, recipe.id, UpdateRecipeRequest::default())
        .await
        .unwrap();

    assert_eq!(updated, recipe);
}

#[tokio::test]
async fn test_update_recipe_rejects_blank_title_and_unknown_category() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;
    let category = seed_category(&mut conn, "Med").await;
    let recipe = recipes::create_recipe(&mut conn, telbina(category.id)).await.unwrap();

    let blank_title = UpdateRecipeRequest {
        title: Some(String::new()),
        ..Default::default()
    };
    let result = recipes::update_recipe(&mut conn, recipe.id, blank_title).await;
    assert!(matches!(result, Err(Error::Validation(_))));

    let unknown_category = UpdateRecipeRequest {
        category_id: Some(9999),
        ..Default::default()
    };
    let result = recipes::update_recipe(&mut conn, recipe.id, unknown_category).await;
    assert!(matches!(result, Err(Error::Validation(_))));

    let stored = recipes::get_recipe(&mut conn, recipe.id).await.unwrap();
    assert_eq!(stored, recipe);
}

#[tokio::test]
async fn test_update_missing_recipe_not_found() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;

    let result = recipes::update_recipe(&mut conn, 7, UpdateRecipeRequest::default()).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_delete_recipe() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.get_connection().await;
    let category = seed_category(&mut conn, "Med").await;
    let recipe = recipes::create_recipe(&mut conn, telbina(category.id)).await.unwrap();

    assert_ok!(recipes::delete_recipe(&mut conn, recipe.id).await);
    assert_eq!(count_rows(&mut conn, "recipes").await, 0);

    let result = recipes::delete_recipe(&mut conn, recipe.id).await;
    assert!(matches!(result, Err(Error::NotFound(_))));

    // The category survives its recipes
    assert_ok!(categories::get_category(&mut conn, category.id).await);
}
