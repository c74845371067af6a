use chrono::Utc;

use crate::{
    error::{is_foreign_key_violation, Error, Result},
    models::recipes::{Recipe, RecipeFields, RecipeRow},
    DbConn,
};

pub(crate) const INVALID_CATEGORY_MESSAGE: &str = "Neispravan categoryId (kategorija ne postoji).";

const SELECT_RECIPE_WITH_CATEGORY: &str = r#"
    SELECT r.id, r.title, r.short_description, r.instructions, r.source_type,
           r.source_reference, r.image_url, r.category_id, r.created_at, r.updated_at,
           c.name AS category_name,
           c.created_at AS category_created_at,
           c.updated_at AS category_updated_at
    FROM recipes r
    INNER JOIN categories c ON c.id = r.category_id
"#;

fn map_write_error(e: sqlx::Error) -> Error {
    // The category was deleted between the service check and the write
    if is_foreign_key_violation(&e) {
        Error::Validation(INVALID_CATEGORY_MESSAGE.to_string())
    } else {
        Error::Sqlx(e)
    }
}

/// Inserts a recipe and returns its ID.
pub async fn create_recipe(conn: &mut DbConn, fields: &RecipeFields) -> Result<i64> {
    let now = Utc::now();
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO recipes (
            title, short_description, instructions, source_type,
            source_reference, image_url, category_id, created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&fields.title)
    .bind(&fields.short_description)
    .bind(&fields.instructions)
    .bind(fields.source_type.as_ref())
    .bind(&fields.source_reference)
    .bind(&fields.image_url)
    .bind(fields.category_id)
    .bind(now)
    .bind(now)
    .fetch_one(conn)
    .await
    .map_err(map_write_error)?;

    Ok(id)
}

/// Gets a single recipe with its category. The recipe may not exist.
pub async fn get_recipe_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Recipe>> {
    let sql = format!("{SELECT_RECIPE_WITH_CATEGORY} WHERE r.id = ?");
    let row = sqlx::query_as::<_, RecipeRow>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(row.map(Recipe::from))
}

/// Lists all recipes with their categories, newest first.
pub async fn list_recipes(conn: &mut DbConn) -> Result<Vec<Recipe>> {
    let sql = format!("{SELECT_RECIPE_WITH_CATEGORY} ORDER BY r.created_at DESC, r.id DESC");
    let rows = sqlx::query_as::<_, RecipeRow>(&sql)
        .fetch_all(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(rows.into_iter().map(Recipe::from).collect())
}

/// Overwrites every editable column of a recipe. Expects the recipe to exist.
pub async fn update_recipe(conn: &mut DbConn, id: i64, fields: &RecipeFields) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        UPDATE recipes
        SET title = ?, short_description = ?, instructions = ?, source_type = ?,
            source_reference = ?, image_url = ?, category_id = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&fields.title)
    .bind(&fields.short_description)
    .bind(&fields.instructions)
    .bind(fields.source_type.as_ref())
    .bind(&fields.source_reference)
    .bind(&fields.image_url)
    .bind(fields.category_id)
    .bind(Utc::now())
    .bind(id)
    .execute(conn)
    .await
    .map_err(map_write_error)?
    .rows_affected();

    Ok(rows_affected)
}

/// Deletes a recipe by its ID, returning the number of rows removed.
pub async fn delete_recipe(conn: &mut DbConn, id: i64) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM recipes
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(conn)
    .await
    .map_err(Error::Sqlx)?
    .rows_affected();

    Ok(rows_affected)
}

/// Number of recipes that reference the given category.
pub async fn count_recipes_by_category(conn: &mut DbConn, category_id: i64) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM recipes
        WHERE category_id = ?
        "#,
    )
    .bind(category_id)
    .fetch_one(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(count)
}
