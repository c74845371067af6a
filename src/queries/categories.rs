use chrono::Utc;

use crate::{
    error::{is_foreign_key_violation, is_unique_violation, Error, Result},
    models::categories::Category,
    DbConn,
};

pub(crate) const CATEGORY_EXISTS_MESSAGE: &str = "Kategorija sa ovim nazivom već postoji.";
pub(crate) const CATEGORY_IN_USE_MESSAGE: &str =
    "Kategorija se ne može obrisati jer postoje recepti koji je koriste.";

fn map_write_error(e: sqlx::Error) -> Error {
    if is_unique_violation(&e) {
        Error::Conflict(CATEGORY_EXISTS_MESSAGE.to_string())
    } else {
        Error::Sqlx(e)
    }
}

/// Creates a new category in the database.
pub async fn create_category(conn: &mut DbConn, name: &str) -> Result<Category> {
    let now = Utc::now();
    let category = sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO categories (name, created_at, updated_at)
        VALUES (?, ?, ?)
        RETURNING id, name, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(now)
    .bind(now)
    .fetch_one(conn)
    .await
    .map_err(map_write_error)?;

    Ok(category)
}

/// Gets a single category by its ID. The category may not exist.
pub async fn get_category_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM categories
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(category)
}

/// Gets a single category by its exact name. The category may not exist.
pub async fn get_category_by_name(conn: &mut DbConn, name: &str) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM categories
        WHERE name = ?
        "#,
    )
    .bind(name)
    .fetch_optional(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(category)
}

/// Lists all categories ordered by name.
pub async fn list_categories(conn: &mut DbConn) -> Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM categories
        ORDER BY name ASC, id ASC
        "#,
    )
    .fetch_all(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(categories)
}

/// Renames a category. Returns `None` when no row has that ID.
pub async fn update_category(conn: &mut DbConn, id: i64, name: &str) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        r#"
        UPDATE categories
        SET name = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, name, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(map_write_error)?;

    Ok(category)
}

/// Deletes a category by its ID, returning the number of rows removed.
///
/// A restrict violation raised by the database is reported as a conflict.
pub async fn delete_category(conn: &mut DbConn, id: i64) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM categories
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(conn)
    .await
    .map_err(|e| {
        if is_foreign_key_violation(&e) {
            Error::Conflict(CATEGORY_IN_USE_MESSAGE.to_string())
        } else {
            Error::Sqlx(e)
        }
    })?
    .rows_affected();

    Ok(rows_affected)
}
