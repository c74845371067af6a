use crate::DbConn;
use crate::{
    error::{Error, Result},
    models::categories::{Category, CreateCategoryRequest, UpdateCategoryRequest, CATEGORY_NAME_MAX_LEN},
    queries::{
        categories::{self, CATEGORY_EXISTS_MESSAGE, CATEGORY_IN_USE_MESSAGE},
        recipes,
    },
    validation::{non_blank, validate_max_len},
};

pub(crate) const CATEGORY_NOT_FOUND_MESSAGE: &str = "Kategorija nije pronađena.";

/// Lists all categories, name ascending
pub async fn list_categories(conn: &mut DbConn) -> Result<Vec<Category>> {
    categories::list_categories(conn).await
}

/// Creates a category with a unique, non-empty name
pub async fn create_category(conn: &mut DbConn, request: CreateCategoryRequest) -> Result<Category> {
    let Some(name) = non_blank(request.name.as_deref()) else {
        return Err(Error::Validation("Naziv kategorije je obavezan.".to_string()));
    };
    validate_max_len("name", name, CATEGORY_NAME_MAX_LEN)?;

    if categories::get_category_by_name(conn, name).await?.is_some() {
        return Err(Error::Conflict(CATEGORY_EXISTS_MESSAGE.to_string()));
    }

    let category = categories::create_category(conn, name).await?;
    tracing::info!(category_id = category.id, "Category created");
    Ok(category)
}

/// Renames a category; an omitted name keeps the stored one
pub async fn update_category(
    conn: &mut DbConn,
    id: i64,
    request: UpdateCategoryRequest,
) -> Result<Category> {
    let existing = get_category(conn, id).await?;

    let Some(requested) = request.name else {
        return Ok(existing);
    };
    let Some(name) = non_blank(Some(requested.as_str())) else {
        return Err(Error::Validation("Naziv kategorije ne može biti prazan.".to_string()));
    };
    validate_max_len("name", name, CATEGORY_NAME_MAX_LEN)?;

    if name == existing.name {
        return Ok(existing);
    }
    if categories::get_category_by_name(conn, name).await?.is_some() {
        return Err(Error::Conflict(CATEGORY_EXISTS_MESSAGE.to_string()));
    }

    // The row can vanish between the lookup above and this write
    let category = categories::update_category(conn, id, name)
        .await?
        .ok_or_else(|| Error::NotFound(CATEGORY_NOT_FOUND_MESSAGE.to_string()))?;
    tracing::info!(category_id = category.id, "Category renamed");
    Ok(category)
}

/// Deletes a category that no recipe references
pub async fn delete_category(conn: &mut DbConn, id: i64) -> Result<()> {
    get_category(conn, id).await?;

    // ON DELETE RESTRICT backs this up at the storage layer
    let in_use = recipes::count_recipes_by_category(conn, id).await?;
    if in_use > 0 {
        tracing::info!(category_id = id, recipes = in_use, "Category delete blocked");
        return Err(Error::Conflict(CATEGORY_IN_USE_MESSAGE.to_string()));
    }

    categories::delete_category(conn, id).await?;
    tracing::info!(category_id = id, "Category deleted");
    Ok(())
}

/// Gets a category by id, failing with `NotFound` when absent
pub async fn get_category(conn: &mut DbConn, id: i64) -> Result<Category> {
    categories::get_category_by_id(conn, id)
        .await?
        .ok_or_else(|| Error::NotFound(CATEGORY_NOT_FOUND_MESSAGE.to_string()))
}
