//! Category handlers
//!
//! Reads are public; writes sit behind the JWT middleware.

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{Error, Result},
    extract::{JsonBody, Path},
    models::categories::{Category, CreateCategoryRequest, UpdateCategoryRequest},
    services::categories,
    state::AppState,
};

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let categories = categories::list_categories(&mut conn).await?;
    Ok(Json(categories))
}

/// POST /api/categories
///
/// # HTTP Status Codes
/// - `201 CREATED`: The created category
/// - `400 BAD_REQUEST`: Missing or too long name
/// - `409 CONFLICT`: Name already used
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>)> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let category = categories::create_category(&mut conn, request).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/{id}
///
/// # HTTP Status Codes
/// - `200 OK`: The updated category
/// - `404 NOT_FOUND`: Unknown id
/// - `409 CONFLICT`: Name already used by another category
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(request): JsonBody<UpdateCategoryRequest>,
) -> Result<Json<Category>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let category = categories::update_category(&mut conn, id, request).await?;
    Ok(Json(category))
}

/// DELETE /api/categories/{id}
///
/// # HTTP Status Codes
/// - `200 OK`: `{message}`
/// - `404 NOT_FOUND`: Unknown id
/// - `409 CONFLICT`: Recipes still reference the category
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    categories::delete_category(&mut conn, id).await?;
    Ok(Json(serde_json::json!({ "message": "Kategorija obrisana." })))
}
