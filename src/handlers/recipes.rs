use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{Error, Result},
    extract::{JsonBody, Path},
    models::recipes::{CreateRecipeRequest, Recipe, UpdateRecipeRequest},
    services::recipes,
    state::AppState,
};

/// GET /api/recipes
///
/// All recipes with their `Category` embedded, newest first.
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let recipes = recipes::list_recipes(&mut conn).await?;
    Ok(Json(recipes))
}

/// GET /api/recipes/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Recipe>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let recipe = recipes::get_recipe(&mut conn, id).await?;
    Ok(Json(recipe))
}

/// POST /api/recipes
///
/// # Request Body
/// - `title`, `instructions`, `categoryId`: required
/// - `shortDescription`, `sourceType`, `sourceReference`, `imageUrl`: optional
///
/// # HTTP Status Codes
/// - `201 CREATED`: The created recipe
/// - `400 BAD_REQUEST`: Missing fields or unknown category
pub async fn create_recipe(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<Recipe>)> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let recipe = recipes::create_recipe(&mut conn, request).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// PUT /api/recipes/{id}
///
/// Any subset of the create fields; omitted fields are left unchanged.
///
/// # HTTP Status Codes
/// - `200 OK`: The updated recipe
/// - `400 BAD_REQUEST`: Unknown category or blank required field
/// - `404 NOT_FOUND`: Unknown id
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(request): JsonBody<UpdateRecipeRequest>,
) -> Result<Json<Recipe>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let recipe = recipes::update_recipe(&mut conn, id, request).await?;
    Ok(Json(recipe))
}

/// DELETE /api/recipes/{id}
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    recipes::delete_recipe(&mut conn, id).await?;
    Ok(Json(serde_json::json!({ "message": "Recept obrisan." })))
}
