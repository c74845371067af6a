use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{Error, Result},
    extract::JsonBody,
    models::users::{AuthResult, LoginUser, RegisterUser},
    services::users,
    state::AppState,
};

fn auth_body(message: &str, result: AuthResult) -> serde_json::Value {
    serde_json::json!({
        "message": message,
        "token": result.token,
        "user": result.user,
    })
}

/// POST /api/auth/register
///
/// # Request Body
/// - `fullName`, `email`, `password`: all required
///
/// # HTTP Status Codes
/// - `201 CREATED`: `{message, token, user}`
/// - `400 BAD_REQUEST`: Missing or malformed fields
/// - `409 CONFLICT`: Email already registered
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterUser>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let result = users::register_user(&mut conn, &state.config.jwt, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(auth_body("Uspješna registracija.", result)),
    ))
}

/// POST /api/auth/login
///
/// # Request Body
/// - `email`, `password`: both required
///
/// # HTTP Status Codes
/// - `200 OK`: `{message, token, user}`
/// - `400 BAD_REQUEST`: Missing fields
/// - `401 UNAUTHORIZED`: Unknown email or wrong password (same message)
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginUser>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let result = users::login_user(&mut conn, &state.config.jwt, request).await?;

    Ok(Json(auth_body("Uspješna prijava.", result)))
}
