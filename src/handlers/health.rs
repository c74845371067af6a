//! Health check handler

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::{database, state::AppState};

pub const APP_NAME: &str = "Sunnetna Trpeza";

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub ok: bool,
    pub app: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /api/health
///
/// Public. Reports 200 with `ok: true` when the database answers, otherwise
/// 500 with `ok: false` and the database error.
///
/// # Example
/// ```bash
/// curl http://localhost:5000/api/health
/// # Returns: {"ok":true,"app":"Sunnetna Trpeza","database":"ok"}
/// ```
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthCheckResponse>) {
    match database::ping(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthCheckResponse {
                ok: true,
                app: APP_NAME,
                database: "ok",
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed: database unreachable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthCheckResponse {
                    ok: false,
                    app: APP_NAME,
                    database: "unreachable",
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
