use thiserror::Error;

// Import Axum types for HTTP response conversion
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// The custom error type for the application.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from the sqlx library.
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A database migration failed at startup.
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Missing or malformed input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A not found error (resource does not exist).
    #[error("Not found: {0}")]
    NotFound(String),

    /// A conflict error (duplicate unique value or a restricted delete).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad credentials, or a missing, malformed or expired bearer token.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// An internal server error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A type alias for `Result<T, Error>` to simplify function signatures.
pub type Result<T> = std::result::Result<T, Error>;

/// Generic message shown for failures the caller cannot act on
pub const SERVER_ERROR_MESSAGE: &str = "Greška na serveru.";

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Authentication(_) => StatusCode::UNAUTHORIZED,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Sqlx(_)
            | Error::Migrate(_)
            | Error::Internal(_)
            | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Authentication(_) => "AUTHENTICATION_FAILED",
            Error::Conflict(_) => "CONFLICT",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Sqlx(_) | Error::Migrate(_) | Error::Internal(_) => "INTERNAL_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
        }
    }
}

/// Convert custom Error to HTTP response
///
/// Client-facing variants carry their own message. Server-side failures
/// share one generic message and add the raw diagnostic under `error`.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let body = match self {
            Error::Validation(msg)
            | Error::Authentication(msg)
            | Error::Conflict(msg)
            | Error::NotFound(msg) => {
                serde_json::json!({
                    "message": msg,
                    "code": code
                })
            }
            other => {
                tracing::error!(error = %other, "Request failed with server error");
                serde_json::json!({
                    "message": SERVER_ERROR_MESSAGE,
                    "code": code,
                    "error": other.to_string()
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Validation(format!("Neispravan JSON zahtjev: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::Validation(format!("Neispravan parametar putanje: {}", rejection.body_text()))
    }
}

/// True when the database rejected a write because of a UNIQUE constraint.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

/// True when the database rejected a write because of a FOREIGN KEY constraint.
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_foreign_key_violation())
        .unwrap_or(false)
}
