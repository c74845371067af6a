//! Bearer token authentication middleware
//!
//! The middleware is a gate only: it proves the caller logged in and exposes
//! who they are, but no handler restricts writes to the record's creator.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::{
    error::Result,
    services::jwt::{authenticate_jwt_token, TokenIdentity},
    state::AppState,
};

/// Authenticated caller decoded from the bearer token
///
/// This struct is added to request extensions by the JWT middleware
/// after successful validation.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    /// User's unique identifier
    pub id: i64,
    /// User's email address
    pub email: String,
}

impl From<TokenIdentity> for AuthenticatedUser {
    fn from(identity: TokenIdentity) -> Self {
        Self {
            id: identity.user_id,
            email: identity.email,
        }
    }
}

/// JWT authentication middleware
///
/// Rejects the request with 401 before the handler runs when the
/// Authorization header is missing, malformed, expired or wrongly signed.
///
/// # Usage
/// Apply this middleware to protected routes using `route_layer()`:
///
/// ```ignore
/// Router::new()
///     .route("/protected", post(protected_handler))
///     .route_layer(middleware::from_fn_with_state(
///         state.clone(),
///         jwt_auth_middleware,
///     ))
/// ```
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let auth_header = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());

    let identity = authenticate_jwt_token(auth_header, state.config.jwt.secret.expose_secret())
        .inspect_err(|e| tracing::debug!(error = %e, "Rejected unauthenticated request"))?;

    request.extensions_mut().insert(AuthenticatedUser::from(identity));
    Ok(next.run(request).await)
}
