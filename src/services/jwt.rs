use crate::error::{Error, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user id as string
    pub sub: String,
    /// User's email at the time the token was issued
    pub email: String,
    /// Expiration time as Unix timestamp
    pub exp: i64,
    /// Issued at time as Unix timestamp
    pub iat: i64,
}

/// Identity carried by a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub user_id: i64,
    pub email: String,
}

/// Generates a signed bearer token for a user
///
/// # Arguments
/// * `user_id` - The user's id
/// * `email` - The user's email
/// * `secret` - The JWT secret key for signing
/// * `expiration_minutes` - Token lifetime in minutes (from config)
///
/// # Example
/// ```rust
/// use sunnetna::services::jwt::{generate_jwt, verify_jwt};
///
/// let token = generate_jwt(7, "amina@mail.com", "my-secret", 120)?;
/// let identity = verify_jwt(&token, "my-secret")?;
/// assert_eq!(identity.user_id, 7);
/// # Ok::<(), sunnetna::error::Error>(())
/// ```
pub fn generate_jwt(user_id: i64, email: &str, secret: &str, expiration_minutes: i64) -> Result<String> {
    let now = Utc::now();
    let expiration = now + Duration::minutes(expiration_minutes);

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: expiration.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| Error::Internal(format!("Failed to generate JWT: {}", e)))
}

/// Verifies a token and returns its claims
///
/// # Errors
/// Returns `Error::Authentication` if the token is malformed, expired, or has
/// a bad signature
pub fn decode_claims(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => Error::Authentication("Token je istekao.".to_string()),
        ErrorKind::InvalidSignature => Error::Authentication("Neispravan potpis tokena.".to_string()),
        _ => Error::Authentication(format!("Neispravan token: {}", e)),
    })?;

    Ok(token_data.claims)
}

/// Verifies a token and returns the identity it encodes
pub fn verify_jwt(token: &str, secret: &str) -> Result<TokenIdentity> {
    let claims = decode_claims(token, secret)?;
    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| Error::Authentication("Neispravan token: nepoznat korisnik.".to_string()))?;

    Ok(TokenIdentity {
        user_id,
        email: claims.email,
    })
}

/// Validates the token from an Authorization header and returns its identity
/// Format: "Authorization: Bearer <token>"
pub fn authenticate_jwt_token(auth_header: Option<&str>, secret: &str) -> Result<TokenIdentity> {
    let token = extract_token_from_header(auth_header)?;
    verify_jwt(token, secret)
}

/// Extracts the Bearer token from the Authorization header
fn extract_token_from_header(auth_header: Option<&str>) -> Result<&str> {
    match auth_header {
        Some(header) => match header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            Some(_) => Err(Error::Authentication("Prazan token.".to_string())),
            None => Err(Error::Authentication(
                "Neispravan Authorization header. Očekivano: 'Bearer <token>'.".to_string(),
            )),
        },
        None => Err(Error::Authentication("Nedostaje token (prijavi se).".to_string())),
    }
}
