use crate::DbConn;
use crate::{
    config::JwtConfig,
    error::{Error, Result},
    models::users::{AuthResult, LoginUser, NewUser, PublicUser, RegisterUser, User},
    queries::users,
    services::jwt::generate_jwt,
    validation::{non_blank, validate_email, validate_max_len},
};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;

pub(crate) const EMAIL_TAKEN_MESSAGE: &str = "Korisnik sa ovim emailom već postoji.";

/// Shared by "no such user" and "wrong password" so that login responses do
/// not reveal which accounts exist.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Neispravan email ili lozinka.";

const FULL_NAME_MAX_LEN: usize = 120;
const EMAIL_MAX_LEN: usize = 160;

/// Registers a new user and issues a token for the new account
pub async fn register_user(
    conn: &mut DbConn,
    jwt: &JwtConfig,
    register_user: RegisterUser,
) -> Result<AuthResult> {
    let full_name = non_blank(register_user.full_name.as_deref());
    let email = non_blank(register_user.email.as_deref());
    let password = register_user.password.as_deref().filter(|p| !p.is_empty());

    let (Some(full_name), Some(email), Some(password)) = (full_name, email, password) else {
        return Err(Error::Validation(
            "Ime i prezime, email i lozinka su obavezni.".to_string(),
        ));
    };

    validate_max_len("fullName", full_name, FULL_NAME_MAX_LEN)?;
    validate_max_len("email", email, EMAIL_MAX_LEN)?;
    validate_email(email)?;

    if users::get_user_by_email(conn, email).await?.is_some() {
        return Err(Error::Conflict(EMAIL_TAKEN_MESSAGE.to_string()));
    }

    let new_user = NewUser {
        full_name: full_name.to_string(),
        email: email.to_string(),
        password_hash: generate_password_hash(password)?,
    };

    let user = users::create_user(conn, new_user).await?;
    tracing::info!(user_id = user.id, "User registered");

    issue_token(jwt, user)
}

/// Authenticates a user with email and password
pub async fn login_user(conn: &mut DbConn, jwt: &JwtConfig, login_user: LoginUser) -> Result<AuthResult> {
    let email = non_blank(login_user.email.as_deref());
    let password = login_user.password.as_deref().filter(|p| !p.is_empty());

    let (Some(email), Some(password)) = (email, password) else {
        return Err(Error::Validation("Email i lozinka su obavezni.".to_string()));
    };

    let Some(user) = users::get_user_by_email(conn, email).await? else {
        tracing::warn!("Login rejected: unknown email");
        return Err(Error::Authentication(INVALID_CREDENTIALS_MESSAGE.to_string()));
    };

    if !verify_password(password, &user.password_hash)? {
        tracing::warn!(user_id = user.id, "Login rejected: wrong password");
        return Err(Error::Authentication(INVALID_CREDENTIALS_MESSAGE.to_string()));
    }

    tracing::info!(user_id = user.id, "User logged in");
    issue_token(jwt, user)
}

/// Creates the configured account unless a user with that email exists.
/// Returns `true` when a user was created.
pub async fn ensure_user(conn: &mut DbConn, full_name: &str, email: &str, password: &str) -> Result<bool> {
    if users::get_user_by_email(conn, email).await?.is_some() {
        return Ok(false);
    }

    let new_user = NewUser {
        full_name: full_name.to_string(),
        email: email.to_string(),
        password_hash: generate_password_hash(password)?,
    };
    users::create_user(conn, new_user).await?;
    Ok(true)
}

fn issue_token(jwt: &JwtConfig, user: User) -> Result<AuthResult> {
    let token = generate_jwt(
        user.id,
        &user.email,
        jwt.secret.expose_secret(),
        jwt.expiration_minutes,
    )?;

    Ok(AuthResult {
        token,
        user: PublicUser::from(user),
    })
}

/// Hashes a password with Argon2 and a random salt
pub fn generate_password_hash(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a password against a password hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| Error::Internal(format!("Invalid password hash: {}", e)))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::Internal(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}
