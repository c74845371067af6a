use chrono::Utc;

use crate::{
    error::{is_unique_violation, Error, Result},
    models::users::{NewUser, User},
    DbConn,
};

/// Creates a new user in the database.
pub async fn create_user(conn: &mut DbConn, new_user: NewUser) -> Result<User> {
    let now = Utc::now();
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (full_name, email, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, full_name, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(&new_user.full_name)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(conn)
    .await
    .map_err(|e| {
        // A concurrent registration can slip past the service-level check
        if is_unique_violation(&e) {
            Error::Conflict(crate::services::users::EMAIL_TAKEN_MESSAGE.to_string())
        } else {
            Error::Sqlx(e)
        }
    })?;

    Ok(user)
}

/// Gets a single user by their email address. The comparison is exact.
pub async fn get_user_by_email(conn: &mut DbConn, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, full_name, email, password_hash, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(user)
}

/// Counts rows with the given email.
pub async fn count_users_by_email(conn: &mut DbConn, email: &str) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(email)
        .fetch_one(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(count)
}
