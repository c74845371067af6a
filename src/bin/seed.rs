//! Creates the demo administrator account if it does not exist yet.
//!
//! ```bash
//! cargo run --bin seed
//! ```

use secrecy::ExposeSecret;
use sunnetna::{database, init_tracing, load_config, services::users};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    init_tracing();

    let pool = database::connect(&config.database).await?;
    database::migrate(&pool).await?;

    let mut conn = pool.acquire().await?;
    let seed = &config.seed;
    let created = users::ensure_user(
        &mut conn,
        &seed.admin_full_name,
        &seed.admin_email,
        seed.admin_password.expose_secret(),
    )
    .await?;

    if created {
        tracing::info!(email = %seed.admin_email, "Demo user created");
    } else {
        tracing::info!(email = %seed.admin_email, "Demo user already exists");
    }

    Ok(())
}
