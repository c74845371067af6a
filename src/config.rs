use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL, e.g. `sqlite://sunnetna.db` or `sqlite::memory:`
    pub url: String,
    pub max_connections: u32,
    pub create_if_missing: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    #[serde(skip_serializing)]
    pub secret: SecretString,
    /// Lifetime of an issued bearer token
    pub expiration_minutes: i64,
}

/// Demo account created by the `seed` binary
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    pub admin_email: String,
    #[serde(skip_serializing)]
    pub admin_password: SecretString,
    pub admin_full_name: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default_source())?)
            // Override with environment variables using `SUNNETNA__` prefix and `__` separator
            // e.g., SUNNETNA__JWT__SECRET="change-me"
            .add_source(
                config::Environment::with_prefix("SUNNETNA")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Serializable defaults. Secrets are skipped by `Serialize`, so they are
    /// fed to the builder through this explicit map instead.
    fn default_source() -> DefaultSource {
        let defaults = Self::default();
        DefaultSource {
            server: defaults.server,
            database: defaults.database,
            jwt: DefaultJwt {
                secret: DEFAULT_JWT_SECRET.to_string(),
                expiration_minutes: defaults.jwt.expiration_minutes,
            },
            seed: DefaultSeed {
                admin_email: defaults.seed.admin_email,
                admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
                admin_full_name: defaults.seed.admin_full_name,
            },
        }
    }
}

const DEFAULT_JWT_SECRET: &str = "sunnetna-dev-secret-change-me";
const DEFAULT_ADMIN_PASSWORD: &str = "Admin123!";

#[derive(Serialize)]
struct DefaultSource {
    server: ServerConfig,
    database: DatabaseConfig,
    jwt: DefaultJwt,
    seed: DefaultSeed,
}

#[derive(Serialize)]
struct DefaultJwt {
    secret: String,
    expiration_minutes: i64,
}

#[derive(Serialize)]
struct DefaultSeed {
    admin_email: String,
    admin_password: String,
    admin_full_name: String,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

// Default values for the database configuration
impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://sunnetna.db".to_string(),
            max_connections: 5,
            create_if_missing: true,
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_JWT_SECRET.to_string().into(),
            expiration_minutes: 120,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_email: "admin@demo.com".to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string().into(),
            admin_full_name: "Admin Demo".to_string(),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Secrets are skipped by #[serde(skip_serializing)]
        match serde_json::to_string_pretty(&self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "Error serializing config"),
        }
    }
}
