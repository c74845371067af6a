use reqwest::{Client, redirect::Policy};
use sunnetna::{build_router, database, AppState, Config, DbPool};
use tokio::net::TcpListener;

/// HTTP test application wrapper
///
/// Runs the full router on a random port over its own in-memory database,
/// so tests can run in parallel without sharing state.
pub struct TestApp {
    /// Server base URL (e.g., "http://127.0.0.1:54321")
    pub address: String,
    /// HTTP client for making requests
    pub client: Client,
    /// Application config
    pub config: Config,
    /// Pool behind the server, for assertions on stored state
    #[allow(dead_code)]
    pub pool: DbPool,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = test_config();

        let pool = database::connect(&config.database)
            .await
            .expect("Failed to connect to in-memory database");
        database::migrate(&pool)
            .await
            .expect("Failed to run migrations");

        let app = build_router(AppState::new(pool.clone(), config.clone()));

        // Bind to random port (port 0 tells OS to assign available port)
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{port}");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            address,
            client,
            config,
            pool,
        }
    }

    /// Get the full URL for an API endpoint
    ///
    /// # Example
    /// ```rust
    /// let url = app.url("/api/health");
    /// // Returns: "http://127.0.0.1:54321/api/health"
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// Defaults with an in-memory database; the environment is ignored so tests
/// do not depend on a developer's `.env`.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.database.url = "sqlite::memory:".to_string();
    config.jwt.secret = "test-secret-key-for-testing".to_string().into();
    config
}
