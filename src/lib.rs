//! Sunnetna Trpeza: a recipe catalogue API with password login, categories
//! and recipes, plus a typed client for the front end.

pub mod client;
pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod queries;
pub mod services;
pub mod state;
pub mod validation;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

pub use config::Config;
pub use database::{DbConn, DbPool};
pub use error::{Error, Result};
pub use state::AppState;

use handlers::{
    create_category, create_recipe, delete_category, delete_recipe, get_recipe, health_check,
    list_categories, list_recipes, login, register, update_category, update_recipe,
};
use middleware::jwt_auth_middleware;

/// Load configuration from environment variables
pub fn load_config() -> Result<Config> {
    Ok(Config::load()?)
}

/// Installs the global tracing subscriber, honouring `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sunnetna=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the `/api` router.
///
/// Reads and the auth endpoints are public. Every create, update and delete
/// route goes through [`jwt_auth_middleware`].
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/categories", get(list_categories))
        .route("/recipes", get(list_recipes))
        .route("/recipes/{id}", get(get_recipe));

    let protected_routes = Router::new()
        .route("/categories", post(create_category))
        .route("/categories/{id}", put(update_category).delete(delete_category))
        .route("/recipes", post(create_recipe))
        .route("/recipes/{id}", put(update_recipe).delete(delete_recipe))
        .route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Connects to the database, applies migrations and serves the API until
/// Ctrl+C or SIGTERM.
pub async fn run_api_server(config: Config) -> Result<()> {
    let pool = database::connect(&config.database).await?;
    database::migrate(&pool).await?;

    let address = config.server.address();
    let app = build_router(AppState::new(pool, config));

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind {}: {}", address, e)))?;
    tracing::info!("Backend running on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
