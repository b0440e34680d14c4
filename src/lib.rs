pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
}

impl AppState {
    /// Connects to the database and runs schema creation plus seeding.
    pub async fn new(config: config::Config) -> Result<Arc<Self>, sqlx::Error> {
        let db = database::Database::new(&config.database.url, config.database.pool_size).await?;

        db.initialize().await?;

        Ok(Arc::new(Self { db, config }))
    }
}

/// Full application router with request tracing.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
