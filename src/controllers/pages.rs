use axum::{
    extract::State,
    response::Html,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::{error::{AppError, AppResult}, AppState};

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health(State(state): State<Arc<AppState>>) -> AppResult<&'static str> {
    state.db.health_check().await.map_err(|e| {
        tracing::error!(
            environment = %state.config.app.environment,
            "health check failed: {:?}", e
        );
        AppError::Unavailable("database is not reachable".to_string())
    })?;
    Ok("OK")
}
