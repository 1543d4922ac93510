use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::{handlers, songs};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Static front-end path (configurable via env)
    let web_dir = std::env::var("CHARTDAY_WEB_DIR").unwrap_or_else(|_| "web".to_string());

    // API routes
    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/songs", get(songs::get_songs))
        .with_state(state);

    // Serve the front end with an index fallback
    let index_path = format!("{}/index.html", web_dir);
    let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(&index_path));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(serve_dir)
        .layer(TraceLayer::new_for_http())
}
