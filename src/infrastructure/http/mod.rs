pub mod credentials;
pub mod send;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::infrastructure::AppState;

pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/credentials",
            get(credentials::list).post(credentials::create),
        )
        .route("/api/send/:id", post(send::send))
        // Serve the web form; non-API routes fall through to it.
        .fallback_service(
            ServeDir::new(static_dir)
                .not_found_service(ServeFile::new(format!("{static_dir}/index.html"))),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}
