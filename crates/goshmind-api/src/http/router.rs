//! Axum router configuration with middleware.
//!
//! JSON API routes live under `/api/`. Middleware: CORS, tracing.
//!
//! The compiled client bundle is served from `server.web_dir` when that
//! directory exists. API routes take priority; unknown paths fall through to
//! the bundle's `index.html` for client-side routing. If the directory does
//! not exist, only the API is served.

use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/chat", post(handlers::chat::post_chat))
        .route(
            "/conversation/{session_id}",
            get(handlers::conversation::get_conversation),
        );

    let web_dir = state.config.server.web_dir.clone();

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if Path::new(&web_dir).is_dir() {
        let index_path = Path::new(&web_dir).join("index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "Client bundle serving enabled");
    } else {
        tracing::debug!(path = %web_dir, "Client bundle directory not found, serving API only");
    }

    router
}

/// GET /health - Liveness probe.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
