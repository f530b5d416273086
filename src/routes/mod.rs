//! Router assembly: content API, session WebSocket, static files, CORS, panic
//! recovery and HTTP tracing.

use std::{path::Path, sync::Arc};

use axum::{routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::error::handle_panic;
use crate::state::AppState;

pub mod http;
pub mod ws;

/// Build the application router with:
/// - WebSocket browsing sessions at `/ws`
/// - content API under `/api/...`
/// - static SPA from `static_dir` with index fallback
/// - CORS (allow any origin/method/headers)
/// - panics mapped to a JSON 500
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let static_service = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // Content API
        .route("/api/health", get(http::http_health))
        .route("/api/quizzes", get(http::http_get_quizzes))
        .route("/api/stories", get(http::http_get_stories))
        .route("/api/stories/:id", get(http::http_get_story))
        .route("/api/riddles", get(http::http_get_riddles))
        .route("/api/riddles/:id", get(http::http_get_riddle))
        .route("/api/proverbs", get(http::http_get_proverbs))
        .route("/api/proverbs/:id", get(http::http_get_proverb))
        .route("/api/learning", get(http::http_get_learning))
        .route("/api/levels", get(http::http_get_levels))
        .route("/api/levels/:id", get(http::http_get_level))
        .route("/api/culture", get(http::http_get_culture))
        // State + CORS + panics + HTTP tracing
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}
