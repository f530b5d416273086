//! Telugu Sanskriti · cultural content backend
//!
//! - Axum JSON content API (quizzes, stories, riddles, proverbs, learning content, levels)
//! - WebSocket browsing sessions (navigation, lesson progression, quiz, riddle reveal)
//! - Static SPA fallback (STATIC_DIR/index.html)
//!
//! Important env variables:
//!   PORT                : u16 (default 3000)
//!   STATIC_DIR          : directory of the built front-end (default "./static")
//!   CONTENT_CONFIG_PATH : optional TOML content bank merged ahead of the built-in seeds
//!   LOG_LEVEL           : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT          : "pretty" (default) or "json"

mod config;
mod domain;
mod error;
mod logic;
mod protocol;
mod routes;
mod seeds;
mod session;
mod state;
mod store;
mod telemetry;
mod util;

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerSettings;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let settings = ServerSettings::from_env();

  // Content is loaded once here and is read-only from now on.
  let state = Arc::new(AppState::new(&settings));

  let app = build_router(state, &settings.static_dir);

  let listener = TcpListener::bind(settings.addr).await?;
  info!(target: "sanskriti_backend", addr = %settings.addr, static_dir = %settings.static_dir.display(), "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!(target: "sanskriti_backend", "Server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "sanskriti_backend", error = %e, "Failed to listen for Ctrl-C");
    std::future::pending::<()>().await;
  }
  info!(target: "sanskriti_backend", "Shutdown signal received");
}
