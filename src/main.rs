//! Codequiz · exercise server
//!
//! - Tasks are JSON segment lists (text, source, input, check)
//! - Axum HTTP API to fetch preprocessed tasks and submit answers
//! - Task collections run a fixed sequence of tasks
//! - Static front end fallback (STATIC_DIR/index.html)
//!
//! Important env variables:
//!   PORT             : u16 (default 3000)
//!   QUIZ_CONFIG_PATH : path to the TOML task bank
//!   STATIC_DIR       : front end directory (default "./static")
//!   LOG_LEVEL        : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT       : "pretty" (default) or "json"

mod telemetry;
mod error;
mod container;
mod segment;
mod domain;
mod preprocess;
mod config;
mod seeds;
mod state;
mod protocol;
mod routes;

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

  // Task bank + seeds, read-only from here on.
  let state = Arc::new(AppState::new());

  let app = build_router(state, &settings.static_dir);

  let listener = TcpListener::bind(settings.addr).await?;
  info!(target: "codequiz", addr = %settings.addr, static_dir = %settings.static_dir, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
