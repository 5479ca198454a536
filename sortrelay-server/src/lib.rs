//! HTTP boundary for sortrelay
//!
//! Exposes the core pipeline over the endpoint the sorting device and the
//! monitoring dashboard already speak:
//!
//! - `POST /api/esp32` — device pushes a raw reading
//! - `GET /api/esp32` — dashboard polls the current reading
//! - `GET /api/esp32/history` — dashboard polls the recent-readings trend
//!
//! The core services are constructed once, wrapped in [`AppState`], and
//! shared through axum's `State`; there is no process-wide global. Chart
//! rendering, badge colors, CORS and static pages are the dashboard's
//! problem, not this crate's.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod routes;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use thiserror::Error;

use sortrelay_core::time::WallClock;
use sortrelay_core::{IngestionService, QueryService, StateStore};

pub use config::ServerConfig;

/// Server-level errors
#[derive(Debug, Error)]
pub enum ServerError {
    /// Bad configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// Bind or accept failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared services behind the HTTP handlers
pub struct AppState {
    /// Write path: validate + classify + commit
    pub ingest: IngestionService,
    /// Read path: consistent snapshots for pollers
    pub query: QueryService,
}

impl AppState {
    /// Build the pipeline with an empty store and the system clock
    pub fn new() -> Self {
        let store: Arc<StateStore> = Arc::new(StateStore::new());
        Self {
            ingest: IngestionService::new(store.clone(), WallClock),
            query: QueryService::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the router over `state`
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/esp32",
            get(routes::get_current).post(routes::post_reading),
        )
        .route("/api/esp32/history", get(routes::get_history))
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(AppState::new());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    log::info!("listening on http://{}", config.addr);

    axum::serve(listener, app).await?;
    Ok(())
}
