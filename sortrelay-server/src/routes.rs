//! HTTP handlers for the device endpoint
//!
//! ## Wire Format
//!
//! `GET /api/esp32` answers with a tagged object so polling dashboards can
//! branch on presence instead of special-casing a null body:
//!
//! ```text
//! {"status":"online","color":"Merah","weightGrams":145.0,
//!  "category":"small","timestamp":1700000000000}
//! {"status":"offline"}
//! ```
//!
//! Absence is a state, not an error, so "offline" is still HTTP 200 — the
//! dashboard renders it as a badge, same as the original deployment did.
//!
//! `POST /api/esp32` accepts the untrusted device payload (current or legacy
//! field names, extra fields ignored) and answers 200 with the committed
//! reading or 422 with the structured rejection. A rejected payload leaves
//! state untouched.
//!
//! `GET /api/esp32/history` is the newest-first trend feed, bounded at the
//! store's history capacity.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::debug;
use serde::Serialize;

use sortrelay_core::{RawReading, Reading, ValidationError};

use crate::AppState;

/// Body of `GET /api/esp32`
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CurrentResponse {
    /// At least one reading has been committed
    Online {
        /// The latest reading, flattened into the envelope
        #[serde(flatten)]
        reading: Reading,
    },
    /// No reading has ever been committed
    Offline,
}

/// Body of a successful `POST /api/esp32`
#[derive(Debug, Serialize)]
pub struct AcceptedResponse {
    /// Always `"accepted"`
    pub status: &'static str,
    /// The committed reading, category recomputed server-side
    pub reading: Reading,
}

/// Body of a rejected `POST /api/esp32` (HTTP 422)
#[derive(Debug, Serialize)]
pub struct RejectedResponse {
    /// Always `"rejected"`
    pub status: &'static str,
    /// Human-readable rejection reason
    pub error: String,
}

/// Wraps a validation failure so axum can turn it into a 422
pub struct Rejection(ValidationError);

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let body = RejectedResponse {
            status: "rejected",
            error: self.0.to_string(),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// `GET /api/esp32`
pub async fn get_current(State(state): State<Arc<AppState>>) -> Json<CurrentResponse> {
    let response = match state.query.current() {
        Some(reading) => CurrentResponse::Online { reading },
        None => CurrentResponse::Offline,
    };
    Json(response)
}

/// `POST /api/esp32`
pub async fn post_reading(
    State(state): State<Arc<AppState>>,
    Json(raw): Json<RawReading>,
) -> Result<Json<AcceptedResponse>, Rejection> {
    let reading = state.ingest.ingest(raw).map_err(Rejection)?;

    debug!("accepted reading from device: {}g", reading.weight_grams);
    Ok(Json(AcceptedResponse {
        status: "accepted",
        reading,
    }))
}

/// `GET /api/esp32/history`
pub async fn get_history(State(state): State<Arc<AppState>>) -> Json<Vec<Reading>> {
    Json(state.query.history())
}
