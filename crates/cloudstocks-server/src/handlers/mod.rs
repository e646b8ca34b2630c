//! Request handlers for the dashboard API.
//!
//! Three data routes: the chart endpoint (reference lookup + synthesized
//! series), the symbol search, and the full catalog listing the dashboard
//! bootstraps from. Response bodies are frontend contract, including the
//! `noData` flag on 404s.

pub mod chart;
pub mod search;
pub mod stocks;

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
