//! HTTP surface for the cloudstocks dashboard backend.
//!
//! Thin axum glue over `cloudstocks-core`: routes, lenient parameter
//! handling, and the error bodies the dashboard frontend depends on. Every
//! response carries a permissive CORS policy so the dashboard can be served
//! from any origin.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use cloudstocks_core::{ReferenceStore, SeriesSynthesizer};

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReferenceStore>,
    pub synthesizer: SeriesSynthesizer,
}

impl AppState {
    pub fn new(store: Arc<dyn ReferenceStore>) -> Self {
        Self {
            store,
            synthesizer: SeriesSynthesizer::default(),
        }
    }

    pub fn with_synthesizer(store: Arc<dyn ReferenceStore>, synthesizer: SeriesSynthesizer) -> Self {
        Self { store, synthesizer }
    }
}

/// Assemble the full route table.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/stocks", get(handlers::stocks::list_stocks))
        .route("/stocks/search", get(handlers::search::search_stocks))
        .route("/stocks/data", get(handlers::chart::chart_data))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
