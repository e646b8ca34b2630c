use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use cloudstocks_core::{StoreError, SynthesisError, ValidationError};

/// Request-handler failures, mapped onto the JSON bodies the dashboard
/// frontend already understands.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("symbol parameter is required")]
    MissingSymbol,

    #[error(transparent)]
    InvalidSymbol(#[from] ValidationError),

    #[error("stock symbol {symbol} not found")]
    SymbolNotFound { symbol: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::MissingSymbol => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Symbol parameter is required" }),
            ),
            Self::InvalidSymbol(error) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": error.to_string() }),
            ),
            Self::SymbolNotFound { symbol } => (
                StatusCode::NOT_FOUND,
                json!({
                    "noData": true,
                    "error": format!("Stock symbol {symbol} not found"),
                }),
            ),
            Self::Store(error) => {
                let error_id = Uuid::new_v4();
                tracing::error!(%error_id, error = %error, "reference store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to fetch stock data. Please try again.",
                        "errorId": error_id.to_string(),
                    }),
                )
            }
            Self::Synthesis(error) => {
                let error_id = Uuid::new_v4();
                tracing::error!(%error_id, error = %error, "series synthesis failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to fetch stock data. Please try again.",
                        "errorId": error_id.to_string(),
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
