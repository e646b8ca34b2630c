use axum::extract::State;
use axum::Json;
use tracing::info;

use cloudstocks_core::StockReference;

use crate::error::ApiError;
use crate::AppState;

/// `GET /stocks`
///
/// Full reference catalog — the endpoint the dashboard fetches on load to
/// seed its watchlist.
pub async fn list_stocks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StockReference>>, ApiError> {
    let catalog = state.store.list().await?;

    info!(count = catalog.len(), "served reference catalog");

    Ok(Json(catalog))
}
