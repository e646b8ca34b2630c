use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use cloudstocks_core::{ChartResponse, RangeCode, Symbol, UtcDateTime};

use crate::error::ApiError;
use crate::AppState;

/// `GET /stocks/data?symbol=AAPL&range=1m`
///
/// Resolves the symbol against the reference store, synthesizes the
/// historical series for the requested range, and merges both into the
/// chart payload. Older frontend revisions send capitalized parameter
/// names, so `symbol`/`Symbol` and `range`/`Range` are both accepted, and
/// unknown ranges fall back to the one-month default instead of erroring.
pub async fn chart_data(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ChartResponse>, ApiError> {
    let raw_symbol = params
        .get("symbol")
        .or_else(|| params.get("Symbol"))
        .ok_or(ApiError::MissingSymbol)?;

    let range = RangeCode::parse_or_default(
        params
            .get("range")
            .or_else(|| params.get("Range"))
            .map(String::as_str),
    );

    let symbol = Symbol::parse(raw_symbol)?;

    let reference = state
        .store
        .get(&symbol)
        .await?
        .ok_or_else(|| ApiError::SymbolNotFound {
            symbol: symbol.to_string(),
        })?;

    let series = state
        .synthesizer
        .synthesize(&reference, range, UtcDateTime::now())?;

    info!(
        symbol = %symbol,
        range = %range,
        points = series.len(),
        "served chart data"
    );

    Ok(Json(ChartResponse::assemble(&reference, &series)))
}
