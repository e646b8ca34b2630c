use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use cloudstocks_core::SymbolMatch;

use crate::error::ApiError;
use crate::AppState;

/// Keyword shorter than this returns an empty result set instead of
/// scanning the catalog.
const MIN_KEYWORD_LEN: usize = 2;

const DEFAULT_LIMIT: usize = 20;

/// `GET /stocks/search?query=app`
///
/// Frontend revisions disagree on the keyword parameter name, so all four
/// aliases are honored, first match wins.
pub async fn search_stocks(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<SymbolMatch>>, ApiError> {
    let keyword = ["query", "keyword", "q", "search"]
        .iter()
        .find_map(|name| params.get(*name))
        .map(String::as_str)
        .unwrap_or("");

    if keyword.len() < MIN_KEYWORD_LEN {
        return Ok(Json(Vec::new()));
    }

    let limit = params
        .get("limit")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_LIMIT);

    let matches = state.store.search(keyword, limit).await?;

    info!(keyword, results = matches.len(), "served symbol search");

    Ok(Json(matches))
}
