//! Contract tests for the HTTP surface.
//!
//! These drive the router directly with `tower`'s `oneshot` and assert the
//! status codes and JSON bodies the dashboard frontend depends on.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cloudstocks_tests::sample_app;

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = sample_app()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("infallible service");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

// =============================================================================
// Chart endpoint
// =============================================================================

#[tokio::test]
async fn chart_endpoint_serves_the_merged_payload() {
    let (status, body) = get("/stocks/data?symbol=AAPL&range=1m").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["t"].as_array().expect("t").len(), 22);
    for column in ["o", "h", "l", "c", "v"] {
        assert_eq!(body[column].as_array().expect(column).len(), 22);
    }
    assert_eq!(body["currentPrice"], 185.92);
    assert_eq!(body["companyName"], "Apple Inc.");

    let closes = body["c"].as_array().expect("closes");
    assert_eq!(closes.last().and_then(Value::as_f64), Some(185.92));
}

#[tokio::test]
async fn chart_endpoint_requires_a_symbol() {
    let (status, body) = get("/stocks/data?range=1m").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Symbol parameter is required");
}

#[tokio::test]
async fn chart_endpoint_reports_unknown_symbols_as_no_data() {
    let (status, body) = get("/stocks/data?symbol=ZZZZ").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["noData"], true);
    assert!(
        body["error"]
            .as_str()
            .expect("error message")
            .contains("ZZZZ"),
        "message should name the symbol"
    );
}

#[tokio::test]
async fn chart_endpoint_accepts_capitalized_parameter_names() {
    // Older frontend revisions sent `Symbol`/`Range`.
    let (status, body) = get("/stocks/data?Symbol=msft&Range=1Y").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["t"].as_array().expect("t").len(), 52);
    assert_eq!(body["companyName"], "Microsoft Corporation");
}

#[tokio::test]
async fn chart_endpoint_defaults_unknown_ranges_to_one_month() {
    let (status, body) = get("/stocks/data?symbol=TSLA&range=7w").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["t"].as_array().expect("t").len(), 22);
}

#[tokio::test]
async fn chart_endpoint_rejects_malformed_symbols() {
    let (status, body) = get("/stocks/data?symbol=AAPL%24").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// =============================================================================
// Search endpoint
// =============================================================================

#[tokio::test]
async fn search_matches_symbols_and_company_names() {
    let (status, body) = get("/stocks/search?query=micro").await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().expect("array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["symbol"], "MSFT");
    assert_eq!(results[0]["name"], "Microsoft Corporation");
}

#[tokio::test]
async fn search_accepts_all_keyword_aliases() {
    for param in ["query", "keyword", "q", "search"] {
        let (status, body) = get(&format!("/stocks/search?{param}=nvda")).await;

        assert_eq!(status, StatusCode::OK);
        let results = body.as_array().expect("array");
        assert_eq!(results.len(), 1, "alias {param} must work");
        assert_eq!(results[0]["symbol"], "NVDA");
    }
}

#[tokio::test]
async fn short_keywords_return_an_empty_result_set() {
    for uri in ["/stocks/search?query=a", "/stocks/search"] {
        let (status, body) = get(uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(0));
    }
}

// =============================================================================
// Catalog and health
// =============================================================================

#[tokio::test]
async fn catalog_endpoint_lists_every_seeded_stock() {
    let (status, body) = get("/stocks").await;

    assert_eq!(status, StatusCode::OK);
    let catalog = body.as_array().expect("array");
    assert_eq!(catalog.len(), 7);

    // Wire field names are part of the frontend contract.
    let first = &catalog[0];
    for key in ["symbol", "name", "price", "changePercent", "high52Week", "low52Week"] {
        assert!(!first[key].is_null(), "missing field {key}");
    }
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (status, body) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn responses_carry_a_permissive_cors_policy() {
    let response = sample_app()
        .oneshot(
            Request::builder()
                .uri("/stocks")
                .header(header::ORIGIN, "https://dashboard.example")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("infallible service");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}
