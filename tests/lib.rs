// Shared helpers for the behavior test suites.
pub use cloudstocks_core::{
    store::sample_catalog, CacheStore, ChartResponse, ManualClock, MemoryReferenceStore,
    RangeCode, ReferenceStore, SeriesSynthesizer, StockReference, Symbol, TimeSeries, UtcDateTime,
};
pub use cloudstocks_server::{build_router, AppState};

use std::sync::Arc;

/// Router over the seeded sample catalog, as the default deployment runs.
pub fn sample_app() -> axum::Router {
    build_router(AppState::new(Arc::new(
        MemoryReferenceStore::with_sample_catalog(),
    )))
}

/// A fixed "now" so test series land on a known final timestamp.
pub fn fixed_now() -> UtcDateTime {
    UtcDateTime::parse("2024-06-03T20:00:00Z").expect("timestamp")
}
