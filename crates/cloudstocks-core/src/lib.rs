//! # CloudStocks Core
//!
//! Domain types and engine for the cloudstocks dashboard backend.
//!
//! ## Overview
//!
//! The dashboard serves stock reference data and historical OHLCV charts.
//! There is no real price history anywhere in the system: every chart is
//! synthesized on demand by [`SeriesSynthesizer`], a randomized walk
//! anchored so the series ends exactly at the symbol's current price.
//! Reference records live behind the [`store::ReferenceStore`] trait so the
//! handler layer never knows which backend is serving them.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | TTL cache with an injected clock |
//! | [`chart`] | The `t/o/h/l/c/v` wire payload |
//! | [`domain`] | Symbols, ranges, references, series, timestamps |
//! | [`error`] | Core error types |
//! | [`store`] | Reference-store trait and implementations |
//! | [`synth`] | The series synthesizer |
//!
//! ## Quick Start
//!
//! ```rust
//! use cloudstocks_core::{RangeCode, SeriesSynthesizer, UtcDateTime};
//! use cloudstocks_core::store::sample_catalog;
//!
//! let reference = sample_catalog().remove(0); // AAPL
//! let series = SeriesSynthesizer::default()
//!     .synthesize(&reference, RangeCode::OneMonth, UtcDateTime::now())
//!     .expect("valid reference");
//!
//! assert_eq!(series.len(), 22);
//! assert_eq!(series.last_close(), Some(reference.price));
//! ```

pub mod cache;
pub mod chart;
pub mod domain;
pub mod error;
pub mod store;
pub mod synth;

pub use cache::{CacheStore, Clock, ManualClock, SystemClock};
pub use chart::ChartResponse;
pub use domain::{
    RangeCode, RangeShape, StockReference, Symbol, TimeSeries, TimeSeriesPoint, UtcDateTime,
};
pub use error::{CoreError, SynthesisError, ValidationError};
pub use store::{
    MemoryReferenceStore, ReferenceStore, RemoteReferenceStore, StoreError, StoreErrorKind,
    SymbolMatch,
};
pub use synth::{SeriesSynthesizer, SynthesizerConfig};
