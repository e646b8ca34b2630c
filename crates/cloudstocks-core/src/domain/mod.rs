//! Canonical domain types for the cloudstocks backend.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated, uppercase-normalized ticker |
//! | [`RangeCode`] | Chart span (`1d` … `max`) with fixed sampling shapes |
//! | [`StockReference`] | Per-symbol reference attributes from the store |
//! | [`TimeSeriesPoint`] | One OHLCV bar |
//! | [`TimeSeries`] | Ordered bar series, anchored at the current price |
//! | [`UtcDateTime`] | UTC timestamp with unix-seconds accessors |
//!
//! All types validate their invariants at construction, with one deliberate
//! exception: [`StockReference`] does not require the current price to sit
//! inside its 52-week band, because the store is a black box and the
//! synthesizer must tolerate whatever it returns.

mod models;
mod range;
mod symbol;
mod timestamp;

pub use models::{StockReference, TimeSeries, TimeSeriesPoint};
pub use range::{RangeCode, RangeShape};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
