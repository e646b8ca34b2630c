use serde::{Deserialize, Serialize};

use crate::{RangeCode, Symbol, ValidationError};

/// Reference attributes for one symbol, as stored in the reference store.
///
/// Field names on the wire stay camelCase for compatibility with the
/// dashboard frontend. `low_52_week <= price <= high_52_week` is expected
/// but deliberately not enforced: the store is a black box and the
/// synthesizer anchors to `price` regardless of what the band says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockReference {
    pub symbol: Symbol,
    pub name: String,
    pub price: f64,
    pub change: f64,
    #[serde(rename = "changePercent")]
    pub change_percent: f64,
    #[serde(rename = "high52Week")]
    pub high_52_week: f64,
    #[serde(rename = "low52Week")]
    pub low_52_week: f64,
    /// Display string, e.g. "2.87T".
    #[serde(rename = "marketCap", skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<String>,
    pub volume: u64,
    #[serde(rename = "avgVolume", skip_serializing_if = "Option::is_none")]
    pub avg_volume: Option<u64>,
}

impl StockReference {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: Symbol,
        name: impl Into<String>,
        price: f64,
        change: f64,
        change_percent: f64,
        high_52_week: f64,
        low_52_week: f64,
        market_cap: Option<String>,
        volume: u64,
        avg_volume: Option<u64>,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("price", price)?;
        validate_finite("change", change)?;
        validate_finite("changePercent", change_percent)?;
        validate_non_negative("high52Week", high_52_week)?;
        validate_non_negative("low52Week", low_52_week)?;

        Ok(Self {
            symbol,
            name: name.into(),
            price,
            change,
            change_percent,
            high_52_week,
            low_52_week,
            market_cap,
            volume,
            avg_volume,
        })
    }
}

/// One OHLCV sample of a historical series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Seconds since the unix epoch.
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl TimeSeriesPoint {
    /// Validated constructor for points arriving from outside the
    /// synthesizer (the synthesizer's max/min derivation guarantees the
    /// bounds by construction).
    pub fn new(
        timestamp: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("open", open)?;
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;
        validate_non_negative("close", close)?;

        if high < low {
            return Err(ValidationError::InvalidBarRange);
        }

        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidBarBounds);
        }

        Ok(Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

/// Ordered series of bars, oldest first, strictly increasing timestamps.
///
/// Generated fresh per request and never mutated after construction; the
/// final close equals the reference price exactly (the anchoring
/// requirement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub symbol: Symbol,
    pub range: RangeCode,
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    pub fn new(symbol: Symbol, range: RangeCode, points: Vec<TimeSeriesPoint>) -> Self {
        Self {
            symbol,
            range,
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The anchored final close, if any points exist.
    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|point| point.close)
    }
}

pub(crate) fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

pub(crate) fn validate_non_negative(
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
