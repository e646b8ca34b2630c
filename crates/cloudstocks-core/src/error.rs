use thiserror::Error;

/// Validation and contract errors exposed by `cloudstocks-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid range '{value}', expected one of 1d, 5d, 1m, 1y, 5y, 10y, max")]
    InvalidRange { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("bar high must be >= low")]
    InvalidBarRange,
    #[error("bar open/close must be within high/low range")]
    InvalidBarBounds,
}

/// Failures raised by the series synthesizer.
///
/// The synthesizer performs no I/O, so the only runtime failure mode is a
/// reference that should never have reached it. Anything else (a zero point
/// count, a broken shape table) is a programming error and panics.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SynthesisError {
    #[error("reference price must be a positive finite number, got {value}")]
    InvalidInput { value: f64 },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
