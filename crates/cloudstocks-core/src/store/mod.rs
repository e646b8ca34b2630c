//! Reference-store contract and implementations.
//!
//! The store is the system's black-box collaborator: a key-value lookup of
//! [`StockReference`] records keyed by uppercase symbol, a substring search
//! over symbols and company names, and a full catalog listing. Handlers own
//! a `dyn ReferenceStore` and never know whether records come from the
//! seeded in-memory catalog or a remote endpoint.

mod memory;
mod remote;

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::{StockReference, Symbol};

pub use memory::{sample_catalog, MemoryReferenceStore};
pub use remote::RemoteReferenceStore;

/// Minimal search hit: exactly the `{symbol, name}` pair the dashboard's
/// search box consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMatch {
    pub symbol: Symbol,
    pub name: String,
}

/// Store failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// Backend unreachable or returned a transport-level failure.
    Unavailable,
    /// Backend responded with a payload that does not parse as references.
    Malformed,
    Internal,
}

/// Structured store error.
///
/// "Symbol not found" is not an error: lookups return `Ok(None)` and the
/// handler layer turns that into its user-visible no-data response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    kind: StoreErrorKind,
    message: String,
    retryable: bool,
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: StoreErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: StoreErrorKind::Malformed,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: StoreErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> StoreErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let code = match self.kind {
            StoreErrorKind::Unavailable => "store.unavailable",
            StoreErrorKind::Malformed => "store.malformed",
            StoreErrorKind::Internal => "store.internal",
        };
        write!(f, "{} ({})", self.message, code)
    }
}

impl std::error::Error for StoreError {}

/// Reference-store contract.
///
/// Implementations must be `Send + Sync`; handlers share one store across
/// requests.
pub trait ReferenceStore: Send + Sync {
    /// Fetch one symbol's reference record, `None` when absent.
    fn get<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<Option<StockReference>, StoreError>> + Send + 'a>>;

    /// Case-insensitive substring search over symbol and company name.
    fn search<'a>(
        &'a self,
        keyword: &'a str,
        limit: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SymbolMatch>, StoreError>> + Send + 'a>>;

    /// The full reference catalog.
    fn list<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StockReference>, StoreError>> + Send + 'a>>;
}

/// Shared search predicate so every store matches identically:
/// case-insensitive substring on symbol OR company name.
pub(crate) fn matches_keyword(reference: &StockReference, keyword: &str) -> bool {
    let needle = keyword.to_ascii_lowercase();
    reference
        .symbol
        .as_str()
        .to_ascii_lowercase()
        .contains(&needle)
        || reference.name.to_ascii_lowercase().contains(&needle)
}
