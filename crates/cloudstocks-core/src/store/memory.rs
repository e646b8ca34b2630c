use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use crate::{StockReference, Symbol};

use super::{matches_keyword, ReferenceStore, StoreError, SymbolMatch};

/// In-memory reference store.
///
/// Backs the CLI and the default server configuration, and doubles as the
/// test store. Seeded from [`sample_catalog`] unless told otherwise.
#[derive(Debug, Clone)]
pub struct MemoryReferenceStore {
    records: BTreeMap<String, StockReference>,
}

impl MemoryReferenceStore {
    pub fn new(references: Vec<StockReference>) -> Self {
        let records = references
            .into_iter()
            .map(|reference| (reference.symbol.as_str().to_owned(), reference))
            .collect();
        Self { records }
    }

    pub fn with_sample_catalog() -> Self {
        Self::new(sample_catalog())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MemoryReferenceStore {
    fn default() -> Self {
        Self::with_sample_catalog()
    }
}

impl ReferenceStore for MemoryReferenceStore {
    fn get<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<Option<StockReference>, StoreError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.records.get(symbol.as_str()).cloned()) })
    }

    fn search<'a>(
        &'a self,
        keyword: &'a str,
        limit: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SymbolMatch>, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let matches = self
                .records
                .values()
                .filter(|reference| matches_keyword(reference, keyword))
                .take(limit)
                .map(|reference| SymbolMatch {
                    symbol: reference.symbol.clone(),
                    name: reference.name.clone(),
                })
                .collect();
            Ok(matches)
        })
    }

    fn list<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StockReference>, StoreError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.records.values().cloned().collect()) })
    }
}

macro_rules! reference {
    ($symbol:literal, $name:literal, $price:literal, $change:literal, $pct:literal,
     $high:literal, $low:literal, $cap:literal, $volume:literal, $avg:literal) => {
        StockReference {
            symbol: Symbol::parse($symbol).expect("seed symbol"),
            name: String::from($name),
            price: $price,
            change: $change,
            change_percent: $pct,
            high_52_week: $high,
            low_52_week: $low,
            market_cap: Some(String::from($cap)),
            volume: $volume,
            avg_volume: Some($avg),
        }
    };
}

/// The seven-stock sample catalog the dashboard ships with.
pub fn sample_catalog() -> Vec<StockReference> {
    vec![
        reference!("AAPL", "Apple Inc.", 185.92, 1.78, 0.97, 199.62, 141.39, "2.87T", 48_521_400, 56_395_400),
        reference!("MSFT", "Microsoft Corporation", 415.43, 2.42, 0.59, 430.82, 310.10, "3.09T", 19_246_000, 21_340_200),
        reference!("GOOGL", "Alphabet Inc.", 164.58, -0.72, -0.43, 178.77, 115.36, "2.01T", 18_564_300, 19_875_500),
        reference!("AMZN", "Amazon.com, Inc.", 177.23, 0.83, 0.47, 185.10, 115.48, "1.84T", 31_427_600, 34_892_700),
        reference!("META", "Meta Platforms, Inc.", 471.92, 3.21, 0.68, 531.49, 258.04, "1.19T", 12_845_700, 14_562_300),
        reference!("TSLA", "Tesla, Inc.", 248.42, -3.78, -1.50, 299.29, 138.80, "792.43B", 98_562_400, 106_234_500),
        reference!("NVDA", "NVIDIA Corporation", 118.71, 2.13, 1.83, 140.76, 41.04, "2.93T", 134_621_800, 141_235_600),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn gets_seeded_symbol() {
        let store = MemoryReferenceStore::with_sample_catalog();
        let symbol = Symbol::parse("aapl").expect("symbol");

        let reference = store.get(&symbol).await.expect("store").expect("present");
        assert_eq!(reference.name, "Apple Inc.");
        assert_eq!(reference.price, 185.92);
    }

    #[tokio::test]
    async fn missing_symbol_is_none_not_error() {
        let store = MemoryReferenceStore::with_sample_catalog();
        let symbol = Symbol::parse("ZZZZ").expect("symbol");

        assert!(store.get(&symbol).await.expect("store").is_none());
    }

    #[tokio::test]
    async fn search_matches_symbol_and_name() {
        let store = MemoryReferenceStore::with_sample_catalog();

        let by_symbol = store.search("nvd", 10).await.expect("store");
        assert_eq!(by_symbol.len(), 1);
        assert_eq!(by_symbol[0].symbol.as_str(), "NVDA");

        let by_name = store.search("micro", 10).await.expect("store");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Microsoft Corporation");
    }

    #[tokio::test]
    async fn search_respects_limit() {
        let store = MemoryReferenceStore::with_sample_catalog();

        // "a" hits several names in the catalog.
        let hits = store.search("a", 2).await.expect("store");
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn lists_whole_catalog() {
        let store = MemoryReferenceStore::with_sample_catalog();
        let catalog = store.list().await.expect("store");
        assert_eq!(catalog.len(), 7);
    }
}
