use std::future::Future;
use std::pin::Pin;

use crate::cache::CacheStore;
use crate::{StockReference, Symbol};

use super::{matches_keyword, ReferenceStore, StoreError, SymbolMatch};

const CATALOG_KEY: &str = "catalog";

/// Reference store backed by a remote JSON endpoint.
///
/// The endpoint serves the full catalog as a JSON array of references. Reads
/// go through a TTL cache: a fresh entry skips the network entirely, and
/// when a fetch fails an expired entry is served rather than nothing. Only
/// a fetch failure with a cold cache surfaces as an error.
pub struct RemoteReferenceStore {
    client: reqwest::Client,
    endpoint: String,
    cache: CacheStore<Vec<StockReference>>,
}

impl RemoteReferenceStore {
    pub fn new(endpoint: impl Into<String>, cache: CacheStore<Vec<StockReference>>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            cache,
        }
    }

    /// Store with the default 5-minute catalog cache.
    pub fn with_default_cache(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, CacheStore::with_default_ttl())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn catalog(&self) -> Result<Vec<StockReference>, StoreError> {
        if let Some(fresh) = self.cache.get(CATALOG_KEY).await {
            return Ok(fresh);
        }

        match self.fetch().await {
            Ok(catalog) => {
                self.cache.put(String::from(CATALOG_KEY), catalog.clone()).await;
                Ok(catalog)
            }
            Err(error) => match self.cache.get_stale(CATALOG_KEY).await {
                Some(stale) => Ok(stale),
                None => Err(error),
            },
        }
    }

    async fn fetch(&self) -> Result<Vec<StockReference>, StoreError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|error| {
                StoreError::unavailable(format!("reference endpoint unreachable: {error}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::unavailable(format!(
                "reference endpoint returned {status}"
            )));
        }

        response
            .json::<Vec<StockReference>>()
            .await
            .map_err(|error| StoreError::malformed(format!("reference payload invalid: {error}")))
    }
}

impl ReferenceStore for RemoteReferenceStore {
    fn get<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<Option<StockReference>, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let catalog = self.catalog().await?;
            Ok(catalog
                .into_iter()
                .find(|reference| reference.symbol == *symbol))
        })
    }

    fn search<'a>(
        &'a self,
        keyword: &'a str,
        limit: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SymbolMatch>, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let catalog = self.catalog().await?;
            Ok(catalog
                .iter()
                .filter(|reference| matches_keyword(reference, keyword))
                .take(limit)
                .map(|reference| SymbolMatch {
                    symbol: reference.symbol.clone(),
                    name: reference.name.clone(),
                })
                .collect())
        })
    }

    fn list<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StockReference>, StoreError>> + Send + 'a>> {
        Box::pin(async move { self.catalog().await })
    }
}
