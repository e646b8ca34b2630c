//! Environment-driven server configuration.
//!
//! Backends are wired through environment variables under a `CLOUDSTOCKS_`
//! prefix; everything has a default so a bare `cloudstocks-server` serves
//! the built-in sample catalog.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use cloudstocks_core::{CacheStore, MemoryReferenceStore, ReferenceStore, RemoteReferenceStore, SystemClock};

const BIND_VAR: &str = "CLOUDSTOCKS_BIND";
const REFERENCE_URL_VAR: &str = "CLOUDSTOCKS_REFERENCE_URL";
const CACHE_TTL_VAR: &str = "CLOUDSTOCKS_CACHE_TTL_SECS";

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{BIND_VAR} must be a socket address: '{value}'")]
    InvalidBindAddr { value: String },

    #[error("{CACHE_TTL_VAR} must be an integer number of seconds: '{value}'")]
    InvalidCacheTtl { value: String },
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// When set, references come from this remote catalog endpoint instead
    /// of the built-in sample catalog.
    pub reference_url: Option<String>,
    pub cache_ttl: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_raw = std::env::var(BIND_VAR).unwrap_or_else(|_| String::from(DEFAULT_BIND));
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr { value: bind_raw })?;

        let reference_url = std::env::var(REFERENCE_URL_VAR).ok().filter(|url| !url.is_empty());

        let cache_ttl = match std::env::var(CACHE_TTL_VAR) {
            Ok(raw) => Duration::from_secs(
                raw.parse()
                    .map_err(|_| ConfigError::InvalidCacheTtl { value: raw })?,
            ),
            Err(_) => Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        };

        Ok(Self {
            bind_addr,
            reference_url,
            cache_ttl,
        })
    }

    /// Build the reference store this configuration selects.
    pub fn build_store(&self) -> Arc<dyn ReferenceStore> {
        match &self.reference_url {
            Some(url) => {
                let cache = CacheStore::new(self.cache_ttl, Arc::new(SystemClock));
                Arc::new(RemoteReferenceStore::new(url.clone(), cache))
            }
            None => Arc::new(MemoryReferenceStore::with_sample_catalog()),
        }
    }
}
