//! TTL caching for reference-store reads.
//!
//! The cache is an explicit object owned by the caller rather than
//! process-wide state, with the clock injected so expiry is testable
//! without sleeping.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Time source for cache expiry.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-advanced clock for deterministic expiry tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn start() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().expect("clock lock poisoned")
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheInner<T> {
    map: HashMap<String, CacheEntry<T>>,
    default_ttl: Duration,
}

/// Thread-safe TTL cache.
///
/// `get` only returns unexpired entries; `get_stale` ignores expiry and
/// exists for the fetch-failed fallback path, where an outdated catalog
/// beats an empty dashboard.
#[derive(Debug, Clone)]
pub struct CacheStore<T> {
    inner: Arc<tokio::sync::RwLock<CacheInner<T>>>,
    clock: Arc<dyn Clock>,
}

impl<T: Clone> CacheStore<T> {
    pub fn new(default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(tokio::sync::RwLock::new(CacheInner {
                map: HashMap::new(),
                default_ttl,
            })),
            clock,
        }
    }

    /// Cache with the wall clock and the standard 5-minute catalog TTL.
    pub fn with_default_ttl() -> Self {
        Self::new(Duration::from_secs(300), Arc::new(SystemClock))
    }

    /// Cache that never stores anything.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO, Arc::new(SystemClock))
    }

    pub async fn get(&self, key: &str) -> Option<T> {
        let now = self.clock.now();
        let store = self.inner.read().await;
        store.map.get(key).and_then(|entry| {
            if now <= entry.expires_at {
                Some(entry.value.clone())
            } else {
                None
            }
        })
    }

    /// Return the entry even if it has expired. Misses only when the key
    /// was never written.
    pub async fn get_stale(&self, key: &str) -> Option<T> {
        let store = self.inner.read().await;
        store.map.get(key).map(|entry| entry.value.clone())
    }

    pub async fn put(&self, key: String, value: T) {
        let now = self.clock.now();
        let mut store = self.inner.write().await;

        if store.default_ttl == Duration::ZERO {
            return;
        }

        let expires_at = now + store.default_ttl;
        store.map.insert(key, CacheEntry { value, expires_at });
    }

    pub async fn clear(&self) {
        let mut store = self.inner.write().await;
        store.map.clear();
    }

    pub async fn len(&self) -> usize {
        let store = self.inner.read().await;
        store.map.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
