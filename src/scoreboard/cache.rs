//! Bounded response cache with TTL
//!
//! An owned cache object rather than a module-level singleton: the client
//! that fetches scoreboards holds one, and the clock is injected so TTL
//! expiry is testable without sleeping.

use chrono::{DateTime, Duration, Utc};
use lru::LruCache;
use std::num::NonZeroUsize;
use tracing::debug;

/// Time source for cache expiry. Injected so tests can drive it manually.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
struct CachedResponse {
    body: String,
    stored_at: DateTime<Utc>,
    ttl: Duration,
}

impl CachedResponse {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.stored_at >= self.ttl
    }
}

/// LRU cache of raw response bodies keyed by URL, each entry carrying its
/// own TTL. Bounded capacity; least-recently-used entries fall out first.
pub struct ResponseCache {
    entries: LruCache<String, CachedResponse>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("len", &self.entries.len())
            .field("cap", &self.entries.cap())
            .finish()
    }
}

impl ResponseCache {
    pub fn new(capacity: usize, clock: Box<dyn Clock>) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        ResponseCache {
            entries: LruCache::new(capacity),
            clock,
        }
    }

    /// Cache with the system clock and the default capacity.
    pub fn with_system_clock(capacity: usize) -> Self {
        ResponseCache::new(capacity, Box::new(SystemClock))
    }

    /// Returns the cached body for `url` if present and not expired.
    /// Expired entries are evicted on access.
    pub fn get(&mut self, url: &str) -> Option<String> {
        let now = self.clock.now();
        match self.entries.get(url) {
            Some(entry) if !entry.is_expired(now) => {
                debug!("Cache hit for {url}");
                Some(entry.body.clone())
            }
            Some(_) => {
                debug!("Evicting expired cache entry for {url}");
                self.entries.pop(url);
                None
            }
            None => None,
        }
    }

    /// Stores a response body with a TTL in seconds.
    pub fn put(&mut self, url: String, body: String, ttl_seconds: u64) {
        let entry = CachedResponse {
            body,
            stored_at: self.clock.now(),
            ttl: Duration::seconds(ttl_seconds as i64),
        };
        self.entries.put(url, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
