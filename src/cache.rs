//! Pluggable caching of parsed documents.
//!
//! Parsing is cheap but not free, and callers re-reading the same document
//! repeatedly (template files, message catalogs) benefit from keeping the
//! parsed map around. The [`Cache`] trait is the capability the
//! [`Loader`](crate::Loader) consumes: it is injected explicitly, never
//! reached through global state, so tests and embedders can substitute
//! their own backend (on-disk, network key-value store, a spy).
//!
//! Cache failures are surfaced, not swallowed: every operation returns a
//! `Result` and callers are expected to treat the cache as best-effort
//! acceleration, falling back to a fresh parse on any error.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::{KvMap, Result};

/// A store for parsed documents, keyed by an opaque logical key.
///
/// Implementations take `&self` and must be safe to call from multiple
/// threads.
pub trait Cache: Send + Sync {
    /// Looks up a previously stored map. `Ok(None)` is a miss.
    fn get(&self, key: &str) -> Result<Option<KvMap>>;

    /// Stores a map under `key`. `Duration::ZERO` means the entry never
    /// expires.
    fn set(&self, key: &str, map: &KvMap, ttl: Duration) -> Result<()>;

    /// Removes a single entry. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;

    /// Removes every entry.
    fn flush(&self) -> Result<()>;

    /// Whether the backend is currently reachable. In-process backends are
    /// always available; network backends may not be.
    fn is_available(&self) -> bool;
}

struct Entry {
    map: KvMap,
    expires_at: Option<Instant>,
}

impl Entry {
    fn expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// An in-process [`Cache`] backend with per-entry expiry.
///
/// Expired entries are dropped lazily on lookup.
///
/// # Examples
///
/// ```rust
/// use kvtext::{Cache, MemoryCache, KvMap};
/// use std::time::Duration;
///
/// let cache = MemoryCache::new();
/// let map: KvMap = [("k", "v")].into_iter().collect();
///
/// cache.set("doc", &map, Duration::ZERO).unwrap();
/// assert_eq!(cache.get("doc").unwrap(), Some(map));
/// ```
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (non-expired) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .values()
            .filter(|e| !e.expired(now))
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<KvMap>> {
        let mut entries = self.entries.lock();
        let expired = entries
            .get(key)
            .map_or(false, |entry| entry.expired(Instant::now()));
        if expired {
            entries.remove(key);
            log::debug!("cache entry '{key}' expired");
            return Ok(None);
        }
        Ok(entries.get(key).map(|entry| entry.map.clone()))
    }

    fn set(&self, key: &str, map: &KvMap, ttl: Duration) -> Result<()> {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            Some(Instant::now() + ttl)
        };
        self.entries.lock().insert(
            key.to_string(),
            Entry {
                map: map.clone(),
                expires_at,
            },
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.entries.lock().clear();
        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }
}
