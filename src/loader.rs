//! File loading and cache orchestration.
//!
//! The parse engine itself never touches the file system or a cache. This
//! module is the layer that brackets it: read the raw text, compute a
//! logical cache key, consult the injected [`Cache`], and only run the
//! engine on a miss.
//!
//! The cache is best-effort. A backend error on lookup or store is logged
//! and the loader falls back to a fresh parse; it never corrupts or skips
//! one. The only fatal failure is the file read itself.
//!
//! ## Cache keys
//!
//! With [`Options::hash_content`](crate::Options) enabled (the default),
//! the key mixes an xxh3 hash of the source text into the document name, so
//! editing a document automatically invalidates its stale entry without any
//! explicit bookkeeping. With it disabled, the key is the name alone and
//! staleness is governed purely by the TTL.

use std::path::Path;
use std::time::Duration;

use xxhash_rust::xxh3::xxh3_64;

use crate::cache::Cache;
use crate::options::Options;
use crate::parse::Parser;
use crate::{Error, KvMap, Result};

/// Loads documents from disk (or memory) with optional cached parsing.
///
/// # Examples
///
/// ```rust
/// use kvtext::{Loader, MemoryCache, Options};
///
/// let loader = Loader::new(Options::default()).with_cache(Box::new(MemoryCache::new()));
/// let map = loader.parse_str("greeting", "@hello\nworld");
/// assert_eq!(map.get("hello"), Some("world"));
/// ```
pub struct Loader {
    parser: Parser,
    cache: Option<Box<dyn Cache>>,
}

impl Default for Loader {
    fn default() -> Self {
        Loader::new(Options::default())
    }
}

impl Loader {
    /// Creates a loader with no cache; every call parses fresh.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Loader {
            parser: Parser::new(options),
            cache: None,
        }
    }

    /// Attaches a cache backend.
    #[must_use]
    pub fn with_cache(mut self, cache: Box<dyn Cache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Reads and parses the document at `path`.
    ///
    /// # Errors
    ///
    /// Fails only if the file cannot be read; the read failure is surfaced
    /// as [`Error::Read`] with the offending path and is not retried.
    pub fn load_path(&self, path: &Path) -> Result<KvMap> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Ok(self.parse_str(&path.to_string_lossy(), &text))
    }

    /// Parses `text`, consulting the cache under the logical name `name`.
    ///
    /// Infallible: cache errors are logged and degrade to a fresh parse.
    pub fn parse_str(&self, name: &str, text: &str) -> KvMap {
        let key = self.cache_key(name, text);

        if let Some(cached) = self.cache_get(&key) {
            return cached;
        }
        let map = self.parser.parse(text);
        self.cache_put(&key, &map);
        map
    }

    /// Drops every cached entry. A no-op without a cache.
    pub fn flush_cache(&self) -> Result<()> {
        match &self.cache {
            Some(cache) => cache.flush(),
            None => Ok(()),
        }
    }

    fn cache_key(&self, name: &str, text: &str) -> String {
        if self.parser.options().hash_content {
            format!("{name}:{:016x}", xxh3_64(text.as_bytes()))
        } else {
            name.to_string()
        }
    }

    fn cache_get(&self, key: &str) -> Option<KvMap> {
        let cache = self.cache.as_ref()?;
        if !cache.is_available() {
            return None;
        }
        match cache.get(key) {
            Ok(Some(map)) => {
                log::debug!("cache hit for '{key}'");
                Some(map)
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("cache lookup for '{key}' failed, parsing fresh: {e}");
                None
            }
        }
    }

    fn cache_put(&self, key: &str, map: &KvMap) {
        let Some(cache) = &self.cache else { return };
        if !cache.is_available() {
            return;
        }
        let ttl: Duration = self.parser.options().cache_ttl;
        if let Err(e) = cache.set(key, map, ttl) {
            log::warn!("cache store for '{key}' failed: {e}");
        }
    }
}
