//! Loader and cache integration: file reading, cache hit/miss behavior,
//! content-hash invalidation, and degradation when a backend fails.

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use kvtext::{Cache, Error, KvMap, Loader, MemoryCache, Options, Result};

/// A cache that counts operations, wrapping a real in-memory backend.
#[derive(Clone, Default)]
struct CountingCache {
    inner: Arc<MemoryCache>,
    gets: Arc<AtomicUsize>,
    hits: Arc<AtomicUsize>,
    sets: Arc<AtomicUsize>,
}

impl Cache for CountingCache {
    fn get(&self, key: &str) -> Result<Option<KvMap>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        let found = self.inner.get(key)?;
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }
        Ok(found)
    }

    fn set(&self, key: &str, map: &KvMap, ttl: Duration) -> Result<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, map, ttl)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.inner.delete(key)
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[test]
fn test_load_path_parses_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.kv");
    fs::write(&path, "@title\nHello\n\n@body\ntext").unwrap();

    let map = Loader::default().load_path(&path).unwrap();
    assert_eq!(map.get("title"), Some("Hello"));
    assert_eq!(map.get("body"), Some("text"));
}

#[test]
fn test_load_path_missing_file_surfaces_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.kv");

    match Loader::default().load_path(&path) {
        Err(Error::Read { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected read error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_second_load_is_a_cache_hit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.kv");
    fs::write(&path, "@k\nv").unwrap();

    let cache = CountingCache::default();
    let loader = Loader::default().with_cache(Box::new(cache.clone()));

    loader.load_path(&path).unwrap();
    loader.load_path(&path).unwrap();

    assert_eq!(cache.gets.load(Ordering::SeqCst), 2);
    assert_eq!(cache.hits.load(Ordering::SeqCst), 1);
    assert_eq!(cache.sets.load(Ordering::SeqCst), 1);
}

#[test]
fn test_content_edit_invalidates_hashed_cache_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.kv");
    fs::write(&path, "@k\nold").unwrap();

    let loader = Loader::default().with_cache(Box::new(MemoryCache::new()));
    assert_eq!(loader.load_path(&path).unwrap().get("k"), Some("old"));

    fs::write(&path, "@k\nnew").unwrap();
    // Content hash changed, so the stale entry is never consulted.
    assert_eq!(loader.load_path(&path).unwrap().get("k"), Some("new"));
}

#[test]
fn test_without_content_hash_stale_entry_wins_until_flushed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.kv");
    fs::write(&path, "@k\nold").unwrap();

    let loader = Loader::new(Options::new().with_hash_content(false))
        .with_cache(Box::new(MemoryCache::new()));
    assert_eq!(loader.load_path(&path).unwrap().get("k"), Some("old"));

    fs::write(&path, "@k\nnew").unwrap();
    // Plain name keys cannot see the edit; the cached map is returned.
    assert_eq!(loader.load_path(&path).unwrap().get("k"), Some("old"));

    loader.flush_cache().unwrap();
    assert_eq!(loader.load_path(&path).unwrap().get("k"), Some("new"));
}

#[test]
fn test_unavailable_cache_is_bypassed() {
    struct OfflineCache;

    impl Cache for OfflineCache {
        fn get(&self, _key: &str) -> Result<Option<KvMap>> {
            panic!("must not be consulted while unavailable");
        }
        fn set(&self, _key: &str, _map: &KvMap, _ttl: Duration) -> Result<()> {
            panic!("must not be consulted while unavailable");
        }
        fn delete(&self, _key: &str) -> Result<()> {
            Ok(())
        }
        fn flush(&self) -> Result<()> {
            Ok(())
        }
        fn is_available(&self) -> bool {
            false
        }
    }

    let loader = Loader::default().with_cache(Box::new(OfflineCache));
    let map = loader.parse_str("doc", "@k\nv");
    assert_eq!(map.get("k"), Some("v"));
}

#[test]
fn test_cache_failure_never_corrupts_the_parse() {
    struct FlakyCache;

    impl Cache for FlakyCache {
        fn get(&self, _key: &str) -> Result<Option<KvMap>> {
            Err(Error::cache("read timeout"))
        }
        fn set(&self, _key: &str, _map: &KvMap, _ttl: Duration) -> Result<()> {
            Err(Error::cache("write timeout"))
        }
        fn delete(&self, _key: &str) -> Result<()> {
            Err(Error::cache("delete timeout"))
        }
        fn flush(&self) -> Result<()> {
            Err(Error::cache("flush timeout"))
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.kv");
    fs::write(&path, "@k\nv").unwrap();

    let loader = Loader::default().with_cache(Box::new(FlakyCache));
    let map = loader.load_path(&path).unwrap();
    assert_eq!(map.get("k"), Some("v"));
}
