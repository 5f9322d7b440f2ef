//! Loading documents from disk with an injected parse cache.
//!
//! Run with: cargo run --example cached_loading

use std::error::Error;
use std::fs;

use kvtext::{Loader, MemoryCache, Options};

fn main() -> Result<(), Box<dyn Error>> {
    let dir = std::env::temp_dir().join("kvtext-demo");
    fs::create_dir_all(&dir)?;
    let path = dir.join("site.kv");
    fs::write(&path, "@title\nMy Site\n\n@tagline\ntext all the way down")?;

    let loader = Loader::new(Options::default()).with_cache(Box::new(MemoryCache::new()));

    // First load reads and parses; the second is served from the cache.
    let map = loader.load_path(&path)?;
    println!("title   = {:?}", map.get("title"));
    println!("tagline = {:?}", map.get("tagline"));

    let again = loader.load_path(&path)?;
    assert_eq!(map, again);
    println!("✓ Cache hit returned the same document");

    // Editing the file changes its content hash, so the stale entry is
    // ignored without any explicit invalidation.
    fs::write(&path, "@title\nMy Edited Site")?;
    let edited = loader.load_path(&path)?;
    assert_eq!(edited.get("title"), Some("My Edited Site"));
    println!("✓ Content edit invalidated the cache automatically");

    fs::remove_dir_all(&dir)?;
    Ok(())
}
