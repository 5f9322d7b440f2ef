//! Ordered map type for parsed documents.
//!
//! This module provides [`KvMap`], a wrapper around [`IndexMap`] that keeps
//! entries in insertion order. Order matters here: the serializer emits
//! entries in the order the parser produced them, so a parse/serialize cycle
//! preserves the layout of a document.
//!
//! ## Why IndexMap?
//!
//! `IndexMap` instead of `HashMap` ensures:
//!
//! - **Deterministic output**: entries serialize in a consistent order
//! - **Iteration order**: entries iterate in document order
//! - **Predictable tests**: output is stable across runs
//!
//! ## Examples
//!
//! ```rust
//! use kvtext::KvMap;
//!
//! let mut map = KvMap::new();
//! map.insert("name".to_string(), "Alice".to_string());
//! map.insert("bio".to_string(), "line one\nline two".to_string());
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name"), Some("Alice"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An insertion-ordered map of string keys to string values.
///
/// Keys are unique: the parser merges repeated declarations of the same key
/// via [`KvMap::merge`] rather than overwriting. Values are arbitrary text
/// and may contain embedded newlines.
///
/// # Examples
///
/// ```rust
/// use kvtext::KvMap;
///
/// let mut map = KvMap::new();
/// map.insert("first".to_string(), "1".to_string());
/// map.insert("second".to_string(), "2".to_string());
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KvMap(IndexMap<String, String>);

impl KvMap {
    /// Creates an empty `KvMap`.
    #[must_use]
    pub fn new() -> Self {
        KvMap(IndexMap::new())
    }

    /// Creates an empty `KvMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        KvMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present.
    ///
    /// This overwrites. The parser never calls it for repeated keys; it uses
    /// [`KvMap::merge`] instead.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Inserts a key-value pair, concatenating with any existing value.
    ///
    /// Repeated declarations of a key join old and new with a single
    /// newline. When either side is empty the newline is omitted, so
    /// merging an empty value never manufactures a blank line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvtext::KvMap;
    ///
    /// let mut map = KvMap::new();
    /// map.merge("k".to_string(), "A".to_string());
    /// map.merge("k".to_string(), "B".to_string());
    /// assert_eq!(map.get("k"), Some("A\nB"));
    ///
    /// map.merge("k".to_string(), String::new());
    /// assert_eq!(map.get("k"), Some("A\nB"));
    /// ```
    pub fn merge(&mut self, key: String, value: String) {
        match self.0.get_mut(&key) {
            Some(existing) => {
                if !existing.is_empty() && !value.is_empty() {
                    existing.push('\n');
                }
                existing.push_str(&value);
            }
            None => {
                self.0.insert(key, value);
            }
        }
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// Uses a shift-remove so the order of the remaining entries is
    /// preserved.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl From<HashMap<String, String>> for KvMap {
    fn from(map: HashMap<String, String>) -> Self {
        KvMap(map.into_iter().collect())
    }
}

impl From<KvMap> for HashMap<String, String> {
    fn from(map: KvMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for KvMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KvMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for KvMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        KvMap(IndexMap::from_iter(iter))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for KvMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        KvMap(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}
