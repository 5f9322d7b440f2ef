//! Configuration for parsing and serialization.
//!
//! This module provides the types that control how a document is scanned:
//!
//! - [`Options`]: Main configuration struct (builder-style)
//! - [`MarkerSet`]: The ordered set of characters that introduce a key line
//!
//! ## Examples
//!
//! ```rust
//! use kvtext::{Options, MarkerSet, parse_with_options};
//!
//! // '%' and '@' both declare keys; '%' is primary (first declared)
//! let options = Options::new()
//!     .with_markers(MarkerSet::from_chars(['%', '@']))
//!     .with_comments(false);
//!
//! let map = parse_with_options("%name\nAlice", &options);
//! assert_eq!(map.get("name"), Some("Alice"));
//! ```

use std::collections::HashSet;
use std::time::Duration;

/// The marker character used when no configuration supplies one.
pub const DEFAULT_MARKER: char = '@';

/// The character that introduces a comment line, when comments are enabled.
pub const COMMENT_CHAR: char = '#';

/// Default time-to-live handed to the cache collaborator.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// The ordered set of characters that introduce a key line.
///
/// Declaration order is meaningful: the first marker is the *primary* marker,
/// which the serializer uses for output. Membership testing is O(1).
///
/// A `MarkerSet` is never empty. Constructing one from an empty sequence
/// falls back to the single default marker `@`, so "no markers at all" is
/// unrepresentable.
///
/// # Examples
///
/// ```rust
/// use kvtext::MarkerSet;
///
/// let markers = MarkerSet::from_chars(['%', '@']);
/// assert_eq!(markers.primary(), '%');
/// assert!(markers.contains('@'));
/// assert!(!markers.contains('$'));
///
/// // Empty input collapses to the default
/// let markers = MarkerSet::from_chars([]);
/// assert_eq!(markers.primary(), '@');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    order: Vec<char>,
    members: HashSet<char>,
}

impl MarkerSet {
    /// Builds a marker set from characters in declaration order.
    ///
    /// Duplicates are dropped, keeping the first occurrence. An empty
    /// sequence yields the default set `{'@'}`.
    #[must_use]
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut order = Vec::new();
        let mut members = HashSet::new();
        for ch in chars {
            if members.insert(ch) {
                order.push(ch);
            }
        }
        if order.is_empty() {
            order.push(DEFAULT_MARKER);
            members.insert(DEFAULT_MARKER);
        }
        MarkerSet { order, members }
    }

    /// The primary marker: the first one declared. The serializer emits it.
    #[must_use]
    pub fn primary(&self) -> char {
        // Invariant: `order` is never empty.
        self.order[0]
    }

    /// O(1) membership test.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.members.contains(&ch)
    }

    /// The markers in declaration order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.order
    }

    /// Number of distinct markers. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`; present for API symmetry with collection types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        MarkerSet::from_chars([DEFAULT_MARKER])
    }
}

impl FromIterator<char> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        MarkerSet::from_chars(iter)
    }
}

/// Configuration for parsing, serialization, and the loader layer.
///
/// Immutable once constructed; a single `Options` may be shared across
/// threads and across any number of concurrent parse calls, since all scan
/// state is call-local.
///
/// # Examples
///
/// ```rust
/// use kvtext::{Options, MarkerSet};
/// use std::time::Duration;
///
/// let options = Options::new()
///     .with_markers(MarkerSet::from_chars(['@', '$']))
///     .with_comments(true)
///     .with_cache_ttl(Duration::from_secs(60))
///     .with_hash_content(false);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Characters that introduce a key line. Never empty.
    pub markers: MarkerSet,
    /// When true, lines whose first character is `#` are discarded
    /// (unless `#` is itself a marker, in which case it declares a key).
    pub comments: bool,
    /// Time-to-live for cached parse results. `Duration::ZERO` disables
    /// expiry.
    pub cache_ttl: Duration,
    /// When true, the loader mixes an xxh3 hash of the source text into the
    /// cache key so content edits invalidate stale entries automatically.
    pub hash_content: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            markers: MarkerSet::default(),
            comments: true,
            cache_ttl: DEFAULT_CACHE_TTL,
            hash_content: true,
        }
    }
}

impl Options {
    /// Creates the default options: marker `@`, comments enabled, 300-second
    /// cache TTL, content hashing on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the marker set.
    #[must_use]
    pub fn with_markers(mut self, markers: MarkerSet) -> Self {
        self.markers = markers;
        self
    }

    /// Enables or disables `#` comment lines.
    #[must_use]
    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    /// Sets the cache TTL used by [`Loader`](crate::Loader).
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Enables or disables content hashing in cache keys.
    #[must_use]
    pub fn with_hash_content(mut self, hash_content: bool) -> Self {
        self.hash_content = hash_content;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_marker_set_falls_back_to_default() {
        let markers = MarkerSet::from_chars([]);
        assert_eq!(markers.primary(), DEFAULT_MARKER);
        assert_eq!(markers.len(), 1);
    }

    #[test]
    fn test_primary_is_first_declared() {
        let markers = MarkerSet::from_chars(['$', '@', '%']);
        assert_eq!(markers.primary(), '$');
        assert_eq!(markers.as_slice(), &['$', '@', '%']);
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let markers = MarkerSet::from_chars(['@', '$', '@']);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers.primary(), '@');
    }

    #[test]
    fn test_membership() {
        let markers = MarkerSet::from_chars(['@', '$']);
        assert!(markers.contains('@'));
        assert!(markers.contains('$'));
        assert!(!markers.contains('#'));
    }

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert_eq!(options.markers.primary(), '@');
        assert!(options.comments);
        assert_eq!(options.cache_ttl, DEFAULT_CACHE_TTL);
        assert!(options.hash_content);
    }
}
