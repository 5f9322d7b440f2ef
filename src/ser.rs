//! Serialization back to document text.
//!
//! The inverse of the parse engine: renders a [`KvMap`] as a document the
//! parser can re-consume. Each entry becomes the primary marker character,
//! the key, a newline, then the value verbatim. Entries are joined by a
//! blank line when spacing is requested, or packed with a single newline
//! otherwise.
//!
//! ## Round-trip asymmetry
//!
//! Values are emitted **verbatim, never re-escaped**. A value containing a
//! line that itself begins with a marker or comment character will therefore
//! not round-trip: the parser will read that line as a key declaration or
//! comment. This asymmetry is part of the format's compatibility surface and
//! is deliberately preserved rather than papered over with escaping.
//!
//! ## Usage
//!
//! ```rust
//! use kvtext::{to_string, KvMap};
//!
//! let map: KvMap = [("title", "Hello"), ("body", "line one\nline two")]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(
//!     to_string(&map, true),
//!     "@title\nHello\n\n@body\nline one\nline two"
//! );
//! assert_eq!(
//!     to_string(&map, false),
//!     "@title\nHello\n@body\nline one\nline two"
//! );
//! ```

use crate::options::Options;
use crate::KvMap;

/// The serializer.
///
/// Holds only immutable configuration (the marker set, for the primary
/// marker); like [`Parser`](crate::Parser) it is freely shareable across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    options: Options,
}

impl Serializer {
    /// Creates a serializer with the given options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Serializer { options }
    }

    /// Renders `map` as document text.
    ///
    /// With `spaced` set, entries are separated by one blank line (which the
    /// parser discards as the separator); otherwise a single newline joins
    /// them. An empty map renders as the empty string, not a newline.
    #[must_use]
    pub fn to_string(&self, map: &KvMap, spaced: bool) -> String {
        let marker = self.options.markers.primary();
        let joiner = if spaced { "\n\n" } else { "\n" };
        let mut out = String::new();
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                out.push_str(joiner);
            }
            out.push(marker);
            out.push_str(key);
            out.push('\n');
            out.push_str(value);
        }
        out
    }
}
