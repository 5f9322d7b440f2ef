//! The parse engine.
//!
//! A single forward pass over the normalized line sequence, no lookahead and
//! no backtracking. Each line is classified, in precedence order, as a
//! comment, an escaped literal, a key declaration, a blank, or value
//! content.
//!
//! The one genuinely subtle piece is blank-line classification. A run of
//! blank lines is ambiguous while it is being read: it may be content inside
//! the value being accumulated, or the visual separator before the next key.
//! Rather than look ahead, the scanner counts the run in `pending_blanks`
//! and resolves it when the next non-blank line arrives:
//!
//! - next line is value content → every pending blank becomes a literal
//!   newline in the value;
//! - next line declares a key → exactly one blank is the separator and is
//!   discarded, the remaining `n-1` become literal newlines at the end of
//!   the value being closed;
//! - end of input → the whole run is discarded.
//!
//! There is no failure mode: any input parses. A line that is not
//! recognizably a key, comment, or escape is simply value text.
//!
//! ## Usage
//!
//! Most users should use the crate-root functions:
//!
//! ```rust
//! use kvtext::parse;
//!
//! let map = parse("@title\nHello\n\n@body\nfirst line\nsecond line");
//! assert_eq!(map.get("title"), Some("Hello"));
//! assert_eq!(map.get("body"), Some("first line\nsecond line"));
//! ```

use crate::normalize::logical_lines;
use crate::options::{Options, COMMENT_CHAR};
use crate::KvMap;

/// The parser.
///
/// Holds only immutable configuration; all scan state is local to each
/// [`Parser::parse`] call, so a single `Parser` may be shared across threads
/// and invoked concurrently without locking.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: Options,
}

impl Parser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Parser { options }
    }

    /// The configuration this parser was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parses a document into an insertion-ordered key/value map.
    ///
    /// Total over its input domain: every string, including the empty
    /// string, produces a map. Keys are unique in the result; repeated
    /// declarations merge per [`KvMap::merge`].
    #[must_use]
    pub fn parse(&self, input: &str) -> KvMap {
        let mut map = KvMap::new();
        let mut scan = Scan::default();
        for line in logical_lines(input) {
            self.step(line, &mut scan, &mut map);
        }
        scan.finish(&mut map);
        map
    }

    /// Classifies one logical line and advances the scan state.
    fn step(&self, line: &str, scan: &mut Scan, map: &mut KvMap) {
        let markers = &self.options.markers;
        let comments = self.options.comments;
        let first = line.chars().next();

        // Comment: leading '#', no preceding whitespace. When '#' is itself
        // an active marker the key rule wins and the line declares a key.
        if comments && first == Some(COMMENT_CHAR) && !markers.contains(COMMENT_CHAR) {
            return;
        }

        // Escape: backslash immediately followed by a marker (or '#' when
        // comments are on) yields the rest of the line as literal value
        // text. Positional only; backslashes elsewhere are untouched.
        if first == Some('\\') {
            if let Some(second) = line[1..].chars().next() {
                if markers.contains(second) || (comments && second == COMMENT_CHAR) {
                    scan.push_value(&line[1..]);
                    return;
                }
            }
        }

        // Key declaration: first character is an active marker. The key is
        // everything after the marker, possibly empty.
        if let Some(ch) = first {
            if markers.contains(ch) {
                scan.begin_key(&line[ch.len_utf8()..], map);
                return;
            }
        }

        // Blank: empty or all-whitespace. Classification is deferred.
        if line.trim().is_empty() {
            scan.push_blank();
            return;
        }

        scan.push_value(line);
    }
}

/// Call-local scan state.
///
/// `has_value` distinguishes "buffer empty because nothing was written" from
/// "buffer empty because an explicit empty value was written", which decides
/// whether the next value line needs a separating newline.
#[derive(Debug, Default)]
struct Scan {
    /// `None` until the first key line; orphan text accumulates here and
    /// flushes under the empty-string key.
    current_key: Option<String>,
    value: String,
    has_value: bool,
    /// Blank lines seen since the last non-blank line, not yet classified
    /// as separator vs. content.
    pending_blanks: usize,
}

impl Scan {
    /// Whether there is an entry to attach content to: a declared key, or
    /// orphan value text already accumulated.
    fn active(&self) -> bool {
        self.current_key.is_some() || self.has_value
    }

    fn push_blank(&mut self) {
        // Blank lines before any key or content never surface.
        if self.active() {
            self.pending_blanks += 1;
        }
    }

    fn push_value(&mut self, line: &str) {
        // The run was not followed by a key, so every pending blank is
        // content.
        for _ in 0..self.pending_blanks {
            self.value.push('\n');
        }
        self.pending_blanks = 0;
        if self.has_value {
            self.value.push('\n');
        }
        self.value.push_str(line);
        self.has_value = true;
    }

    /// Closes the current entry and starts one for `key`.
    fn begin_key(&mut self, key: &str, map: &mut KvMap) {
        // One pending blank is the separator and is discarded; the rest
        // belong to the value being closed. With no active entry the whole
        // run is discarded.
        if self.pending_blanks > 0 {
            if self.active() {
                for _ in 0..self.pending_blanks - 1 {
                    self.value.push('\n');
                }
            }
            self.pending_blanks = 0;
        }
        self.flush(map);
        self.current_key = Some(key.to_string());
    }

    /// Writes the accumulating entry into the map.
    ///
    /// A no-op when no key was ever declared and no value text exists, so a
    /// truly empty document yields an empty map rather than a spurious
    /// empty-string entry.
    fn flush(&mut self, map: &mut KvMap) {
        if self.current_key.is_none() && !self.has_value {
            return;
        }
        let key = self.current_key.take().unwrap_or_default();
        map.merge(key, std::mem::take(&mut self.value));
        self.has_value = false;
    }

    /// End of input: trailing blanks never become content.
    fn finish(&mut self, map: &mut KvMap) {
        self.pending_blanks = 0;
        self.flush(map);
    }
}
