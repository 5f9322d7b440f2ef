//! The kvtext format, as implemented by this crate.
//!
//! # Overview
//!
//! kvtext is a plain-text, line-oriented key/value format. A document is a
//! sequence of entries; each entry is a key line followed by the lines of
//! its value:
//!
//! ```text
//! @title
//! A multi-line value
//! continues until the next key
//!
//! @author
//! Alice
//! ```
//!
//! Every value is text. There are no typed values, no nesting, and no
//! quoting: the format trades expressiveness for being trivially editable
//! by hand and byte-transparent for arbitrary text content.
//!
//! # Line endings
//!
//! `\n`, `\r\n`, and bare `\r` are all accepted and split lines
//! identically. Output always uses `\n`.
//!
//! # Key lines
//!
//! A line whose *first* character is an active marker declares a key. The
//! key is everything after the marker, and may be empty. The default marker
//! set is `{'@'}`; any non-empty ordered set of characters may be
//! configured, and the first one declared is the *primary* marker used for
//! output. A marker anywhere other than the first character of a line is
//! ordinary text:
//!
//! ```text
//! @contact
//! mail me @home    ; the second '@' is literal
//! ```
//!
//! # Values, blank lines, and separators
//!
//! Value lines accumulate verbatim under the most recent key. Blank lines
//! (empty or all-whitespace) are ambiguous until the next non-blank line:
//!
//! - followed by more value text → each blank is a literal newline in the
//!   value;
//! - followed by a key line → exactly one blank is the visual separator and
//!   is discarded, any excess becomes trailing newlines of the value just
//!   closed;
//! - at end of input → discarded entirely.
//!
//! So one blank line between entries is pure layout, two leave one real
//! newline at the end of the earlier value, and so on.
//!
//! # Duplicate keys
//!
//! Declaring a key twice concatenates the values, joined by a single
//! newline (no newline is added when either side is empty). The result map
//! therefore always has unique keys, in first-declaration order.
//!
//! # Orphan text
//!
//! Text before the first key line is kept under the empty-string key:
//!
//! ```text
//! preamble text
//! @first
//! ...
//! ```
//!
//! parses to `{"": "preamble text", "first": "..."}`.
//!
//! # Comments
//!
//! When enabled (the default), a line whose first character is `#` is
//! discarded. The `#` must be the very first character; a line starting
//! with whitespace then `#` is value text. A comment line is invisible to
//! blank-line counting: it neither interrupts a blank run nor counts as a
//! blank itself. If `#` is configured as a marker, it declares keys and the
//! comment rule does not apply.
//!
//! # Escaping
//!
//! A backslash at the start of a line, immediately followed by an active
//! marker or (with comments enabled) `#`, is stripped; the rest of the line
//! is value text. This is the only escape in the format and it is strictly
//! positional:
//!
//! ```text
//! @k
//! \@not-a-key      ; value line "@not-a-key"
//! \# not a comment ; value line "# not a comment"
//! a\@b             ; backslash not at line start: literal "a\@b"
//! ```
//!
//! # Serialized form
//!
//! Serialization renders each entry as the primary marker, the key, a
//! newline, then the value verbatim. Entries are joined by a blank line in
//! spaced mode or a bare newline in compact mode. An empty map serializes
//! to the empty string.
//!
//! Values are **not re-escaped** on output. A value containing a line that
//! begins with a marker or `#` produces a document that parses differently
//! than the map it came from. This asymmetry is part of the format's
//! compatibility surface; tools that need such values to survive a
//! round-trip must escape them before insertion.
