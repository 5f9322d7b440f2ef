//! # kvtext
//!
//! A parser and serializer for the kvtext format: a line-oriented,
//! plain-text key/value format with multi-line values.
//!
//! ## What is kvtext?
//!
//! A kvtext document is a flat sequence of entries. A line starting with a
//! marker character (`@` by default) declares a key; every following line is
//! that key's value, until the next key line:
//!
//! ```text
//! @title
//! Hello
//!
//! @body
//! first line
//! second line
//! ```
//!
//! ## Key Features
//!
//! - **Total parsing**: every input parses — there is no syntax-error
//!   concept; unrecognized lines are simply value content
//! - **Multi-line values**: values span lines, with precise rules for when
//!   blank lines are content and when they are entry separators
//! - **Duplicate-key merging**: redeclaring a key concatenates values
//!   instead of overwriting
//! - **Configurable markers**: any set of characters can declare keys; the
//!   first configured marker drives serialization
//! - **Comments and escapes**: `#` lines are stripped (optional), and `\@`
//!   / `\#` at line start yield the literal character
//! - **Ordered results**: entries come back in document order, backed by
//!   `IndexMap`
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kvtext = "0.1"
//! ```
//!
//! ### Parsing and serializing
//!
//! ```rust
//! use kvtext::{parse, to_string};
//!
//! let map = parse("@name\nAlice\n\n@bio\nwrites Rust\nlikes text formats");
//! assert_eq!(map.get("name"), Some("Alice"));
//! assert_eq!(map.get("bio"), Some("writes Rust\nlikes text formats"));
//!
//! // Round-trip: spaced output re-parses to the same values
//! let text = to_string(&map, true);
//! assert_eq!(parse(&text), map);
//! ```
//!
//! ### Custom markers
//!
//! ```rust
//! use kvtext::{parse_with_options, MarkerSet, Options};
//!
//! let options = Options::new().with_markers(MarkerSet::from_chars(['%']));
//! let map = parse_with_options("%key\n@value with literal at\n", &options);
//! assert_eq!(map.get("key"), Some("@value with literal at"));
//! ```
//!
//! ### Cached loading
//!
//! File access and caching live in a layer *around* the parser, never
//! inside it:
//!
//! ```rust
//! use kvtext::{Loader, MemoryCache, Options};
//!
//! let loader = Loader::new(Options::default())
//!     .with_cache(Box::new(MemoryCache::new()));
//! let map = loader.parse_str("doc", "@k\nv");
//! assert_eq!(map.get("k"), Some("v"));
//! ```
//!
//! ## Format Specification
//!
//! The full format rules, including blank-line arithmetic and the
//! documented serializer asymmetry, live in the [`format`] module docs.
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: a single O(n) forward pass, no lookahead, no backtracking
//! - **Serialization**: O(n) concatenation into one buffer
//! - **Concurrency**: `Parser` and `Serializer` hold only immutable
//!   configuration; share them across threads freely

pub mod cache;
pub mod error;
pub mod format;
pub mod loader;
pub mod macros;
pub mod map;
pub mod normalize;
pub mod options;
pub mod parse;
pub mod ser;

pub use cache::{Cache, MemoryCache};
pub use error::{Error, Result};
pub use loader::Loader;
pub use map::KvMap;
pub use options::{MarkerSet, Options, COMMENT_CHAR, DEFAULT_MARKER};
pub use parse::Parser;
pub use ser::Serializer;

use std::io;

/// Parses a document with the default options (marker `@`, comments on).
///
/// Total: any input, including the empty string, produces a map.
///
/// # Examples
///
/// ```rust
/// use kvtext::parse;
///
/// let map = parse("@k\nv");
/// assert_eq!(map.get("k"), Some("v"));
/// assert!(parse("").is_empty());
/// ```
#[must_use]
pub fn parse(input: &str) -> KvMap {
    Parser::default().parse(input)
}

/// Parses a document with custom options.
///
/// # Examples
///
/// ```rust
/// use kvtext::{parse_with_options, Options};
///
/// let options = Options::new().with_comments(false);
/// let map = parse_with_options("@k\n# kept\n", &options);
/// assert_eq!(map.get("k"), Some("# kept"));
/// ```
#[must_use]
pub fn parse_with_options(input: &str, options: &Options) -> KvMap {
    Parser::new(options.clone()).parse(input)
}

/// Parses a document from raw bytes.
///
/// # Errors
///
/// Returns [`Error::Utf8`] if the bytes are not valid UTF-8; parsing itself
/// cannot fail.
pub fn parse_slice(input: &[u8]) -> Result<KvMap> {
    let s = std::str::from_utf8(input)?;
    Ok(parse(s))
}

/// Parses a document from an I/O stream.
///
/// # Errors
///
/// Returns an error if reading fails; parsing itself cannot fail.
pub fn parse_reader<R: io::Read>(mut reader: R) -> Result<KvMap> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(parse(&text))
}

/// Serializes a map with the default options (primary marker `@`).
///
/// With `spaced` set, entries are separated by one blank line; otherwise by
/// a single newline. An empty map serializes to the empty string.
///
/// # Examples
///
/// ```rust
/// use kvtext::{kvmap, to_string};
///
/// let map = kvmap! { "a" => "1", "b" => "2" };
/// assert_eq!(to_string(&map, true), "@a\n1\n\n@b\n2");
/// assert_eq!(to_string(&map, false), "@a\n1\n@b\n2");
/// ```
#[must_use]
pub fn to_string(map: &KvMap, spaced: bool) -> String {
    Serializer::default().to_string(map, spaced)
}

/// Serializes a map using the primary marker from `options`.
#[must_use]
pub fn to_string_with_options(map: &KvMap, spaced: bool, options: &Options) -> String {
    Serializer::new(options.clone()).to_string(map, spaced)
}

/// Serializes a map to a writer.
///
/// # Errors
///
/// Returns an error only if writing fails.
pub fn to_writer<W: io::Write>(mut writer: W, map: &KvMap, spaced: bool) -> Result<()> {
    let text = to_string(map, spaced);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
