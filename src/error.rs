//! Error types for the collaborator layer.
//!
//! Parsing and serialization themselves are total: every character sequence,
//! including empty or malformed-looking input, produces a result, and there
//! is no syntax-error concept in the grammar. The failure surfaces all
//! belong to the collaborators around the core — reading a file from disk,
//! decoding bytes, and talking to a cache backend.
//!
//! ## Examples
//!
//! ```rust
//! use kvtext::{Loader, Error};
//!
//! let loader = Loader::default();
//! match loader.load_path("/no/such/file".as_ref()) {
//!     Err(Error::Read { path, .. }) => assert!(path.ends_with("file")),
//!     other => panic!("expected read error, got {:?}", other.map(|_| ())),
//! }
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// All errors the crate can surface.
///
/// Only collaborator operations construct these; `parse` and `to_string`
/// cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    /// A source file could not be read.
    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO failure while reading from or writing to a stream.
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes were not valid UTF-8.
    #[error("invalid UTF-8 in input: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A cache backend reported a failure.
    ///
    /// Callers should treat this as best-effort acceleration gone missing
    /// and fall back to a fresh parse; [`Loader`](crate::Loader) already
    /// does.
    #[error("cache error: {0}")]
    Cache(String),

    /// Generic message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a file-read error carrying the offending path.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates an IO error from a display message.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a cache-backend error.
    pub fn cache<T: fmt::Display>(msg: T) -> Self {
        Error::Cache(msg.to_string())
    }

    /// Creates a generic error with a display message.
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
