//! Error types for the dialer core.
//!
//! The recipe model itself is total: bad hydration input is a no-op,
//! out-of-range adjustments clamp, and unknown lookups fall back to
//! defaults. [`DialerError`] therefore only covers the I/O boundary —
//! the durable rating/notes store and CLI argument resolution.

use thiserror::Error;

/// Result type alias using [`DialerError`].
pub type Result<T> = std::result::Result<T, DialerError>;

/// Unified error type for all dialer I/O operations.
#[derive(Error, Debug)]
pub enum DialerError {
    // ============ Durable Store Errors ============
    /// Error reading the rating/notes file
    #[error("Failed to read notes store '{path}': {source}")]
    StoreRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the rating/notes file
    #[error("Failed to write notes store '{path}': {source}")]
    StoreWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored record could not be encoded or decoded
    #[error("Notes store format error: {source}")]
    StoreFormat {
        #[from]
        source: serde_json::Error,
    },

    // ============ CLI Resolution Errors ============
    /// Unknown brew method name given on the command line
    #[error("Unknown brew method '{name}'")]
    UnknownMethod { name: String },

    /// Unknown grinder id given on the command line
    #[error("Unknown grinder '{id}'")]
    UnknownGrinder { id: String },

    /// Rating outside the 0-10 scale
    #[error("Rating {value} is out of range (expected 0-10)")]
    RatingOutOfRange { value: u32 },
}

impl DialerError {
    /// Create a store read error
    pub fn store_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::StoreRead {
            path: path.into(),
            source,
        }
    }

    /// Create a store write error
    pub fn store_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::StoreWrite {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown-method error
    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self::UnknownMethod { name: name.into() }
    }

    /// Create an unknown-grinder error
    pub fn unknown_grinder(id: impl Into<String>) -> Self {
        Self::UnknownGrinder { id: id.into() }
    }
}
