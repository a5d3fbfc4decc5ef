//! Error types for the relink library.
//!
//! This module provides the error hierarchy for all operations in the relink
//! library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a relink error.
///
/// # Examples
///
/// ```
/// use relink::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("index.html".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the relink library.
#[derive(Debug, Error)]
pub enum Error {
    /// A resolvable input could not be turned into a canonical path.
    ///
    /// Raised for document handles that are not registered in the document
    /// set. Strings always resolve.
    #[error("unable to determine a link: {input}")]
    UnresolvableInput {
        /// Description of the input that could not be resolved.
        input: String,
    },

    /// A linker was bound to a path that is not part of the document set.
    #[error("document not found in document set: {path}")]
    UnknownDocument {
        /// The canonical path that was requested.
        path: String,
    },

    /// A document match pattern could not be compiled.
    #[error("invalid match pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending glob pattern.
        pattern: String,
        /// The underlying glob error.
        #[source]
        source: globset::Error,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Returns true if this error means an input could not be resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use relink::Error;
    ///
    /// let err = Error::UnresolvableInput { input: "handle".into() };
    /// assert!(err.is_unresolvable());
    /// ```
    #[must_use]
    pub fn is_unresolvable(&self) -> bool {
        matches!(self, Self::UnresolvableInput { .. })
    }
}
