//! Error handling for pushback
//!
//! Provides error types for each layer of outline extraction:
//! - Acf errors (reading and parsing the aircraft description file)
//! - Outline errors (missing properties, invalid segment lists)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Aircraft file error type
///
/// Represents failures of the property store to produce a parsed file.
#[derive(Error, Debug)]
pub enum AcfError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The path that failed to read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file has no content
    #[error("Empty aircraft file")]
    Empty,

    /// The first line is not a byte-order marker
    #[error("Invalid byte-order marker '{marker}' (expected 'I' or 'A')")]
    BadMarker {
        /// The offending first line.
        marker: String,
    },

    /// The second line does not carry a version number
    #[error("Invalid version line '{line}'")]
    BadVersion {
        /// The offending version line.
        line: String,
    },

    /// The third line is not the `ACF` tag
    #[error("Missing ACF tag, found '{line}'")]
    MissingAcfTag {
        /// The line found in place of the tag.
        line: String,
    },
}

/// Outline extraction error type
///
/// Any of these aborts the whole extraction; no partial outline is returned.
#[derive(Error, Debug)]
pub enum OutlineError {
    /// A required property is absent from the aircraft file
    #[error("Property {key} not found")]
    MissingProperty {
        /// The full key path that was looked up.
        key: String,
    },

    /// The aircraft file could not be parsed
    #[error(transparent)]
    Acf(#[from] AcfError),

    /// A segment ID list exceeds its capacity
    #[error("Too many wing segments: {len} (max {max})")]
    TooManySegments {
        /// The requested list length.
        len: usize,
        /// The list capacity.
        max: usize,
    },

    /// The file asks for more outline points than can be allocated
    #[error("Cannot allocate {points} outline points")]
    TooManyPoints {
        /// The requested point count.
        points: usize,
    },
}

impl OutlineError {
    /// Create a missing-property error for a key path
    pub fn missing(key: impl Into<String>) -> Self {
        OutlineError::MissingProperty { key: key.into() }
    }
}

/// Main error type for pushback
///
/// Returned by the top-level report API; wraps the per-layer errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Aircraft file error
    #[error(transparent)]
    Acf(AcfError),

    /// Outline extraction error
    #[error(transparent)]
    Outline(OutlineError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<AcfError> for Error {
    fn from(err: AcfError) -> Self {
        Error::Acf(err)
    }
}

impl From<OutlineError> for Error {
    fn from(err: OutlineError) -> Self {
        // Flatten so callers can match on the parse failure directly
        match err {
            OutlineError::Acf(acf) => Error::Acf(acf),
            other => Error::Outline(other),
        }
    }
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a missing property error
    pub fn is_missing_property(&self) -> bool {
        matches!(self, Error::Outline(OutlineError::MissingProperty { .. }))
    }

    /// Check if the aircraft file itself could not be read or parsed
    pub fn is_acf_error(&self) -> bool {
        matches!(self, Error::Acf(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
