//! Error types for the styling system.
//!
//! Every error here is a build-time error: it aborts construction of a whole
//! style set. Resolving styles and dispatching painters never fails.

use std::path::PathBuf;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or loading a style set.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An id was registered twice.
    #[error("Duplicate id '{0}'")]
    DuplicateId(String),

    /// An id reference does not resolve to anything registered so far.
    #[error("Unknown id '{0}'")]
    UnknownId(String),

    /// An id reference resolved to the wrong kind of object.
    #[error("Id '{id}' refers to a {found}, expected a {expected}")]
    WrongKind {
        id: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A binding pattern is not a valid regular expression.
    #[error("Invalid binding pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An enumerated constant (state, color type, direction, ...) is unknown.
    #[error("Unknown {kind} '{value}'")]
    UnknownConstant { kind: &'static str, value: String },

    /// A required attribute is missing.
    #[error("Element '{element}' is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// An attribute has a value of the right type but an invalid content.
    #[error("Invalid value for '{attribute}': {message}")]
    InvalidValue { attribute: String, message: String },

    /// The description document is not well-formed.
    #[error("Style description error: {0}")]
    Description(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an unknown-constant error.
    pub fn unknown_constant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownConstant {
            kind,
            value: value.into(),
        }
    }

    /// Create a missing-attribute error.
    pub fn missing_attribute(element: &'static str, attribute: &'static str) -> Self {
        Self::MissingAttribute { element, attribute }
    }

    /// Create a value error.
    pub fn invalid_value(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            attribute: attribute.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
