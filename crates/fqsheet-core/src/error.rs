//! Common error type definitions.

use strum::{AsRefStr, IntoStaticStr};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Categories of errors that can occur in fqsheet-core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Bucket or object does not exist.
    NotFound,
    /// The storage backend denied the operation.
    AccessDenied,
    /// Any other error reported by the storage backend.
    Backend,
    /// The sample filter did not compile to a valid pattern.
    InvalidFilter,
    /// A serialized sample sheet could not be parsed.
    InvalidSheet,
    /// Reading or writing a local file failed.
    Io,
}

/// A structured error type for fqsheet-core operations.
#[derive(Debug, Error)]
#[error("{kind:?}{}", message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional error message.
    pub message: Option<String>,
    /// Optional source error.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a source error to this error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Creates a new not found error.
    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    /// Creates a new access denied error.
    pub fn access_denied() -> Self {
        Self::new(ErrorKind::AccessDenied)
    }

    /// Creates a new backend error.
    pub fn backend() -> Self {
        Self::new(ErrorKind::Backend)
    }

    /// Creates a new invalid filter error.
    pub fn invalid_filter() -> Self {
        Self::new(ErrorKind::InvalidFilter)
    }

    /// Creates a new invalid sheet error.
    pub fn invalid_sheet() -> Self {
        Self::new(ErrorKind::InvalidSheet)
    }

    /// Creates a new io error.
    pub fn io() -> Self {
        Self::new(ErrorKind::Io)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error kind as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind.into()
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io().with_message(err.to_string()).with_source(err)
    }
}
