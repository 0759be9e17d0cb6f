//! Error types for shelter store operations.

use thiserror::Error;

/// All errors that can occur while configuring, connecting to, or operating
/// on the shelter collection.
///
/// Only construction-time errors ever reach callers of the public adapter;
/// per-call failures in [`create`](crate::ShelterStore::create) and
/// [`read`](crate::ShelterStore::read) are absorbed into sentinel return
/// values. The `try_*` methods expose the full taxonomy.
#[derive(Debug, Error)]
pub enum ShelterError {
    /// Invalid connection configuration.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Failed to open the connection or pass the liveness check.
    #[error("{message}: {source}")]
    Connection {
        /// What the adapter was doing when the connection failed.
        message: String,
        /// The underlying driver error.
        #[source]
        source: mongodb::error::Error,
    },

    /// The server rejected the credentials.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Document rejected before it reached the driver.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// Insert failed at the driver or server.
    #[error("write failed: {0}")]
    Write(String),

    /// The server accepted the insert but did not confirm persistence.
    #[error("write was not acknowledged")]
    Unacknowledged,

    /// Find failed at the driver or server.
    #[error("query failed: {0}")]
    Query(String),

    /// Any other driver-level error.
    #[error("driver error: {0}")]
    Driver(String),
}

impl ShelterError {
    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        ShelterError::Configuration(msg.into())
    }

    /// Create a connection error wrapping the driver cause.
    pub fn connection(message: impl Into<String>, source: mongodb::error::Error) -> Self {
        ShelterError::Connection {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid-document error.
    pub fn invalid_document(msg: impl Into<String>) -> Self {
        ShelterError::InvalidDocument(msg.into())
    }

    /// Check if this is a connection error.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, ShelterError::Connection { .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ShelterError::Authentication(_))
    }

    /// Check if this error was raised by input validation rather than the
    /// driver.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ShelterError::InvalidDocument(_) | ShelterError::Configuration(_)
        )
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShelterError::Configuration(_) => ErrorKind::Configuration,
            ShelterError::Connection { .. } => ErrorKind::Connection,
            ShelterError::Authentication(_) => ErrorKind::Authentication,
            ShelterError::InvalidDocument(_) => ErrorKind::InvalidDocument,
            ShelterError::Write(_) | ShelterError::Unacknowledged => ErrorKind::Write,
            ShelterError::Query(_) => ErrorKind::Query,
            ShelterError::Driver(_) => ErrorKind::Driver,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<mongodb::error::Error> for ShelterError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind as DriverKind;

        let message = err.to_string();
        if matches!(
            err.kind.as_ref(),
            DriverKind::ServerSelection { .. } | DriverKind::Io(_)
        ) {
            return ShelterError::Connection {
                message,
                source: err,
            };
        }
        match err.kind.as_ref() {
            DriverKind::Authentication { .. } => ShelterError::Authentication(message),
            DriverKind::Write(_) => ShelterError::Write(message),
            DriverKind::Command(_) => ShelterError::Query(message),
            _ => ShelterError::Driver(message),
        }
    }
}

/// Result type alias for shelter store operations.
pub type Result<T> = std::result::Result<T, ShelterError>;

/// Error kind enumeration for pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration error.
    Configuration,
    /// Connection error.
    Connection,
    /// Authentication error.
    Authentication,
    /// Document validation error.
    InvalidDocument,
    /// Write error.
    Write,
    /// Query error.
    Query,
    /// Other driver error.
    Driver,
}
