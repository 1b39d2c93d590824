//! Error type definitions for the playlist ingestion service

use thiserror::Error;

/// Top-level application error type
///
/// This enum represents all possible errors that can occur in the application.
/// It uses `thiserror` to provide automatic error trait implementations and
/// proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Failures while obtaining raw playlist text
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Failures while committing channels to the store
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Errors raised while obtaining raw playlist text
///
/// A fetch is a single attempt; none of these are retried. The underlying
/// cause text is preserved so it can be surfaced verbatim to the caller.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Non-success HTTP status from the playlist host
    #[error("HTTP error: {status} {reason} - URL: {url}")]
    HttpStatus {
        status: u16,
        reason: String,
        url: String,
    },

    /// Transport-level failure (connect, timeout, TLS)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Local playlist file could not be read
    #[error("Failed to read playlist file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Content could not be decoded as UTF-8
    #[error("Failed to decode playlist as UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Errors raised while committing an import batch
///
/// Any of these aborts the whole batch; partially-applied imports are not an
/// accepted outcome.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Database errors from SeaORM
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Constraint violations (unique stream URL, primary key)
    #[error("Constraint violation: {constraint} - {message}")]
    ConstraintViolation { constraint: String, message: String },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found<R: Into<String>, I: Into<String>>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
