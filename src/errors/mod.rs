//! Centralized error handling for the playlist ingestion service
//!
//! This module provides a hierarchical error system that unifies error types
//! across all application layers and keeps error reporting consistent.
//!
//! # Error Categories
//!
//! - **Fetch Errors**: network, file I/O, and decoding failures while
//!   obtaining raw playlist text
//! - **Persistence Errors**: database failures while committing an import batch
//! - **Validation Errors**: input validation at the web boundary
//!
//! Malformed playlist content is deliberately *not* an error category: the
//! scanner drops unusable entries and keeps going.

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for fetch Results
pub type FetchResult<T> = Result<T, FetchError>;

/// Convenience type alias for persistence Results
pub type PersistenceResult<T> = Result<T, PersistenceError>;
