//! # AppError
//!
//! Centralized error taxonomy for the chalkline services.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type surfaced by the service layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found (e.g., gallery image, placement record)
    #[error("{0} not found with id {1}")]
    NotFound(&'static str, String),

    /// Validation failure (e.g., disallowed file type, empty upload batch)
    #[error("validation error: {0}")]
    Validation(String),

    /// Object-storage backend failure (upload or delete against the store)
    #[error("storage backend error: {source}")]
    Storage {
        #[source]
        source: anyhow::Error,
    },

    /// Metadata store failure (database read/write)
    #[error("persistence error: {source}")]
    Persistence {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn storage(source: anyhow::Error) -> Self {
        Self::Storage { source }
    }

    pub fn persistence(source: anyhow::Error) -> Self {
        Self::Persistence { source }
    }
}

/// A specialized Result type for chalkline service logic.
pub type Result<T> = std::result::Result<T, AppError>;
