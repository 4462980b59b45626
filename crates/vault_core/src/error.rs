//! # Core Error Types
//!
//! Errors raised while loading shared configuration.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Configuration text could not be parsed or failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("cannot read configuration file {path}: {reason}")]
    ConfigRead {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
