//! # Economy Error Types
//!
//! "Not found" is never an error here: missing accounts and banks come back
//! as `false` / `None` / empty. Errors are reserved for operations a provider
//! cannot express at all.

use thiserror::Error;
use vault_core::CoreError;

/// Errors that can occur in the economy layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomyError {
    /// The provider's contract generation cannot express this operation.
    #[error("{operation} is not supported by economy {provider}")]
    Unsupported {
        /// Operation that was called.
        operation: &'static str,
        /// Name of the provider that rejected it.
        provider: String,
    },

    /// A registry default names an implementation that was never added.
    #[error("unknown economy implementation: {0}")]
    UnknownImplementation(String),

    /// Shared configuration failed to load.
    #[error(transparent)]
    Config(#[from] CoreError),
}

impl EconomyError {
    /// Builds an [`EconomyError::Unsupported`].
    #[must_use]
    pub fn unsupported(operation: &'static str, provider: impl Into<String>) -> Self {
        Self::Unsupported {
            operation,
            provider: provider.into(),
        }
    }

    /// Whether this error reports a missing capability.
    #[inline]
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Result type for economy operations.
pub type EconomyResult<T> = Result<T, EconomyError>;

/// Guard for capability-gated operations.
///
/// Providers call this at the top of `all_records` / `all_online` so that a
/// disabled capability surfaces as [`EconomyError::Unsupported`] instead of an
/// empty collection.
///
/// # Errors
///
/// Returns [`EconomyError::Unsupported`] when `supported` is false.
pub fn ensure_supported(
    supported: bool,
    operation: &'static str,
    provider: &str,
) -> EconomyResult<()> {
    if supported {
        Ok(())
    } else {
        Err(EconomyError::unsupported(operation, provider))
    }
}
