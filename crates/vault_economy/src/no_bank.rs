//! # Backends Without Banks
//!
//! A backend that has no bank accounts still has to answer every bank
//! operation of the Legacy contract. [`NoBankSupport`] holds the one
//! `NotImplemented` response those operations return.
//!
//! ```rust,ignore
//! fn bank_balance(&self, _name: &str) -> EconomyResponse {
//!     self.no_banks.response()
//! }
//! ```

use vault_core::config::DEFAULT_NO_BANK_MESSAGE;
use vault_core::EconomyConfig;

use crate::response::EconomyResponse;

/// Shared answer for the bank operations of a backend without banks.
#[derive(Clone, Debug, PartialEq)]
pub struct NoBankSupport {
    response: EconomyResponse,
}

impl NoBankSupport {
    /// Uses `message` as the explanation in every bank response.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            response: EconomyResponse::not_implemented(message),
        }
    }

    /// Uses the configured no-bank message.
    #[must_use]
    pub fn from_config(config: &EconomyConfig) -> Self {
        Self::new(config.no_bank_message.clone())
    }

    /// The `NotImplemented` response for any bank operation.
    #[must_use]
    pub fn response(&self) -> EconomyResponse {
        self.response.clone()
    }

    /// Bank listing of a backend without banks.
    #[must_use]
    pub fn banks(&self) -> Vec<String> {
        Vec::new()
    }

    /// Always false.
    #[must_use]
    pub const fn has_bank_support() -> bool {
        false
    }
}

impl Default for NoBankSupport {
    fn default() -> Self {
        Self::new(DEFAULT_NO_BANK_MESSAGE)
    }
}
