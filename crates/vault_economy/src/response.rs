//! # Economy Responses
//!
//! Immutable outcome of a balance-affecting call. The amount type is `f64`
//! for the Legacy and Identity generations and [`Decimal`] for the Ledger.

use rust_decimal::Decimal;

/// Message used when a `NotImplemented` response is built without one.
pub const DEFAULT_NOT_IMPLEMENTED_MESSAGE: &str = "Operation not supported by this economy";

/// Outcome class of a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResponseType {
    /// The operation was applied.
    Success,
    /// The provider refused or failed the operation.
    Failure,
    /// The provider cannot express the operation at all.
    NotImplemented,
}

/// Result of a balance-affecting operation.
///
/// Fields are private: a response never changes after construction.
/// A `NotImplemented` response always has a non-empty message and zero
/// amount and balance.
#[derive(Clone, Debug, PartialEq)]
pub struct EconomyResponse<A = f64> {
    amount: A,
    balance: A,
    kind: ResponseType,
    error_message: Option<String>,
}

/// Response type of the Ledger generation.
pub type LedgerResponse = EconomyResponse<Decimal>;

impl<A: Copy + Default> EconomyResponse<A> {
    /// The operation moved `amount` and left `balance` in the account.
    #[must_use]
    pub fn success(amount: A, balance: A) -> Self {
        Self {
            amount,
            balance,
            kind: ResponseType::Success,
            error_message: None,
        }
    }

    /// The provider failed the operation. `message` is passed through as given.
    #[must_use]
    pub fn failure(amount: A, balance: A, message: impl Into<String>) -> Self {
        Self {
            amount,
            balance,
            kind: ResponseType::Failure,
            error_message: Some(message.into()),
        }
    }

    /// The operation is not available from this provider.
    #[must_use]
    pub fn not_implemented(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = DEFAULT_NOT_IMPLEMENTED_MESSAGE.to_owned();
        }
        Self {
            amount: A::default(),
            balance: A::default(),
            kind: ResponseType::NotImplemented,
            error_message: Some(message),
        }
    }

    /// Amount moved by the operation.
    #[inline]
    pub fn amount(&self) -> A {
        self.amount
    }

    /// Account balance after the operation.
    #[inline]
    pub fn balance(&self) -> A {
        self.balance
    }

    /// Outcome class.
    #[inline]
    pub fn kind(&self) -> ResponseType {
        self.kind
    }

    /// Error text, if the provider gave one.
    #[inline]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether the operation was applied.
    #[inline]
    pub fn transaction_success(&self) -> bool {
        self.kind == ResponseType::Success
    }

    /// Whether the provider reported the operation as unsupported.
    #[inline]
    pub fn is_not_implemented(&self) -> bool {
        self.kind == ResponseType::NotImplemented
    }
}
