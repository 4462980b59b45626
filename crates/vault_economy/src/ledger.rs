//! # Ledger Contract
//!
//! The newest generation. Everything is keyed by UUID, banks included, and
//! amounts are [`Decimal`] so that long runs of deposits and withdrawals do not
//! drift the way binary floating point does.
//!
//! Structural bank operations (create, delete, rename) answer with a plain
//! success flag. Balance-affecting ones answer with a [`LedgerResponse`].

use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

use crate::digits::FractionalDigits;
use crate::response::LedgerResponse;

/// UUID-keyed, arbitrary-precision account service.
pub trait LedgerEconomy: Send + Sync {
    /// Whether the provider is enabled.
    fn is_enabled(&self) -> bool;

    /// Provider name.
    fn name(&self) -> &str;

    /// Whether bank operations are available.
    fn has_bank_support(&self) -> bool;

    /// Decimal places kept by the provider, or no rounding.
    fn fractional_digits(&self) -> FractionalDigits;

    /// Human-readable form of an amount.
    fn format(&self, amount: Decimal) -> String;

    /// Plural currency name, empty when the currency has no name.
    fn currency_name_plural(&self) -> &str;

    /// Singular currency name, empty when the currency has no name.
    fn currency_name_singular(&self) -> &str;

    // ------------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------------

    /// Creates an account. Returns whether one was created.
    fn create_account(&self, id: Uuid, name: &str, world: Option<&str>) -> bool;

    /// Every stored account with its last-known name.
    fn uuid_name_map(&self) -> HashMap<Uuid, String>;

    /// Last-known name of the account.
    fn account_name(&self, id: Uuid) -> Option<String>;

    /// Whether the account exists.
    fn has_account(&self, id: Uuid, world: Option<&str>) -> bool;

    /// Changes the last-known name of the account.
    fn rename_account(&self, id: Uuid, name: &str) -> bool;

    /// Current balance.
    fn balance(&self, id: Uuid, world: Option<&str>) -> Decimal;

    /// Whether the account holds at least `amount`.
    fn has(&self, id: Uuid, world: Option<&str>, amount: Decimal) -> bool;

    /// Withdraws `amount`.
    fn withdraw(&self, id: Uuid, world: Option<&str>, amount: Decimal) -> LedgerResponse;

    /// Deposits `amount`.
    fn deposit(&self, id: Uuid, world: Option<&str>, amount: Decimal) -> LedgerResponse;

    // ------------------------------------------------------------------------
    // Banks
    // ------------------------------------------------------------------------

    /// Creates a bank named `name` owned by `owner`.
    fn create_bank(&self, name: &str, owner: Uuid) -> bool;

    /// Deletes a bank.
    fn delete_bank(&self, bank: Uuid) -> bool;

    /// Every bank with its name.
    fn bank_uuid_name_map(&self) -> HashMap<Uuid, String>;

    /// Name of a bank.
    fn bank_account_name(&self, bank: Uuid) -> Option<String>;

    /// Whether the bank exists.
    fn has_bank_account(&self, bank: Uuid) -> bool;

    /// Renames a bank.
    fn rename_bank_account(&self, bank: Uuid, name: &str) -> bool;

    /// Balance of a bank.
    fn bank_balance(&self, bank: Uuid) -> Decimal;

    /// Whether the bank holds at least `amount`.
    fn bank_has(&self, bank: Uuid, amount: Decimal) -> bool;

    /// Withdraws `amount` from a bank.
    fn bank_withdraw(&self, bank: Uuid, amount: Decimal) -> LedgerResponse;

    /// Deposits `amount` into a bank.
    fn bank_deposit(&self, bank: Uuid, amount: Decimal) -> LedgerResponse;

    /// Whether `id` owns `bank`.
    fn is_bank_owner(&self, id: Uuid, bank: Uuid) -> bool;

    /// Whether `id` is a member of `bank`.
    fn is_bank_member(&self, id: Uuid, bank: Uuid) -> bool;

    /// Every bank.
    fn banks(&self) -> Vec<Uuid>;
}
