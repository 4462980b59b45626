//! # Identity Contract
//!
//! UUID-keyed accounts on top of the Legacy contract.
//!
//! ## Capability flags
//!
//! A provider declares up front which optional groups it supports:
//!
//! | Flag                              | Gates                                |
//! |-----------------------------------|--------------------------------------|
//! | `supports_all_records_operation`  | [`IdentityEconomy::all_records`]     |
//! | `supports_all_online_operation`   | [`IdentityEconomy::all_online`]      |
//! | `supports_offline_operations`     | calls for players not connected      |
//! | `supports_uuid_operations`        | every `*_by_id`, `withdraw`, ...     |
//!
//! A gated call on a provider whose flag is false returns
//! [`EconomyError::Unsupported`](crate::EconomyError::Unsupported) (or a
//! `NotImplemented` response), never an empty result. Callers can therefore
//! tell "no data" from "not supported".
//!
//! ## Worlds
//!
//! World-scoped variants are implementation specific. A provider without
//! multi-world support uses the global account instead of failing.

use std::collections::HashMap;
use uuid::Uuid;

use crate::error::EconomyResult;
use crate::legacy::Economy;
use crate::response::EconomyResponse;

/// UUID-keyed account service with capability flags.
pub trait IdentityEconomy: Economy {
    /// Whether [`Self::all_records`] is available.
    fn supports_all_records_operation(&self) -> bool;

    /// Whether [`Self::all_online`] is available.
    fn supports_all_online_operation(&self) -> bool;

    /// Whether operations work for players that are not connected.
    ///
    /// When true, callers should expect these calls may block and should
    /// issue them off the main thread.
    fn supports_offline_operations(&self) -> bool;

    /// Whether UUID-keyed operations are available.
    fn supports_uuid_operations(&self) -> bool;

    // ------------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------------

    /// Creates an account for `id` with last-known name `name`.
    ///
    /// # Errors
    ///
    /// `Unsupported` if the provider has no UUID-keyed accounts.
    fn create_account(&self, id: Uuid, name: &str, world: Option<&str>) -> EconomyResult<bool>;

    /// Every stored account with its last-known name.
    ///
    /// This is the system of record for migrating between backends, so it
    /// must cover every account in storage, not only those in memory.
    ///
    /// # Errors
    ///
    /// `Unsupported` unless [`Self::supports_all_records_operation`] is true.
    fn all_records(&self) -> EconomyResult<HashMap<Uuid, String>>;

    /// Accounts whose owners are currently connected.
    ///
    /// # Errors
    ///
    /// `Unsupported` unless [`Self::supports_all_online_operation`] is true.
    fn all_online(&self) -> EconomyResult<Vec<Uuid>>;

    /// Last-known name of the account, `None` if there is no such account.
    ///
    /// # Errors
    ///
    /// `Unsupported` if the provider has no UUID-keyed accounts.
    fn account_name(&self, id: Uuid) -> EconomyResult<Option<String>>;

    /// Whether `id` has an account.
    ///
    /// # Errors
    ///
    /// `Unsupported` if the provider has no UUID-keyed accounts.
    fn has_account_by_id(&self, id: Uuid, world: Option<&str>) -> EconomyResult<bool>;

    /// Changes the last-known name stored for `id`.
    ///
    /// # Errors
    ///
    /// `Unsupported` if the provider has no UUID-keyed accounts.
    fn rename_account(&self, id: Uuid, name: &str) -> EconomyResult<bool>;

    /// Current balance of `id`.
    ///
    /// # Errors
    ///
    /// `Unsupported` if the provider has no UUID-keyed accounts.
    fn balance_by_id(&self, id: Uuid, world: Option<&str>) -> EconomyResult<f64>;

    /// Whether `id` holds at least `amount`.
    ///
    /// # Errors
    ///
    /// `Unsupported` if the provider has no UUID-keyed accounts.
    fn has_by_id(&self, id: Uuid, world: Option<&str>, amount: f64) -> EconomyResult<bool>;

    /// Withdraws `amount` from `id`.
    fn withdraw(&self, id: Uuid, world: Option<&str>, amount: f64) -> EconomyResponse;

    /// Deposits `amount` to `id`.
    fn deposit(&self, id: Uuid, world: Option<&str>, amount: f64) -> EconomyResponse;

    // ------------------------------------------------------------------------
    // Banks
    // ------------------------------------------------------------------------

    /// Creates a bank owned by `owner`.
    fn create_bank_for(&self, name: &str, owner: Uuid) -> EconomyResponse;

    /// Whether `id` owns the bank.
    fn is_bank_owner_by_id(&self, name: &str, id: Uuid) -> EconomyResponse;

    /// Whether `id` is a member of the bank.
    fn is_bank_member_by_id(&self, name: &str, id: Uuid) -> EconomyResponse;
}
