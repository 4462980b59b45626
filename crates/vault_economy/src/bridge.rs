//! # Legacy → Identity Bridge
//!
//! [`LegacyEconomy`] lets a name-keyed backend be published where callers ask
//! for the Identity contract.
//!
//! ```text
//!   caller ──> IdentityEconomy ──> LegacyEconomy ──> Economy (backend)
//!                                      │
//!              name-keyed calls ───────┘ delegate unchanged
//!              UUID-keyed calls ─────────> Unsupported / NotImplemented
//! ```
//!
//! A name-keyed backend has no reliable UUID ↔ name mapping, so the bridge
//! does not translate UUID-keyed calls. It reports every capability flag as
//! false and answers every UUID-keyed call with a typed "unsupported"
//! outcome.

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::digits::FractionalDigits;
use crate::error::{EconomyError, EconomyResult};
use crate::identity::IdentityEconomy;
use crate::legacy::Economy;
use crate::response::EconomyResponse;

/// Identity-contract view over a Legacy-contract backend.
///
/// Holds nothing but the wrapped provider; clone or rebuild it freely.
#[derive(Clone)]
pub struct LegacyEconomy {
    economy: Arc<dyn Economy>,
}

impl LegacyEconomy {
    /// Wraps a name-keyed backend.
    #[must_use]
    pub fn new(economy: Arc<dyn Economy>) -> Self {
        Self { economy }
    }

    /// The wrapped backend.
    #[must_use]
    pub fn inner(&self) -> &Arc<dyn Economy> {
        &self.economy
    }

    fn unsupported<T>(&self, operation: &'static str) -> EconomyResult<T> {
        tracing::debug!(
            "{} called on name-keyed economy {}",
            operation,
            self.economy.name()
        );
        Err(EconomyError::unsupported(operation, self.economy.name()))
    }

    fn not_implemented(&self, operation: &'static str) -> EconomyResponse {
        tracing::debug!(
            "{} called on name-keyed economy {}",
            operation,
            self.economy.name()
        );
        EconomyResponse::not_implemented(format!(
            "LegacyEconomy! {operation} is not supported by {}",
            self.economy.name()
        ))
    }
}

impl std::fmt::Debug for LegacyEconomy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyEconomy")
            .field("economy", &self.economy.name())
            .finish()
    }
}

impl Economy for LegacyEconomy {
    fn is_enabled(&self) -> bool {
        self.economy.is_enabled()
    }

    fn name(&self) -> &str {
        self.economy.name()
    }

    fn has_bank_support(&self) -> bool {
        self.economy.has_bank_support()
    }

    fn fractional_digits(&self) -> FractionalDigits {
        self.economy.fractional_digits()
    }

    fn format(&self, amount: f64) -> String {
        self.economy.format(amount)
    }

    fn currency_name_plural(&self) -> &str {
        self.economy.currency_name_plural()
    }

    fn currency_name_singular(&self) -> &str {
        self.economy.currency_name_singular()
    }

    fn has_account(&self, player_name: &str, world: Option<&str>) -> bool {
        self.economy.has_account(player_name, world)
    }

    fn balance(&self, player_name: &str, world: Option<&str>) -> f64 {
        self.economy.balance(player_name, world)
    }

    fn has(&self, player_name: &str, world: Option<&str>, amount: f64) -> bool {
        self.economy.has(player_name, world, amount)
    }

    fn withdraw_player(
        &self,
        player_name: &str,
        world: Option<&str>,
        amount: f64,
    ) -> EconomyResponse {
        self.economy.withdraw_player(player_name, world, amount)
    }

    fn deposit_player(
        &self,
        player_name: &str,
        world: Option<&str>,
        amount: f64,
    ) -> EconomyResponse {
        self.economy.deposit_player(player_name, world, amount)
    }

    fn create_player_account(&self, player_name: &str, world: Option<&str>) -> bool {
        self.economy.create_player_account(player_name, world)
    }

    fn create_bank(&self, name: &str, owner_name: &str) -> EconomyResponse {
        self.economy.create_bank(name, owner_name)
    }

    fn delete_bank(&self, name: &str) -> EconomyResponse {
        self.economy.delete_bank(name)
    }

    fn bank_balance(&self, name: &str) -> EconomyResponse {
        self.economy.bank_balance(name)
    }

    fn bank_has(&self, name: &str, amount: f64) -> EconomyResponse {
        self.economy.bank_has(name, amount)
    }

    fn bank_withdraw(&self, name: &str, amount: f64) -> EconomyResponse {
        self.economy.bank_withdraw(name, amount)
    }

    fn bank_deposit(&self, name: &str, amount: f64) -> EconomyResponse {
        self.economy.bank_deposit(name, amount)
    }

    fn is_bank_owner(&self, name: &str, player_name: &str) -> EconomyResponse {
        self.economy.is_bank_owner(name, player_name)
    }

    fn is_bank_member(&self, name: &str, player_name: &str) -> EconomyResponse {
        self.economy.is_bank_member(name, player_name)
    }

    fn banks(&self) -> Vec<String> {
        self.economy.banks()
    }
}

impl IdentityEconomy for LegacyEconomy {
    fn supports_all_records_operation(&self) -> bool {
        false
    }

    fn supports_all_online_operation(&self) -> bool {
        false
    }

    fn supports_offline_operations(&self) -> bool {
        false
    }

    fn supports_uuid_operations(&self) -> bool {
        false
    }

    fn create_account(&self, _id: Uuid, _name: &str, _world: Option<&str>) -> EconomyResult<bool> {
        self.unsupported("create_account")
    }

    fn all_records(&self) -> EconomyResult<HashMap<Uuid, String>> {
        self.unsupported("all_records")
    }

    fn all_online(&self) -> EconomyResult<Vec<Uuid>> {
        self.unsupported("all_online")
    }

    fn account_name(&self, _id: Uuid) -> EconomyResult<Option<String>> {
        self.unsupported("account_name")
    }

    fn has_account_by_id(&self, _id: Uuid, _world: Option<&str>) -> EconomyResult<bool> {
        self.unsupported("has_account_by_id")
    }

    fn rename_account(&self, _id: Uuid, _name: &str) -> EconomyResult<bool> {
        self.unsupported("rename_account")
    }

    fn balance_by_id(&self, _id: Uuid, _world: Option<&str>) -> EconomyResult<f64> {
        self.unsupported("balance_by_id")
    }

    fn has_by_id(&self, _id: Uuid, _world: Option<&str>, _amount: f64) -> EconomyResult<bool> {
        self.unsupported("has_by_id")
    }

    fn withdraw(&self, _id: Uuid, _world: Option<&str>, _amount: f64) -> EconomyResponse {
        self.not_implemented("withdraw")
    }

    fn deposit(&self, _id: Uuid, _world: Option<&str>, _amount: f64) -> EconomyResponse {
        self.not_implemented("deposit")
    }

    fn create_bank_for(&self, _name: &str, _owner: Uuid) -> EconomyResponse {
        self.not_implemented("create_bank_for")
    }

    fn is_bank_owner_by_id(&self, _name: &str, _id: Uuid) -> EconomyResponse {
        self.not_implemented("is_bank_owner_by_id")
    }

    fn is_bank_member_by_id(&self, _name: &str, _id: Uuid) -> EconomyResponse {
        self.not_implemented("is_bank_member_by_id")
    }
}
