//! # Legacy Contract
//!
//! The oldest account contract: every account and bank member is keyed by a
//! display name. Names are unstable, so this generation is best effort.
//!
//! The player-keyed forms of these operations are not part of the trait;
//! they live in [`crate::forwarding::by_player`] and forward here using the
//! player's current display name.
//!
//! ## Amounts
//!
//! Every `amount` argument must be non-negative. What a provider does with a
//! negative amount is its own business; nothing here validates it.
//!
//! ## Worlds
//!
//! `world` scopes an account to a world. `None` is the global account.
//! Providers without multi-world support ignore the world and use the global
//! account instead of failing.

use crate::digits::FractionalDigits;
use crate::response::EconomyResponse;

/// Name-keyed account service.
pub trait Economy: Send + Sync {
    /// Whether the provider is enabled.
    fn is_enabled(&self) -> bool;

    /// Provider name.
    fn name(&self) -> &str;

    /// Whether bank operations are available.
    fn has_bank_support(&self) -> bool;

    /// Decimal places kept by the provider, or no rounding.
    fn fractional_digits(&self) -> FractionalDigits;

    /// Human-readable form of an amount, e.g. `"$10.00"` or `"10 Gold"`.
    fn format(&self, amount: f64) -> String;

    /// Plural currency name, empty when the currency has no name.
    fn currency_name_plural(&self) -> &str;

    /// Singular currency name, empty when the currency has no name.
    fn currency_name_singular(&self) -> &str;

    // ------------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------------

    /// Whether the player has an account.
    fn has_account(&self, player_name: &str, world: Option<&str>) -> bool;

    /// Current balance of the player.
    fn balance(&self, player_name: &str, world: Option<&str>) -> f64;

    /// Whether the player holds at least `amount`.
    fn has(&self, player_name: &str, world: Option<&str>, amount: f64) -> bool;

    /// Withdraws `amount` from the player.
    fn withdraw_player(
        &self,
        player_name: &str,
        world: Option<&str>,
        amount: f64,
    ) -> EconomyResponse;

    /// Deposits `amount` to the player.
    fn deposit_player(&self, player_name: &str, world: Option<&str>, amount: f64)
        -> EconomyResponse;

    /// Creates an account for the player. Returns whether one was created.
    fn create_player_account(&self, player_name: &str, world: Option<&str>) -> bool;

    // ------------------------------------------------------------------------
    // Banks
    // ------------------------------------------------------------------------

    /// Creates a bank owned by `owner_name`.
    fn create_bank(&self, name: &str, owner_name: &str) -> EconomyResponse;

    /// Deletes a bank.
    fn delete_bank(&self, name: &str) -> EconomyResponse;

    /// Balance of a bank, reported in the response.
    fn bank_balance(&self, name: &str) -> EconomyResponse;

    /// Whether the bank holds at least `amount`.
    fn bank_has(&self, name: &str, amount: f64) -> EconomyResponse;

    /// Withdraws `amount` from a bank.
    fn bank_withdraw(&self, name: &str, amount: f64) -> EconomyResponse;

    /// Deposits `amount` into a bank.
    fn bank_deposit(&self, name: &str, amount: f64) -> EconomyResponse;

    /// Whether the player owns the bank.
    fn is_bank_owner(&self, name: &str, player_name: &str) -> EconomyResponse;

    /// Whether the player is a member of the bank.
    fn is_bank_member(&self, name: &str, player_name: &str) -> EconomyResponse;

    /// Names of every bank.
    fn banks(&self) -> Vec<String>;
}
