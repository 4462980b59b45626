//! # Forwarding Helpers
//!
//! Convenience forms that a name-keyed backend can opt into instead of
//! implementing them by hand.
//!
//! ```text
//! by_id::balance(economy, source, uuid, world)
//!     │  source.player(uuid)
//!     ▼
//! by_player::balance(economy, &player, world)
//!     │  player.name()  ── None ──> None / false / Failure
//!     ▼
//! economy.balance(name, world)
//! ```
//!
//! These are plain functions, not trait defaults, so nothing forwards unless a
//! provider calls them. [`LegacyEconomy`](crate::LegacyEconomy) never does:
//! it reports UUID operations as unsupported instead.

use crate::legacy::Economy;
use crate::response::EconomyResponse;

fn unresolved(player: &vault_core::PlayerIdentity) -> EconomyResponse {
    EconomyResponse::failure(
        0.0,
        0.0,
        format!("no display name is known for player {}", player.id()),
    )
}

/// Player-keyed forms. A player without a display name gets `false`, `None`
/// or a `Failure` response without reaching the backend.
pub mod by_player {
    use vault_core::PlayerIdentity;

    use super::{unresolved, Economy, EconomyResponse};

    /// Whether the player has an account.
    pub fn has_account<E>(economy: &E, player: &PlayerIdentity, world: Option<&str>) -> bool
    where
        E: Economy + ?Sized,
    {
        player
            .name()
            .is_some_and(|name| economy.has_account(name, world))
    }

    /// Balance of the player, `None` if the player has no display name.
    pub fn balance<E>(economy: &E, player: &PlayerIdentity, world: Option<&str>) -> Option<f64>
    where
        E: Economy + ?Sized,
    {
        player.name().map(|name| economy.balance(name, world))
    }

    /// Whether the player holds at least `amount`.
    pub fn has<E>(economy: &E, player: &PlayerIdentity, world: Option<&str>, amount: f64) -> bool
    where
        E: Economy + ?Sized,
    {
        player
            .name()
            .is_some_and(|name| economy.has(name, world, amount))
    }

    /// Withdraws from the player.
    pub fn withdraw<E>(
        economy: &E,
        player: &PlayerIdentity,
        world: Option<&str>,
        amount: f64,
    ) -> EconomyResponse
    where
        E: Economy + ?Sized,
    {
        match player.name() {
            Some(name) => economy.withdraw_player(name, world, amount),
            None => unresolved(player),
        }
    }

    /// Deposits to the player.
    pub fn deposit<E>(
        economy: &E,
        player: &PlayerIdentity,
        world: Option<&str>,
        amount: f64,
    ) -> EconomyResponse
    where
        E: Economy + ?Sized,
    {
        match player.name() {
            Some(name) => economy.deposit_player(name, world, amount),
            None => unresolved(player),
        }
    }

    /// Creates an account for the player.
    pub fn create_account<E>(economy: &E, player: &PlayerIdentity, world: Option<&str>) -> bool
    where
        E: Economy + ?Sized,
    {
        player
            .name()
            .is_some_and(|name| economy.create_player_account(name, world))
    }

    /// Creates a bank owned by the player.
    pub fn create_bank<E>(economy: &E, bank: &str, owner: &PlayerIdentity) -> EconomyResponse
    where
        E: Economy + ?Sized,
    {
        match owner.name() {
            Some(name) => economy.create_bank(bank, name),
            None => unresolved(owner),
        }
    }

    /// Whether the player owns the bank.
    pub fn is_bank_owner<E>(economy: &E, bank: &str, player: &PlayerIdentity) -> EconomyResponse
    where
        E: Economy + ?Sized,
    {
        match player.name() {
            Some(name) => economy.is_bank_owner(bank, name),
            None => unresolved(player),
        }
    }

    /// Whether the player is a member of the bank.
    pub fn is_bank_member<E>(economy: &E, bank: &str, player: &PlayerIdentity) -> EconomyResponse
    where
        E: Economy + ?Sized,
    {
        match player.name() {
            Some(name) => economy.is_bank_member(bank, name),
            None => unresolved(player),
        }
    }
}

/// UUID-keyed forms. The UUID is resolved through the host's
/// [`IdentitySource`](vault_core::IdentitySource), then forwarded through
/// [`by_player`].
pub mod by_id {
    use uuid::Uuid;
    use vault_core::IdentitySource;

    use super::{by_player, Economy, EconomyResponse};

    /// Whether the account exists.
    pub fn has_account<E, S>(economy: &E, source: &S, id: Uuid, world: Option<&str>) -> bool
    where
        E: Economy + ?Sized,
        S: IdentitySource + ?Sized,
    {
        by_player::has_account(economy, &source.player(id), world)
    }

    /// Balance of the account, `None` if the UUID has no display name.
    pub fn balance<E, S>(economy: &E, source: &S, id: Uuid, world: Option<&str>) -> Option<f64>
    where
        E: Economy + ?Sized,
        S: IdentitySource + ?Sized,
    {
        by_player::balance(economy, &source.player(id), world)
    }

    /// Whether the account holds at least `amount`.
    pub fn has<E, S>(economy: &E, source: &S, id: Uuid, world: Option<&str>, amount: f64) -> bool
    where
        E: Economy + ?Sized,
        S: IdentitySource + ?Sized,
    {
        by_player::has(economy, &source.player(id), world, amount)
    }

    /// Withdraws from the account.
    pub fn withdraw<E, S>(
        economy: &E,
        source: &S,
        id: Uuid,
        world: Option<&str>,
        amount: f64,
    ) -> EconomyResponse
    where
        E: Economy + ?Sized,
        S: IdentitySource + ?Sized,
    {
        by_player::withdraw(economy, &source.player(id), world, amount)
    }

    /// Deposits to the account.
    pub fn deposit<E, S>(
        economy: &E,
        source: &S,
        id: Uuid,
        world: Option<&str>,
        amount: f64,
    ) -> EconomyResponse
    where
        E: Economy + ?Sized,
        S: IdentitySource + ?Sized,
    {
        by_player::deposit(economy, &source.player(id), world, amount)
    }

    /// Creates an account.
    pub fn create_account<E, S>(economy: &E, source: &S, id: Uuid, world: Option<&str>) -> bool
    where
        E: Economy + ?Sized,
        S: IdentitySource + ?Sized,
    {
        by_player::create_account(economy, &source.player(id), world)
    }

    /// Creates a bank owned by the account.
    pub fn create_bank<E, S>(economy: &E, source: &S, bank: &str, owner: Uuid) -> EconomyResponse
    where
        E: Economy + ?Sized,
        S: IdentitySource + ?Sized,
    {
        by_player::create_bank(economy, bank, &source.player(owner))
    }

    /// Whether the account owns the bank.
    pub fn is_bank_owner<E, S>(economy: &E, source: &S, bank: &str, id: Uuid) -> EconomyResponse
    where
        E: Economy + ?Sized,
        S: IdentitySource + ?Sized,
    {
        by_player::is_bank_owner(economy, bank, &source.player(id))
    }

    /// Whether the account is a member of the bank.
    pub fn is_bank_member<E, S>(economy: &E, source: &S, bank: &str, id: Uuid) -> EconomyResponse
    where
        E: Economy + ?Sized,
        S: IdentitySource + ?Sized,
    {
        by_player::is_bank_member(economy, bank, &source.player(id))
    }
}
