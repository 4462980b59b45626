//! # Balance Update Events
//!
//! Backends announce balance changes as [`BalanceUpdateEvent`]s. Delivery is
//! the host's job; this module only defines the event, the [`EventSink`] seam
//! and an in-process [`EventBuffer`] that collects events until drained.

use parking_lot::Mutex;
use vault_core::IdentitySource;

use crate::response::EconomyResponse;

/// A balance changed.
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceUpdateEvent {
    account_name: String,
    previous_balance: f64,
    response: EconomyResponse,
}

impl BalanceUpdateEvent {
    /// Builds the event for the response of a withdrawal on `account_name`.
    ///
    /// The previous balance is reconstructed as `balance + amount`, i.e. the
    /// response amount is taken as the amount that left the account.
    #[must_use]
    pub fn new(account_name: impl Into<String>, response: EconomyResponse) -> Self {
        Self {
            account_name: account_name.into(),
            previous_balance: response.balance() + response.amount(),
            response,
        }
    }

    /// Balance before the update.
    #[inline]
    #[must_use]
    pub fn previous_balance(&self) -> f64 {
        self.previous_balance
    }

    /// Response of the operation that caused the update.
    #[inline]
    #[must_use]
    pub fn response(&self) -> &EconomyResponse {
        &self.response
    }

    /// Account the update applies to.
    #[inline]
    #[must_use]
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Whether `player` names a connected player.
    pub fn is_player<S: IdentitySource + ?Sized>(&self, source: &S, player: &str) -> bool {
        source.is_online(player)
    }

    /// Whether the account belongs to a connected player (as opposed to a bank
    /// or an offline account).
    pub fn is_online_player<S: IdentitySource + ?Sized>(&self, source: &S) -> bool {
        self.is_player(source, &self.account_name)
    }
}

/// Receiver of balance update events.
pub trait EventSink: Send + Sync {
    /// Called once per update.
    fn on_balance_update(&self, event: &BalanceUpdateEvent);
}

/// Collects events until the host drains them.
#[derive(Debug, Default)]
pub struct EventBuffer {
    events: Mutex<Vec<BalanceUpdateEvent>>,
}

impl EventBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every pending event, oldest first.
    pub fn drain(&self) -> Vec<BalanceUpdateEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Number of pending events.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.events.lock().len()
    }
}

impl EventSink for EventBuffer {
    fn on_balance_update(&self, event: &BalanceUpdateEvent) {
        self.events.lock().push(event.clone());
    }
}
