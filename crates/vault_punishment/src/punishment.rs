//! # Punishment Contract
//!
//! Three independent sanctions per player: mute, ban and jail. Each can be
//! permanent (`None`) or last for a given length. Lifting a sanction that is
//! not in place is a no-op.

use std::time::Duration;

use vault_core::PlayerIdentity;

/// Mute / ban / jail service.
///
/// Implementations are shared across threads and synchronize internally.
pub trait Punishment: Send + Sync {
    /// Whether the player is currently muted.
    fn is_muted(&self, player: &PlayerIdentity) -> bool;

    /// Whether the player is currently banned.
    fn is_banned(&self, player: &PlayerIdentity) -> bool;

    /// Whether the player is currently jailed.
    fn is_jailed(&self, player: &PlayerIdentity) -> bool;

    /// Bans the player. `None` bans permanently.
    fn ban(&self, player: &PlayerIdentity, length: Option<Duration>);

    /// Jails the player for `length`.
    fn jail(&self, player: &PlayerIdentity, length: Duration);

    /// Mutes the player. `None` mutes permanently.
    fn mute(&self, player: &PlayerIdentity, length: Option<Duration>);

    /// Lifts a ban.
    fn unban(&self, player: &PlayerIdentity);

    /// Lifts a mute.
    fn unmute(&self, player: &PlayerIdentity);

    /// Releases the player from jail.
    fn unjail(&self, player: &PlayerIdentity);
}
