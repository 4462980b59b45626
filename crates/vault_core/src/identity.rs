//! # Player Identity
//!
//! Two eras of account keys coexist:
//!
//! - **Era 1**: the display name. Unstable (players rename), best effort only.
//! - **Era 2+**: the UUID. Stable for the lifetime of the account.
//!
//! [`PlayerIdentity`] carries both: the UUID and the last name the host knows
//! for it, if any. [`IdentitySource`] is the host-side lookup.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Opaque player handle as handed out by the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    id: Uuid,
    name: Option<String>,
}

impl PlayerIdentity {
    /// Creates an identity with a known display name.
    ///
    /// An empty name is treated as unknown.
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            name: (!name.is_empty()).then_some(name),
        }
    }

    /// Creates an identity whose display name cannot be resolved.
    #[must_use]
    pub const fn unnamed(id: Uuid) -> Self {
        Self { id, name: None }
    }

    /// Stable account key.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Current display name, if the host knows one.
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Host-side identity lookup.
///
/// Both operations are pure lookups with no side effects.
pub trait IdentitySource: Send + Sync {
    /// Resolves a UUID to a player handle. Unknown UUIDs yield an unnamed handle.
    fn player(&self, id: Uuid) -> PlayerIdentity;

    /// Whether the player with this display name is currently connected.
    fn is_online(&self, name: &str) -> bool;
}

/// In-process [`IdentitySource`] backed by two tables.
#[derive(Debug, Default)]
pub struct MemoryIdentitySource {
    names: RwLock<HashMap<Uuid, String>>,
    online: RwLock<HashSet<String>>,
}

impl MemoryIdentitySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the last-known name for a UUID, replacing any previous one.
    pub fn remember(&self, id: Uuid, name: impl Into<String>) {
        self.names.write().insert(id, name.into());
    }

    /// Drops the name mapping for a UUID.
    pub fn forget(&self, id: Uuid) {
        self.names.write().remove(&id);
    }

    /// Marks a display name as connected or disconnected.
    pub fn set_online(&self, name: &str, online: bool) {
        let mut table = self.online.write();
        if online {
            table.insert(name.to_owned());
        } else {
            table.remove(name);
        }
    }
}

impl IdentitySource for MemoryIdentitySource {
    fn player(&self, id: Uuid) -> PlayerIdentity {
        match self.names.read().get(&id) {
            Some(name) => PlayerIdentity::new(id, name.clone()),
            None => PlayerIdentity::unnamed(id),
        }
    }

    fn is_online(&self, name: &str) -> bool {
        self.online.read().contains(name)
    }
}
