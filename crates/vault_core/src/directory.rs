//! # Provider Directory
//!
//! The host keeps a directory that maps a contract type to the provider that
//! currently serves it. Vault only ever calls three operations on it:
//!
//! ```text
//! is_provided_for(contract) -> bool
//! register(contract, provider, owner, priority)
//! get(contract) -> provider
//! ```
//!
//! Contracts are identified by the `TypeId` of the trait object type, so the
//! slot for `dyn Economy` is distinct from the slot for `dyn IdentityEconomy`
//! even when the same provider is published under both.
//!
//! The directory is always passed in. [`MemoryDirectory`] is the in-process
//! implementation; hosts with their own registry implement
//! [`ServiceDirectory`] over it.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::config::RegistrationConfig;

/// Type-erased provider as stored in the directory.
///
/// For a contract `C` the stored value is always an `Arc<C>`.
pub type ProviderHandle = Arc<dyn Any + Send + Sync>;

/// Identifies one contract slot in the directory.
#[derive(Clone, Copy)]
pub struct ContractKey {
    type_id: TypeId,
    name: &'static str,
}

impl ContractKey {
    /// Key for contract type `C` (usually a `dyn Trait`).
    #[must_use]
    pub fn of<C: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: std::any::type_name::<C>(),
        }
    }

    /// Human-readable contract name, for logs.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ContractKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ContractKey {}

impl Hash for ContractKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ContractKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Registration priority. Higher priorities win lookups.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ServicePriority {
    /// Only used when nothing else is registered.
    Lowest = 0,
    /// Below normal.
    Low = 1,
    /// Default priority.
    #[default]
    Normal = 2,
    /// Above normal.
    High = 3,
    /// Always preferred.
    Highest = 4,
}

/// Name of the plugin that owns a registration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerToken(String);

impl OwnerToken {
    /// Creates an owner token.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The owner name.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OwnerToken {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_OWNER)
    }
}

impl fmt::Display for OwnerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owner and priority attached to every registration a wrapper performs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationOptions {
    /// Plugin that owns the registration.
    pub owner: OwnerToken,
    /// Priority of the registration.
    pub priority: ServicePriority,
}

impl From<&RegistrationConfig> for RegistrationOptions {
    fn from(config: &RegistrationConfig) -> Self {
        Self {
            owner: OwnerToken::new(config.owner.clone()),
            priority: config.priority,
        }
    }
}

/// The host's provider directory.
///
/// Implementations are expected to be internally synchronized.
pub trait ServiceDirectory: Send + Sync {
    /// Whether any provider is registered for the contract.
    fn is_provided_for(&self, contract: ContractKey) -> bool;

    /// Registers a provider for the contract.
    fn register(
        &self,
        contract: ContractKey,
        provider: ProviderHandle,
        owner: &OwnerToken,
        priority: ServicePriority,
    );

    /// The active provider for the contract, if any.
    fn get(&self, contract: ContractKey) -> Option<ProviderHandle>;

    /// Priority of the active registration for the contract, if any.
    fn active_priority(&self, contract: ContractKey) -> Option<ServicePriority>;
}

/// Typed helpers over any [`ServiceDirectory`].
pub trait DirectoryExt: ServiceDirectory {
    /// Publishes `provider` in the slot for contract `C`.
    fn provide<C>(&self, provider: Arc<C>, options: &RegistrationOptions)
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let handle: ProviderHandle = Arc::new(provider);
        self.register(ContractKey::of::<C>(), handle, &options.owner, options.priority);
    }

    /// The active provider for contract `C`.
    fn lookup<C>(&self) -> Option<Arc<C>>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let handle = self.get(ContractKey::of::<C>())?;
        handle.downcast_ref::<Arc<C>>().cloned()
    }

    /// Whether contract `C` has a provider.
    fn is_provided<C>(&self) -> bool
    where
        C: ?Sized + 'static,
    {
        self.is_provided_for(ContractKey::of::<C>())
    }
}

impl<D: ServiceDirectory + ?Sized> DirectoryExt for D {}

/// Decides whether `provider` may be published into `slots`, and with which
/// options.
///
/// `None` when a slot is taken and `force` is not set. Otherwise the options
/// to register with: unchanged when every slot is free, and for a forced
/// registration raised to the highest active priority among `slots`, so the
/// new entry becomes active in every slot. A refused registration is logged
/// at debug level and a forced one over an occupied slot at warn level.
pub fn claim_slots(
    directory: &dyn ServiceDirectory,
    slots: &[ContractKey],
    force: bool,
    provider: &str,
    options: &RegistrationOptions,
) -> Option<RegistrationOptions> {
    let occupied = slots
        .iter()
        .copied()
        .find(|slot| directory.is_provided_for(*slot));

    match occupied {
        Some(slot) if !force => {
            tracing::debug!(
                "Skipping registration of {}: {:?} is already provided",
                provider,
                slot
            );
            None
        }
        Some(slot) => {
            let highest = slots
                .iter()
                .filter_map(|key| directory.active_priority(*key))
                .max()
                .unwrap_or(options.priority);
            tracing::warn!(
                "Forcing registration of {}: replacing provider of {:?}",
                provider,
                slot
            );
            Some(RegistrationOptions {
                owner: options.owner.clone(),
                priority: options.priority.max(highest),
            })
        }
        None => Some(options.clone()),
    }
}

/// One registration held by [`MemoryDirectory`].
#[derive(Clone)]
struct Registration {
    provider: ProviderHandle,
    owner: OwnerToken,
    priority: ServicePriority,
}

/// In-process provider directory.
///
/// Each contract keeps its registrations ordered by priority, highest first.
/// A new registration goes ahead of existing ones with the same priority, so
/// the most recent registration at the top priority is the active one.
#[derive(Default)]
pub struct MemoryDirectory {
    entries: RwLock<HashMap<ContractKey, Vec<Registration>>>,
}

impl MemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registrations (active or shadowed) for a contract.
    #[must_use]
    pub fn registration_count(&self, contract: ContractKey) -> usize {
        self.entries.read().get(&contract).map_or(0, Vec::len)
    }

    /// Owner of the active registration for a contract.
    #[must_use]
    pub fn active_owner(&self, contract: ContractKey) -> Option<OwnerToken> {
        self.entries
            .read()
            .get(&contract)
            .and_then(|list| list.first())
            .map(|r| r.owner.clone())
    }

    /// Removes every registration made by `owner`. Returns how many were removed.
    ///
    /// This is what the host does when a plugin shuts down.
    pub fn unregister_all(&self, owner: &OwnerToken) -> usize {
        let mut entries = self.entries.write();
        let mut removed = 0;
        for list in entries.values_mut() {
            let before = list.len();
            list.retain(|r| &r.owner != owner);
            removed += before - list.len();
        }
        entries.retain(|_, list| !list.is_empty());
        if removed > 0 {
            tracing::debug!("Removed {} registrations owned by {}", removed, owner);
        }
        removed
    }

    /// Contracts that currently have at least one provider.
    #[must_use]
    pub fn contracts(&self) -> Vec<ContractKey> {
        self.entries.read().keys().copied().collect()
    }
}

impl ServiceDirectory for MemoryDirectory {
    fn is_provided_for(&self, contract: ContractKey) -> bool {
        self.entries
            .read()
            .get(&contract)
            .is_some_and(|list| !list.is_empty())
    }

    fn register(
        &self,
        contract: ContractKey,
        provider: ProviderHandle,
        owner: &OwnerToken,
        priority: ServicePriority,
    ) {
        let mut entries = self.entries.write();
        let list = entries.entry(contract).or_default();
        let position = list
            .iter()
            .position(|r| r.priority <= priority)
            .unwrap_or(list.len());
        list.insert(
            position,
            Registration {
                provider,
                owner: owner.clone(),
                priority,
            },
        );
        tracing::debug!(
            "Registered {:?} for {:?} (owner: {}, slot {} of {})",
            priority,
            contract,
            owner,
            position,
            list.len()
        );
    }

    fn get(&self, contract: ContractKey) -> Option<ProviderHandle> {
        self.entries
            .read()
            .get(&contract)
            .and_then(|list| list.first())
            .map(|r| Arc::clone(&r.provider))
    }

    fn active_priority(&self, contract: ContractKey) -> Option<ServicePriority> {
        self.entries
            .read()
            .get(&contract)
            .and_then(|list| list.first())
            .map(|r| r.priority)
    }
}

impl fmt::Debug for MemoryDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.read();
        let mut map = f.debug_map();
        for (key, list) in entries.iter() {
            map.entry(key, &list.len());
        }
        map.finish()
    }
}
