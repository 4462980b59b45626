//! # Provider Registration
//!
//! Each wrapper publishes one provider under every contract generation it can
//! serve, so callers written against any generation find something.
//!
//! | Wrapper                    | Legacy slot       | Identity slot    | Multi slot | Ledger slot |
//! |----------------------------|-------------------|------------------|------------|-------------|
//! | [`EconomyWrapper`]         | backend           | `LegacyEconomy`  | -          | -           |
//! | [`IdentityEconomyWrapper`] | provider          | provider         | -          | -           |
//! | [`MultiEconomyWrapper`]    | default provider  | default provider | selector   | -           |
//! | [`LedgerEconomyWrapper`]   | -                 | -                | -          | provider    |
//!
//! `register_providers` only publishes when none of the wrapper's slots is
//! taken. `register_providers_with(dir, true)` always publishes and returns
//! true; its priority is raised to that of the entries it replaces, so the
//! new registration is the active one afterwards. An occupied directory is a
//! normal answer, not an error.

use std::sync::Arc;

use vault_core::{
    claim_slots, ContractKey, DirectoryExt, RegistrationOptions, ServiceDirectory,
};

use crate::bridge::LegacyEconomy;
use crate::identity::IdentityEconomy;
use crate::ledger::LedgerEconomy;
use crate::legacy::Economy;
use crate::multi::MultiEconomy;

// ============================================================================
// Legacy backend
// ============================================================================

/// Publishes a name-keyed backend under the Legacy and Identity slots.
pub struct EconomyWrapper {
    economy: Arc<dyn Economy>,
    options: RegistrationOptions,
}

impl EconomyWrapper {
    /// Wraps a name-keyed backend with default registration options.
    #[must_use]
    pub fn new(economy: Arc<dyn Economy>) -> Self {
        Self {
            economy,
            options: RegistrationOptions::default(),
        }
    }

    /// Uses `options` for every registration.
    #[must_use]
    pub fn with_options(mut self, options: RegistrationOptions) -> Self {
        self.options = options;
        self
    }

    /// The Identity-contract view of the backend.
    ///
    /// Every capability flag is false and UUID-keyed calls fail fast.
    #[must_use]
    pub fn legacy(&self) -> LegacyEconomy {
        LegacyEconomy::new(Arc::clone(&self.economy))
    }

    /// Publishes unless a Legacy or Identity provider is already registered.
    pub fn register_providers(&self, directory: &dyn ServiceDirectory) -> bool {
        self.register_providers_with(directory, false)
    }

    /// Publishes; with `force` any existing provider is replaced.
    pub fn register_providers_with(&self, directory: &dyn ServiceDirectory, force: bool) -> bool {
        let slots = [
            ContractKey::of::<dyn IdentityEconomy>(),
            ContractKey::of::<dyn Economy>(),
        ];
        let Some(options) =
            claim_slots(directory, &slots, force, self.economy.name(), &self.options)
        else {
            return false;
        };

        let bridge: Arc<dyn IdentityEconomy> = Arc::new(self.legacy());
        directory.provide::<dyn IdentityEconomy>(bridge, &options);
        directory.provide::<dyn Economy>(Arc::clone(&self.economy), &options);

        tracing::info!(
            "Registered legacy economy {} (owner: {})",
            self.economy.name(),
            options.owner
        );
        true
    }
}

// ============================================================================
// Identity provider
// ============================================================================

/// Publishes an Identity provider under the Identity and Legacy slots.
pub struct IdentityEconomyWrapper {
    economy: Arc<dyn IdentityEconomy>,
    options: RegistrationOptions,
}

impl IdentityEconomyWrapper {
    /// Wraps an Identity provider with default registration options.
    #[must_use]
    pub fn new(economy: Arc<dyn IdentityEconomy>) -> Self {
        Self {
            economy,
            options: RegistrationOptions::default(),
        }
    }

    /// Uses `options` for every registration.
    #[must_use]
    pub fn with_options(mut self, options: RegistrationOptions) -> Self {
        self.options = options;
        self
    }

    /// Publishes unless an Identity or Legacy provider is already registered.
    pub fn register_providers(&self, directory: &dyn ServiceDirectory) -> bool {
        self.register_providers_with(directory, false)
    }

    /// Publishes; with `force` any existing provider is replaced.
    pub fn register_providers_with(&self, directory: &dyn ServiceDirectory, force: bool) -> bool {
        let slots = [
            ContractKey::of::<dyn IdentityEconomy>(),
            ContractKey::of::<dyn Economy>(),
        ];
        let Some(options) =
            claim_slots(directory, &slots, force, self.economy.name(), &self.options)
        else {
            return false;
        };

        publish_identity(directory, &self.economy, &options);

        tracing::info!(
            "Registered identity economy {} (owner: {})",
            self.economy.name(),
            options.owner
        );
        true
    }
}

fn publish_identity(
    directory: &dyn ServiceDirectory,
    economy: &Arc<dyn IdentityEconomy>,
    options: &RegistrationOptions,
) {
    let legacy: Arc<dyn Economy> = economy.clone();
    directory.provide::<dyn IdentityEconomy>(Arc::clone(economy), options);
    directory.provide::<dyn Economy>(legacy, options);
}

// ============================================================================
// Multi-currency selector
// ============================================================================

/// Publishes a selector under the Multi slot and its default provider under
/// the Identity and Legacy slots.
pub struct MultiEconomyWrapper {
    economy: Arc<dyn MultiEconomy>,
    options: RegistrationOptions,
}

impl MultiEconomyWrapper {
    /// Wraps a selector with default registration options.
    #[must_use]
    pub fn new(economy: Arc<dyn MultiEconomy>) -> Self {
        Self {
            economy,
            options: RegistrationOptions::default(),
        }
    }

    /// Uses `options` for every registration.
    #[must_use]
    pub fn with_options(mut self, options: RegistrationOptions) -> Self {
        self.options = options;
        self
    }

    /// Publishes unless one of the slots it would fill is already taken.
    pub fn register_providers(&self, directory: &dyn ServiceDirectory) -> bool {
        self.register_providers_with(directory, false)
    }

    /// Publishes; with `force` any existing provider is replaced.
    ///
    /// A selector without a global default only fills the Multi slot. The
    /// Identity and Legacy slots are left to whoever holds them.
    pub fn register_providers_with(&self, directory: &dyn ServiceDirectory, force: bool) -> bool {
        let default = self.economy.default_implementation(None);
        let mut slots = vec![ContractKey::of::<dyn MultiEconomy>()];
        if default.is_some() {
            slots.push(ContractKey::of::<dyn IdentityEconomy>());
            slots.push(ContractKey::of::<dyn Economy>());
        }
        let Some(options) =
            claim_slots(directory, &slots, force, self.economy.name(), &self.options)
        else {
            return false;
        };

        directory.provide::<dyn MultiEconomy>(Arc::clone(&self.economy), &options);

        match default {
            Some(default) => {
                publish_identity(directory, &default, &options);
                tracing::info!(
                    "Registered multi economy {} with default {} (owner: {})",
                    self.economy.name(),
                    default.name(),
                    options.owner
                );
            }
            None => {
                tracing::warn!(
                    "Registered multi economy {} without a default implementation (owner: {}); \
                     Identity and Legacy slots left untouched",
                    self.economy.name(),
                    options.owner
                );
            }
        }
        true
    }
}

// ============================================================================
// Ledger provider
// ============================================================================

/// Publishes a Ledger provider under the Ledger slot.
pub struct LedgerEconomyWrapper {
    economy: Arc<dyn LedgerEconomy>,
    options: RegistrationOptions,
}

impl LedgerEconomyWrapper {
    /// Wraps a Ledger provider with default registration options.
    #[must_use]
    pub fn new(economy: Arc<dyn LedgerEconomy>) -> Self {
        Self {
            economy,
            options: RegistrationOptions::default(),
        }
    }

    /// Uses `options` for every registration.
    #[must_use]
    pub fn with_options(mut self, options: RegistrationOptions) -> Self {
        self.options = options;
        self
    }

    /// Publishes unless a Ledger provider is already registered.
    pub fn register_providers(&self, directory: &dyn ServiceDirectory) -> bool {
        self.register_providers_with(directory, false)
    }

    /// Publishes; with `force` any existing provider is replaced.
    pub fn register_providers_with(&self, directory: &dyn ServiceDirectory, force: bool) -> bool {
        let slots = [ContractKey::of::<dyn LedgerEconomy>()];
        let Some(options) =
            claim_slots(directory, &slots, force, self.economy.name(), &self.options)
        else {
            return false;
        };

        directory.provide::<dyn LedgerEconomy>(Arc::clone(&self.economy), &options);

        tracing::info!(
            "Registered ledger economy {} (owner: {})",
            self.economy.name(),
            options.owner
        );
        true
    }
}
