//! # Multi-Currency Selector
//!
//! Several Identity providers, one per currency ("implementation"), behind a
//! single contract. Implementations can be global or scoped to a world, and
//! each scope can name a default.
//!
//! ## Lookup rules of [`EconomyRegistry`]
//!
//! - Global implementations are visible in every world.
//! - A world implementation with the same name as a global one shadows it
//!   inside that world.
//! - `default_implementation(Some(world))` is the world's own default if it
//!   has one, otherwise the global default.
//! - A miss is `None` / empty, never an error.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{EconomyError, EconomyResult};
use crate::identity::IdentityEconomy;

/// Multi-currency, multi-world selector contract.
pub trait MultiEconomy: Send + Sync {
    /// Whether the selector is enabled.
    fn is_enabled(&self) -> bool;

    /// Selector name.
    fn name(&self) -> &str;

    /// Whether an implementation with this name is visible in the scope.
    fn exists_implementation(&self, name: &str, world: Option<&str>) -> bool;

    /// Implementation by name.
    fn implementation(&self, name: &str) -> Option<Arc<dyn IdentityEconomy>>;

    /// Default implementation of the scope.
    fn default_implementation(&self, world: Option<&str>) -> Option<Arc<dyn IdentityEconomy>>;

    /// Whether the scope has a default implementation.
    fn has_default(&self, world: Option<&str>) -> bool {
        self.default_implementation(world).is_some()
    }

    /// Every implementation visible in the scope.
    fn all_implementations(&self, world: Option<&str>) -> Vec<Arc<dyn IdentityEconomy>>;
}

type Table = BTreeMap<String, Arc<dyn IdentityEconomy>>;

/// Immutable name → provider registry implementing [`MultiEconomy`].
///
/// Built once with [`EconomyRegistry::builder`].
pub struct EconomyRegistry {
    name: String,
    enabled: bool,
    global: Table,
    worlds: BTreeMap<String, Table>,
    default: Option<String>,
    world_defaults: BTreeMap<String, String>,
}

impl EconomyRegistry {
    /// Starts building a registry called `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> EconomyRegistryBuilder {
        EconomyRegistryBuilder {
            name: name.into(),
            enabled: true,
            global: Table::new(),
            worlds: BTreeMap::new(),
            default: None,
            world_defaults: BTreeMap::new(),
        }
    }

    /// Names of the implementations visible in the scope, sorted.
    #[must_use]
    pub fn implementation_names(&self, world: Option<&str>) -> Vec<String> {
        self.scope(world).into_keys().map(str::to_owned).collect()
    }

    fn resolve(&self, name: &str, world: Option<&str>) -> Option<Arc<dyn IdentityEconomy>> {
        world
            .and_then(|w| self.worlds.get(w))
            .and_then(|table| table.get(name))
            .or_else(|| self.global.get(name))
            .cloned()
    }

    fn scope(&self, world: Option<&str>) -> BTreeMap<&str, &Arc<dyn IdentityEconomy>> {
        let mut visible: BTreeMap<&str, &Arc<dyn IdentityEconomy>> =
            self.global.iter().map(|(k, v)| (k.as_str(), v)).collect();
        if let Some(table) = world.and_then(|w| self.worlds.get(w)) {
            visible.extend(table.iter().map(|(k, v)| (k.as_str(), v)));
        }
        visible
    }
}

impl MultiEconomy for EconomyRegistry {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn exists_implementation(&self, name: &str, world: Option<&str>) -> bool {
        self.resolve(name, world).is_some()
    }

    fn implementation(&self, name: &str) -> Option<Arc<dyn IdentityEconomy>> {
        self.global
            .get(name)
            .or_else(|| self.worlds.values().find_map(|table| table.get(name)))
            .cloned()
    }

    fn default_implementation(&self, world: Option<&str>) -> Option<Arc<dyn IdentityEconomy>> {
        if let Some(w) = world {
            if let Some(name) = self.world_defaults.get(w) {
                return self.resolve(name, Some(w));
            }
        }
        self.default
            .as_deref()
            .and_then(|name| self.global.get(name))
            .cloned()
    }

    fn all_implementations(&self, world: Option<&str>) -> Vec<Arc<dyn IdentityEconomy>> {
        self.scope(world).into_values().cloned().collect()
    }
}

impl fmt::Debug for EconomyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EconomyRegistry")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .field("global", &self.global.keys().collect::<Vec<_>>())
            .field("worlds", &self.worlds.keys().collect::<Vec<_>>())
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

/// Builder for [`EconomyRegistry`].
pub struct EconomyRegistryBuilder {
    name: String,
    enabled: bool,
    global: Table,
    worlds: BTreeMap<String, Table>,
    default: Option<String>,
    world_defaults: BTreeMap<String, String>,
}

impl EconomyRegistryBuilder {
    /// Adds a global implementation. A later one with the same name replaces it.
    #[must_use]
    pub fn implementation(
        mut self,
        name: impl Into<String>,
        provider: Arc<dyn IdentityEconomy>,
    ) -> Self {
        self.global.insert(name.into(), provider);
        self
    }

    /// Adds an implementation visible only in `world`.
    #[must_use]
    pub fn world_implementation(
        mut self,
        world: impl Into<String>,
        name: impl Into<String>,
        provider: Arc<dyn IdentityEconomy>,
    ) -> Self {
        self.worlds
            .entry(world.into())
            .or_default()
            .insert(name.into(), provider);
        self
    }

    /// Names the global default. Must name a global implementation.
    #[must_use]
    pub fn default_implementation(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Names the default for `world`. Must name an implementation visible there.
    #[must_use]
    pub fn world_default(mut self, world: impl Into<String>, name: impl Into<String>) -> Self {
        self.world_defaults.insert(world.into(), name.into());
        self
    }

    /// Sets whether the selector reports itself as enabled.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Finishes the registry.
    ///
    /// # Errors
    ///
    /// Returns [`EconomyError::UnknownImplementation`] if a default names an
    /// implementation that is not visible in its scope.
    pub fn build(self) -> EconomyResult<EconomyRegistry> {
        let registry = EconomyRegistry {
            name: self.name,
            enabled: self.enabled,
            global: self.global,
            worlds: self.worlds,
            default: self.default,
            world_defaults: self.world_defaults,
        };

        if let Some(name) = &registry.default {
            if !registry.global.contains_key(name) {
                return Err(EconomyError::UnknownImplementation(name.clone()));
            }
        }
        for (world, name) in &registry.world_defaults {
            if registry.resolve(name, Some(world)).is_none() {
                return Err(EconomyError::UnknownImplementation(format!("{world}/{name}")));
            }
        }

        tracing::debug!("Built economy registry {:?}", registry);
        Ok(registry)
    }
}
