//! # Startup Configuration
//!
//! Loaded once when the host enables Vault. Every field has a default, so an
//! empty file (or no file at all) is a valid configuration.
//!
//! ```toml
//! [registration]
//! owner = "Vault"
//! priority = "normal"
//!
//! [economy]
//! no_bank_message = "This economy manager doesn't support banks!"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::directory::ServicePriority;
use crate::error::{CoreError, CoreResult};

/// Owner name used when the configuration does not name one.
pub const DEFAULT_OWNER: &str = "Vault";

/// Message attached to bank operations of a backend without bank support.
pub const DEFAULT_NO_BANK_MESSAGE: &str = "This economy manager doesn't support banks!";

/// Root configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// How providers are published into the directory.
    pub registration: RegistrationConfig,
    /// Economy defaults.
    pub economy: EconomyConfig,
}

/// Registration settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Plugin name registrations are made under.
    pub owner: String,
    /// Priority of every registration.
    pub priority: ServicePriority,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_owned(),
            priority: ServicePriority::Normal,
        }
    }
}

/// Economy settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Message returned by bank operations of backends without bank support.
    pub no_bank_message: String,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            no_bank_message: DEFAULT_NO_BANK_MESSAGE.to_owned(),
        }
    }
}

impl VaultConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if the text is not valid TOML for
    /// this schema or fails validation.
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| CoreError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ConfigRead`] if the file cannot be read, or
    /// [`CoreError::InvalidConfig`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CoreError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.registration.owner.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "registration.owner must not be empty".to_owned(),
            ));
        }
        if self.economy.no_bank_message.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "economy.no_bank_message must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
