//! # Vault Core
//!
//! Types shared by every Vault service contract.
//!
//! ## What lives here
//!
//! - [`PlayerIdentity`] and [`IdentitySource`]: the opaque player key the host
//!   hands out, and the lookup that resolves a UUID to a display name.
//! - [`ServiceDirectory`]: the host's provider directory, always passed in by
//!   the caller. [`MemoryDirectory`] is the in-process implementation.
//! - [`VaultConfig`]: startup configuration loaded from TOML.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vault_core::{DirectoryExt, MemoryDirectory, RegistrationOptions};
//!
//! let directory = MemoryDirectory::new();
//! directory.provide::<dyn MyContract>(Arc::new(provider), &RegistrationOptions::default());
//! let active = directory.lookup::<dyn MyContract>();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod directory;
pub mod error;
pub mod identity;

pub use config::{EconomyConfig, RegistrationConfig, VaultConfig};
pub use directory::{
    claim_slots, ContractKey, DirectoryExt, MemoryDirectory, OwnerToken, ProviderHandle,
    RegistrationOptions, ServiceDirectory, ServicePriority,
};
pub use error::{CoreError, CoreResult};
pub use identity::{IdentitySource, MemoryIdentitySource, PlayerIdentity};
