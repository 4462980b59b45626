//! # Vault Economy
//!
//! Account-service contracts for game-server economy plugins, and the facades
//! that keep three generations of those contracts working together.
//!
//! ## Generations
//!
//! 1. [`Economy`] (Legacy) - keyed by display name, `f64` amounts
//! 2. [`IdentityEconomy`] - keyed by UUID, capability flags, `f64` amounts
//! 3. [`LedgerEconomy`] - keyed by UUID including banks, [`Decimal`] amounts
//!
//! ## Flow
//!
//! ```text
//! backend implements the oldest contract it can
//!     └─> wrapper bridges it to newer contracts (LegacyEconomy)
//!         └─> wrapper publishes every generation into the directory
//!             └─> callers look up whichever generation they were built for
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vault_core::{DirectoryExt, MemoryDirectory};
//! use vault_economy::{EconomyWrapper, IdentityEconomy};
//!
//! let directory = MemoryDirectory::new();
//! let registered = EconomyWrapper::new(Arc::new(my_name_keyed_backend))
//!     .register_providers(&directory);
//!
//! let identity = directory.lookup::<dyn IdentityEconomy>().unwrap();
//! assert!(!identity.supports_uuid_operations());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod bridge;
pub mod digits;
pub mod error;
pub mod events;
pub mod forwarding;
pub mod identity;
pub mod ledger;
pub mod legacy;
pub mod multi;
pub mod no_bank;
pub mod response;
pub mod wrappers;


pub use bridge::LegacyEconomy;
pub use digits::FractionalDigits;
pub use error::{ensure_supported, EconomyError, EconomyResult};
pub use events::{BalanceUpdateEvent, EventBuffer, EventSink};
pub use identity::IdentityEconomy;
pub use ledger::LedgerEconomy;
pub use legacy::Economy;
pub use multi::{EconomyRegistry, EconomyRegistryBuilder, MultiEconomy};
pub use no_bank::NoBankSupport;
pub use response::{EconomyResponse, LedgerResponse, ResponseType};
pub use wrappers::{
    EconomyWrapper, IdentityEconomyWrapper, LedgerEconomyWrapper, MultiEconomyWrapper,
};

pub use rust_decimal::Decimal;
pub use uuid::Uuid;
