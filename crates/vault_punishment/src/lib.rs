//! # Vault Punishment
//!
//! Service contract for plugins that mute, ban or jail players, and the
//! registration that publishes such a provider into the host's directory.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use vault_core::{DirectoryExt, MemoryDirectory, RegistrationOptions};
//! use vault_punishment::{register_punishment, Punishment};
//!
//! let directory = MemoryDirectory::new();
//! register_punishment(&directory, Arc::new(my_backend), &RegistrationOptions::default(), false);
//!
//! let punishment = directory.lookup::<dyn Punishment>().unwrap();
//! punishment.mute(&player, Some(Duration::from_secs(600)));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod punishment;
pub mod registration;

pub use punishment::Punishment;
pub use registration::register_punishment;
