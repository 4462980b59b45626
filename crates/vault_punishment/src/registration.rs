//! Publishing a [`Punishment`] provider.

use std::sync::Arc;

use vault_core::{claim_slots, ContractKey, DirectoryExt, RegistrationOptions, ServiceDirectory};

use crate::punishment::Punishment;

/// Publishes `provider` under the Punishment slot.
///
/// Without `force` nothing happens when the slot already has a provider.
/// Returns whether the provider was published.
pub fn register_punishment(
    directory: &dyn ServiceDirectory,
    provider: Arc<dyn Punishment>,
    options: &RegistrationOptions,
    force: bool,
) -> bool {
    let slots = [ContractKey::of::<dyn Punishment>()];
    let label = format!("punishment provider of {}", options.owner);
    let Some(options) = claim_slots(directory, &slots, force, &label, options) else {
        return false;
    };

    directory.provide::<dyn Punishment>(provider, &options);
    tracing::info!("Registered {} at {:?}", label, options.priority);
    true
}
