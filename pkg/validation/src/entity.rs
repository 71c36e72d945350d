use pkg_constants::messages::{TEMPLATE_EXISTS, VIRTUAL_MACHINE_EXISTS};
use pkg_types::entity::{EntityKind, VmLikeEntity};
use pkg_types::settings::VmSettings;
use pkg_types::validation::Validation;

use crate::result::reject;

/// Reject `value` when an entity with the same name already lives in the
/// namespace selected in `settings`.
///
/// A missing value passes; emptiness is checked by the name syntax validator.
pub fn validate_vm_like_entity_name(
    value: Option<&str>,
    settings: &VmSettings,
    entities: &[VmLikeEntity],
) -> Validation {
    let Some(name) = value else {
        return Ok(());
    };
    let namespace = settings.namespace();

    match entities
        .iter()
        .find(|e| e.name() == name && e.namespace() == namespace)
    {
        Some(existing) => {
            tracing::debug!(entity = name, ?namespace, kind = %existing.kind, "name already taken");
            let message = match existing.kind {
                EntityKind::VirtualMachine => VIRTUAL_MACHINE_EXISTS,
                EntityKind::Template => TEMPLATE_EXISTS,
            };
            Err(reject("entity-name-unique", message))
        }
        None => Ok(()),
    }
}
