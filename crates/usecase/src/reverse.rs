// crates/usecase/src/reverse.rs
//! Form state → persisted entity configs.
//!
//! Each field family has its own adapter; the level decides which adapters
//! run and in which order. Entries for fields an adapter does not touch
//! (e.g. `Pipeline` while editing at account level) are carried over from
//! the prior entities unchanged.

pub mod adapters;

use freeze_scope_domain::{EntityConfig, EntityFilterEntry, FieldsVisibility, RowFormState, model::upsert_entry};
use freeze_scope_shared_kernel::{DomainError, Result};
use log::debug;

pub use adapters::{FieldAdapter, FlatAdapter, HierarchicalAdapter, SingleSelectAdapter, adapters_for};

/// Rebuild one row from its form state.
///
/// `prior` is the row's current entity list, owned by this call.
#[must_use]
pub fn to_entity_config(
    prior: Vec<EntityFilterEntry>,
    row: &RowFormState,
    visibility: &FieldsVisibility,
) -> EntityConfig {
    let mut entities = prior;

    for adapter in adapters_for(visibility.freeze_window_level) {
        match adapter.adapt(row) {
            Some(filter) => {
                debug!("{}: {} -> {}", row.name, adapter.field(), filter.filter_type());
                upsert_entry(&mut entities, EntityFilterEntry::new(adapter.field(), filter));
            }
            None => debug!("{}: {} left as is", row.name, adapter.field()),
        }
    }

    EntityConfig::new(row.name.clone(), entities)
}

/// Rebuild row `index` of `configs`, returning the updated list.
pub fn apply_row(
    configs: &[EntityConfig],
    index: usize,
    row: &RowFormState,
    visibility: &FieldsVisibility,
) -> Result<Vec<EntityConfig>> {
    let prior = configs
        .get(index)
        .ok_or(DomainError::RowOutOfRange { index, len: configs.len() })?;

    let mut updated = configs.to_vec();
    updated[index] = to_entity_config(prior.entities.clone(), row, visibility);
    Ok(updated)
}
