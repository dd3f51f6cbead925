// crates/domain/src/model/config.rs
use serde::{Deserialize, Serialize};

use super::{EntityFieldType, EntityFilter, EntityFilterEntry};

static ALL_FILTER: EntityFilter = EntityFilter::All;

/// A named row of filter entries, at most one per field type.
///
/// Fields without an entry are implicitly `All`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    pub name: String,
    #[serde(default)]
    pub entities: Vec<EntityFilterEntry>,
}

impl EntityConfig {
    pub fn new(name: impl Into<String>, entities: Vec<EntityFilterEntry>) -> Self {
        Self { name: name.into(), entities }
    }

    #[must_use]
    pub fn position(&self, field: EntityFieldType) -> Option<usize> {
        position_of(&self.entities, field)
    }

    #[must_use]
    pub fn entry(&self, field: EntityFieldType) -> Option<&EntityFilterEntry> {
        self.entities.iter().find(|e| e.field == field)
    }

    /// Effective filter of `field`, `All` when the row has no entry for it.
    #[must_use]
    pub fn filter_for(&self, field: EntityFieldType) -> &EntityFilter {
        self.entry(field).map_or(&ALL_FILTER, |e| &e.filter)
    }

    /// Overwrite the entry for the same field in place, or append it.
    pub fn upsert(&mut self, entry: EntityFilterEntry) {
        upsert_entry(&mut self.entities, entry);
    }
}

pub(crate) fn position_of(entities: &[EntityFilterEntry], field: EntityFieldType) -> Option<usize> {
    entities.iter().position(|e| e.field == field)
}

/// Overwrite the entry for the same field in place, or append it.
pub fn upsert_entry(entities: &mut Vec<EntityFilterEntry>, entry: EntityFilterEntry) {
    match position_of(entities, entry.field) {
        Some(index) => entities[index] = entry,
        None => entities.push(entry),
    }
}
