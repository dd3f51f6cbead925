// crates/usecase/src/editor.rs
use freeze_scope_domain::{
    EntityConfig, FieldError, FieldsVisibility, FormState, FreezeWindowLevel, RowFormState, ValidationSchema,
    empty_entity_config, fields_visibility, validation_schema,
};
use freeze_scope_ports::{LabelProvider, Resources};
use freeze_scope_shared_kernel::{DomainError, Result};

use crate::{forward, reverse};

/// Row list editing of one declaration at a fixed level.
#[derive(Debug, Clone, Copy)]
pub struct ScopeEditor {
    visibility: FieldsVisibility,
    schema: ValidationSchema,
}

impl ScopeEditor {
    pub fn new(level: FreezeWindowLevel) -> Self {
        Self { visibility: fields_visibility(level), schema: validation_schema(level) }
    }

    #[must_use]
    pub fn level(&self) -> FreezeWindowLevel {
        self.visibility.freeze_window_level
    }

    #[must_use]
    pub fn visibility(&self) -> &FieldsVisibility {
        &self.visibility
    }

    #[must_use]
    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    /// Form state of `configs`.
    pub fn seed<L>(&self, configs: &[EntityConfig], labels: &L, resources: &Resources) -> FormState
    where
        L: LabelProvider + ?Sized,
    {
        forward::to_form_state(configs, labels, resources)
    }

    /// Append a fresh row with every visible field set to `All`; returns its index.
    pub fn add_row(&self, configs: &mut Vec<EntityConfig>, name: impl Into<String>) -> usize {
        configs.push(EntityConfig::new(name, empty_entity_config(&self.visibility)));
        configs.len() - 1
    }

    pub fn remove_row(&self, configs: &mut Vec<EntityConfig>, index: usize) -> Result<EntityConfig> {
        if index >= configs.len() {
            return Err(DomainError::RowOutOfRange { index, len: configs.len() }.into());
        }
        Ok(configs.remove(index))
    }

    /// Rebuild row `index` from its form state.
    pub fn update_row(&self, configs: &mut [EntityConfig], index: usize, row: &RowFormState) -> Result<()> {
        let len = configs.len();
        let slot = configs.get_mut(index).ok_or(DomainError::RowOutOfRange { index, len })?;
        *slot = reverse::to_entity_config(slot.entities.clone(), row, &self.visibility);
        Ok(())
    }

    /// Rebuild every row of `form`. The form decides the row count: rows past
    /// the end of `configs` start from an empty entity list.
    #[must_use]
    pub fn apply_form(&self, configs: &[EntityConfig], form: &FormState) -> Vec<EntityConfig> {
        form.iter()
            .enumerate()
            .map(|(index, row)| {
                let prior = configs.get(index).map(|c| c.entities.clone()).unwrap_or_default();
                reverse::to_entity_config(prior, row, &self.visibility)
            })
            .collect()
    }

    #[must_use]
    pub fn validate(&self, form: &FormState) -> Vec<FieldError> {
        self.schema.validate_form(form)
    }
}
