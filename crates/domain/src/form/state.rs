// crates/domain/src/form/state.rs
use std::collections::BTreeMap;

use freeze_scope_shared_kernel::{ALL_SENTINEL, Identifier, SelectOption};
use serde::{Deserialize, Serialize};

use crate::model::EntityFieldType;

/// Value of a field control: an option list for multi-selects, a bare
/// string for the EnvType single select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Options(Vec<SelectOption>),
    Scalar(String),
}

impl FieldValue {
    /// Single-select value meaning "all".
    #[must_use]
    pub fn all_scalar() -> Self {
        Self::Scalar(ALL_SENTINEL.to_string())
    }

    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        match self {
            Self::Options(options) => options.iter().any(SelectOption::is_all),
            Self::Scalar(value) => value == ALL_SENTINEL,
        }
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        match self {
            Self::Options(options) => !options.is_empty(),
            Self::Scalar(value) => !value.is_empty(),
        }
    }

    /// Identifiers of the selected options, in selection order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<Identifier> {
        match self {
            Self::Options(options) => options.iter().map(SelectOption::identifier).collect(),
            Self::Scalar(value) if value.is_empty() => Vec::new(),
            Self::Scalar(value) => vec![Identifier::new(value.clone())],
        }
    }
}

/// State of an `Exclude<Field>Checkbox` / `Exclude<Field>` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludeSelection {
    pub checked: bool,
    pub options: Vec<SelectOption>,
}

impl ExcludeSelection {
    pub fn new(checked: bool, options: Vec<SelectOption>) -> Self {
        Self { checked, options }
    }

    /// Checked with at least one excluded option.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.checked && !self.options.is_empty()
    }

    #[must_use]
    pub fn identifiers(&self) -> Vec<Identifier> {
        self.options.iter().map(SelectOption::identifier).collect()
    }
}

/// Form state of one entity config row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFormState {
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<EntityFieldType, FieldValue>,
    #[serde(default)]
    pub excludes: BTreeMap<EntityFieldType, ExcludeSelection>,
}

impl RowFormState {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    #[must_use]
    pub fn field(&self, field: EntityFieldType) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    #[must_use]
    pub fn exclude(&self, field: EntityFieldType) -> Option<&ExcludeSelection> {
        self.excludes.get(&field)
    }

    /// Whether `field` holds any selection, `All` included.
    #[must_use]
    pub fn has_value(&self, field: EntityFieldType) -> bool {
        self.field(field).is_some_and(FieldValue::has_value)
    }

    pub fn set_field(&mut self, field: EntityFieldType, value: FieldValue) {
        self.fields.insert(field, value);
    }

    pub fn set_exclude(&mut self, field: EntityFieldType, selection: ExcludeSelection) {
        self.excludes.insert(field, selection);
    }

    #[must_use]
    pub fn with_field(mut self, field: EntityFieldType, value: FieldValue) -> Self {
        self.set_field(field, value);
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, field: EntityFieldType, selection: ExcludeSelection) -> Self {
        self.set_exclude(field, selection);
        self
    }
}

/// Form state of a whole declaration, one row per entity config, same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    pub rows: Vec<RowFormState>,
}

impl FormState {
    pub fn new(rows: Vec<RowFormState>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&RowFormState> {
        self.rows.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowFormState> {
        self.rows.iter()
    }
}
