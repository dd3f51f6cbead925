// crates/domain/src/validation/rules.rs
use std::fmt;

use serde::Serialize;

use crate::{
    form::{FormKey, RowFormState, field_path},
    model::EntityFieldType,
};

/// Condition under which a field stops being required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Required unless any of the listed fields has a value.
    UnlessAny(&'static [EntityFieldType]),
    /// Required unless every listed field has a value.
    UnlessAll(&'static [EntityFieldType]),
}

impl Requirement {
    fn is_waived(self, row: &RowFormState) -> bool {
        match self {
            Self::UnlessAny(fields) => fields.iter().any(|f| row.has_value(*f)),
            Self::UnlessAll(fields) => fields.iter().all(|f| row.has_value(*f)),
        }
    }
}

/// A conditional required rule on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: EntityFieldType,
    pub requirement: Requirement,
}

impl FieldRule {
    pub const fn new(field: EntityFieldType, requirement: Requirement) -> Self {
        Self { field, requirement }
    }

    #[must_use]
    pub fn is_required(&self, row: &RowFormState) -> bool {
        !self.requirement.is_waived(row)
    }

    /// Error for row `index` when the field is required and empty.
    #[must_use]
    pub fn check(&self, index: usize, row: &RowFormState) -> Option<FieldError> {
        (self.is_required(row) && !row.has_value(self.field)).then(|| FieldError {
            path: field_path(index, FormKey::Field(self.field)),
            field: self.field,
            kind: FieldErrorKind::Required,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldErrorKind {
    Required,
}

/// Inline error attached to a form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub field: EntityFieldType,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldErrorKind::Required => write!(f, "{}: {} is required", self.path, self.field),
        }
    }
}

#[cfg(test)]
mod tests {
    use freeze_scope_shared_kernel::SelectOption;

    use super::*;
    use crate::form::FieldValue;

    const OTHERS: &[EntityFieldType] = &[EntityFieldType::Environment, EntityFieldType::Pipeline];

    #[test]
    fn unless_any_is_waived_by_one_value() {
        let rule = FieldRule::new(EntityFieldType::Service, Requirement::UnlessAny(OTHERS));
        let row = RowFormState::named("r")
            .with_field(EntityFieldType::Pipeline, FieldValue::Options(vec![SelectOption::bare("p")]));
        assert!(!rule.is_required(&row));
        assert_eq!(rule.check(0, &row), None);
    }

    #[test]
    fn unless_all_needs_every_value() {
        let rule = FieldRule::new(EntityFieldType::Org, Requirement::UnlessAll(OTHERS));
        let row = RowFormState::named("r")
            .with_field(EntityFieldType::Pipeline, FieldValue::Options(vec![SelectOption::bare("p")]));
        let err = rule.check(1, &row).expect("org is still required");
        assert_eq!(err.path, "entity[1].Org");
        assert_eq!(err.to_string(), "entity[1].Org: Org is required");
    }
}
