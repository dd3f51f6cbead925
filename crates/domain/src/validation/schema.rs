// crates/domain/src/validation/schema.rs
use crate::{
    form::{FormState, RowFormState},
    level::FreezeWindowLevel,
    model::EntityFieldType::{Environment, Org, Pipeline, Proj, Service},
    validation::{FieldError, FieldRule, Requirement},
};

const PROJECT_RULES: &[FieldRule] = &[
    FieldRule::new(Service, Requirement::UnlessAny(&[Environment, Pipeline])),
    FieldRule::new(Environment, Requirement::UnlessAny(&[Service, Pipeline])),
    FieldRule::new(Pipeline, Requirement::UnlessAny(&[Service, Environment])),
];

const ORG_RULES: &[FieldRule] = &[
    FieldRule::new(Service, Requirement::UnlessAny(&[Environment, Proj])),
    FieldRule::new(Environment, Requirement::UnlessAny(&[Service, Proj])),
    FieldRule::new(Proj, Requirement::UnlessAny(&[Service, Environment])),
];

// Either the org+project pair or the service+environment pair must be filled.
// Nothing requires org and project together on their own.
const ACCOUNT_RULES: &[FieldRule] = &[
    FieldRule::new(Service, Requirement::UnlessAll(&[Org, Proj])),
    FieldRule::new(Environment, Requirement::UnlessAll(&[Org, Proj])),
    FieldRule::new(Org, Requirement::UnlessAll(&[Service, Environment])),
    FieldRule::new(Proj, Requirement::UnlessAll(&[Service, Environment])),
];

/// Required-field rules of one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSchema {
    level: FreezeWindowLevel,
    rules: &'static [FieldRule],
}

impl ValidationSchema {
    #[must_use]
    pub const fn level(&self) -> FreezeWindowLevel {
        self.level
    }

    #[must_use]
    pub const fn rules(&self) -> &'static [FieldRule] {
        self.rules
    }

    /// Errors of row `index`, in rule order.
    #[must_use]
    pub fn validate(&self, index: usize, row: &RowFormState) -> Vec<FieldError> {
        self.rules.iter().filter_map(|rule| rule.check(index, row)).collect()
    }

    #[must_use]
    pub fn validate_form(&self, form: &FormState) -> Vec<FieldError> {
        form.iter().enumerate().flat_map(|(index, row)| self.validate(index, row)).collect()
    }
}

#[must_use]
pub const fn validation_schema(level: FreezeWindowLevel) -> ValidationSchema {
    let rules = match level {
        FreezeWindowLevel::Project => PROJECT_RULES,
        FreezeWindowLevel::Org => ORG_RULES,
        FreezeWindowLevel::Account => ACCOUNT_RULES,
    };
    ValidationSchema { level, rules }
}
