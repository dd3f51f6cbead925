// crates/ports/src/labels.rs
use freeze_scope_domain::EntityFieldType;

/// Localized strings the converters need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    AllOrganizations,
    AllProjects,
    AllPipelines,
    AllServices,
    AllEnvironments,
    AllEnvironmentTypes,
    /// Prefix of an exclusion summary, as in "All except a, b".
    AllExcept,
    /// Display name of a field in summaries.
    FieldName(EntityFieldType),
}

impl LabelKey {
    /// Label key of the synthetic "All <X>" option of `field`.
    #[must_use]
    pub const fn all_option(field: EntityFieldType) -> Self {
        match field {
            EntityFieldType::Org => Self::AllOrganizations,
            EntityFieldType::Proj => Self::AllProjects,
            EntityFieldType::Pipeline => Self::AllPipelines,
            EntityFieldType::Service => Self::AllServices,
            EntityFieldType::Environment => Self::AllEnvironments,
            EntityFieldType::EnvType => Self::AllEnvironmentTypes,
        }
    }
}

/// Resolves a [`LabelKey`] to display text.
pub trait LabelProvider {
    fn label(&self, key: LabelKey) -> String;
}

impl<F> LabelProvider for F
where
    F: Fn(LabelKey) -> String,
{
    fn label(&self, key: LabelKey) -> String {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_label_providers() {
        let labels = |key: LabelKey| format!("{key:?}");
        assert_eq!(labels.label(LabelKey::all_option(EntityFieldType::Service)), "AllServices");
    }
}
