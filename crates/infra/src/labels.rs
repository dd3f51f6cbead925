// crates/infra/src/labels.rs
use freeze_scope_domain::EntityFieldType;
use freeze_scope_ports::{LabelKey, LabelProvider};

/// Built-in English strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl EnglishLabels {
    #[must_use]
    pub const fn text(key: LabelKey) -> &'static str {
        match key {
            LabelKey::AllOrganizations => "All Organizations",
            LabelKey::AllProjects => "All Projects",
            LabelKey::AllPipelines => "All Pipelines",
            LabelKey::AllServices => "All Services",
            LabelKey::AllEnvironments => "All Environments",
            LabelKey::AllEnvironmentTypes => "All Environment Types",
            LabelKey::AllExcept => "All except",
            LabelKey::FieldName(field) => match field {
                EntityFieldType::Org => "Organization",
                EntityFieldType::Proj => "Project",
                EntityFieldType::Pipeline => "Pipeline",
                EntityFieldType::Service => "Service",
                EntityFieldType::Environment => "Environment",
                EntityFieldType::EnvType => "Environment Type",
            },
        }
    }
}

impl LabelProvider for EnglishLabels {
    fn label(&self, key: LabelKey) -> String {
        Self::text(key).to_string()
    }
}
