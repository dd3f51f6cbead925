// crates/domain/src/level.rs
use std::{fmt, str::FromStr};

use freeze_scope_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

use crate::model::{EntityFieldType, EntityFilterEntry};

/// Scope a freeze window is declared at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FreezeWindowLevel {
    Account,
    Org,
    Project,
}

impl FreezeWindowLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Account => "ACCOUNT",
            Self::Org => "ORG",
            Self::Project => "PROJECT",
        }
    }

    /// Level implied by the scope identifiers of a declaration.
    #[must_use]
    pub fn infer(org_identifier: Option<&str>, project_identifier: Option<&str>) -> Self {
        let present = |id: Option<&str>| id.is_some_and(|s| !s.trim().is_empty());
        if present(project_identifier) {
            Self::Project
        } else if present(org_identifier) {
            Self::Org
        } else {
            Self::Account
        }
    }
}

impl fmt::Display for FreezeWindowLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FreezeWindowLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACCOUNT" => Ok(Self::Account),
            "ORG" => Ok(Self::Org),
            "PROJECT" => Ok(Self::Project),
            _ => Err(DomainError::UnknownLevel { value: s.to_string() }),
        }
    }
}

/// Which hierarchical fields a level shows. Service, Environment and
/// EnvType are shown at every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldsVisibility {
    pub freeze_window_level: FreezeWindowLevel,
    pub show_org_field: bool,
    pub show_project_field: bool,
    pub show_pipeline_field: bool,
}

impl FieldsVisibility {
    #[must_use]
    pub const fn is_visible(&self, field: EntityFieldType) -> bool {
        match field {
            EntityFieldType::Org => self.show_org_field,
            EntityFieldType::Proj => self.show_project_field,
            EntityFieldType::Pipeline => self.show_pipeline_field,
            EntityFieldType::Service | EntityFieldType::Environment | EntityFieldType::EnvType => true,
        }
    }

    /// Visible fields in display order.
    #[must_use]
    pub fn visible_fields(&self) -> Vec<EntityFieldType> {
        EntityFieldType::ALL.into_iter().filter(|f| self.is_visible(*f)).collect()
    }
}

#[must_use]
pub const fn fields_visibility(level: FreezeWindowLevel) -> FieldsVisibility {
    let (show_org_field, show_project_field, show_pipeline_field) = match level {
        FreezeWindowLevel::Account => (true, true, false),
        FreezeWindowLevel::Org => (false, true, false),
        FreezeWindowLevel::Project => (false, false, true),
    };
    FieldsVisibility { freeze_window_level: level, show_org_field, show_project_field, show_pipeline_field }
}

/// Entries of a freshly added row: `All` for each visible field.
#[must_use]
pub fn empty_entity_config(visibility: &FieldsVisibility) -> Vec<EntityFilterEntry> {
    visibility.visible_fields().into_iter().map(EntityFilterEntry::all).collect()
}
