// crates/domain/src/form/keys.rs
use std::fmt;

use crate::model::EntityFieldType;

/// Form keys of the exclude checkbox and exclusion list paired with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcludeFieldKeys {
    pub checkbox_key: &'static str,
    pub key: &'static str,
}

const EXCLUDE_ORG: ExcludeFieldKeys = ExcludeFieldKeys { checkbox_key: "ExcludeOrgCheckbox", key: "ExcludeOrg" };
const EXCLUDE_PROJ: ExcludeFieldKeys = ExcludeFieldKeys { checkbox_key: "ExcludeProjCheckbox", key: "ExcludeProj" };
const EXCLUDE_PIPELINE: ExcludeFieldKeys =
    ExcludeFieldKeys { checkbox_key: "ExcludePipelineCheckbox", key: "ExcludePipeline" };
const EXCLUDE_SERVICE: ExcludeFieldKeys =
    ExcludeFieldKeys { checkbox_key: "ExcludeServiceCheckbox", key: "ExcludeService" };
const EXCLUDE_ENVIRONMENT: ExcludeFieldKeys =
    ExcludeFieldKeys { checkbox_key: "ExcludeEnvironmentCheckbox", key: "ExcludeEnvironment" };

/// Exclude pairing of `field`. EnvType has none: its control is a single select.
#[must_use]
pub const fn exclude_field_keys(field: EntityFieldType) -> Option<ExcludeFieldKeys> {
    match field {
        EntityFieldType::Org => Some(EXCLUDE_ORG),
        EntityFieldType::Proj => Some(EXCLUDE_PROJ),
        EntityFieldType::Pipeline => Some(EXCLUDE_PIPELINE),
        EntityFieldType::Service => Some(EXCLUDE_SERVICE),
        EntityFieldType::Environment => Some(EXCLUDE_ENVIRONMENT),
        EntityFieldType::EnvType => None,
    }
}

/// Key of a single form control inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKey {
    Name,
    Field(EntityFieldType),
    ExcludeCheckbox(EntityFieldType),
    Exclude(EntityFieldType),
}

impl FormKey {
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        if key == "name" {
            return Some(Self::Name);
        }
        EntityFieldType::ALL.into_iter().find_map(|field| {
            if key == field.as_str() {
                return Some(Self::Field(field));
            }
            let pair = exclude_field_keys(field)?;
            if key == pair.checkbox_key {
                Some(Self::ExcludeCheckbox(field))
            } else if key == pair.key {
                Some(Self::Exclude(field))
            } else {
                None
            }
        })
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Field(field) => field.as_str(),
            // Only pairable fields produce exclude keys.
            Self::ExcludeCheckbox(field) => exclude_field_keys(field).map_or("", |k| k.checkbox_key),
            Self::Exclude(field) => exclude_field_keys(field).map_or("", |k| k.key),
        }
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path of a form control as used by the form-binding layer, e.g. `entity[0].Service`.
#[must_use]
pub fn field_path(row: usize, key: FormKey) -> String {
    format!("entity[{row}].{key}")
}
