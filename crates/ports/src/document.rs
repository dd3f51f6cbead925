// crates/ports/src/document.rs
use freeze_scope_domain::{EntityConfig, FreezeWindowLevel};
use freeze_scope_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Persisted freeze window document, `freeze:` at the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreezeDeclaration {
    pub freeze: FreezeWindowSpec,
}

/// Body of a freeze window declaration.
///
/// Only the scope part is modeled; every other key (windows, status,
/// description, ...) is kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreezeWindowSpec {
    pub name: String,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_identifier: Option<String>,
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
    #[serde(flatten)]
    pub extra: serde_yaml::Mapping,
}

impl FreezeWindowSpec {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            org_identifier: None,
            project_identifier: None,
            entities: Vec::new(),
            extra: serde_yaml::Mapping::new(),
        }
    }

    #[must_use]
    pub fn level(&self) -> FreezeWindowLevel {
        FreezeWindowLevel::infer(self.org_identifier.as_deref(), self.project_identifier.as_deref())
    }
}

/// Port loading and saving a declaration.
pub trait DeclarationStore {
    fn load(&self) -> Result<FreezeDeclaration>;
    fn save(&self, declaration: &FreezeDeclaration) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_follows_scope_identifiers() {
        let mut spec = FreezeWindowSpec::new("window", "window");
        assert_eq!(spec.level(), FreezeWindowLevel::Account);
        spec.org_identifier = Some("default".into());
        assert_eq!(spec.level(), FreezeWindowLevel::Org);
        spec.project_identifier = Some("web".into());
        assert_eq!(spec.level(), FreezeWindowLevel::Project);
    }
}
