// crates/ports/src/resources.rs
use std::collections::BTreeMap;

use freeze_scope_domain::{EntityFieldType, FreezeWindowLevel};
use freeze_scope_shared_kernel::{Identifier, Result, SelectOption};
use serde::{Deserialize, Serialize};

/// Identifier → `{label, value}` lookup.
pub type ResourceMap = BTreeMap<Identifier, SelectOption>;

/// Projects of a single org.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgProjects {
    #[serde(default)]
    pub projects_map: ResourceMap,
}

/// Snapshot of the selectable resources, populated by the host before any
/// conversion runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    #[serde(default)]
    pub orgs_map: ResourceMap,
    #[serde(default)]
    pub projects_map: ResourceMap,
    #[serde(default)]
    pub services_map: ResourceMap,
    #[serde(default)]
    pub environments_map: ResourceMap,
    #[serde(default)]
    pub pipelines_map: ResourceMap,
    #[serde(default)]
    pub projects_by_org_id: BTreeMap<Identifier, OrgProjects>,
    pub freeze_window_level: FreezeWindowLevel,
}

impl Resources {
    /// Empty snapshot for `level`.
    pub fn empty(level: FreezeWindowLevel) -> Self {
        Self {
            orgs_map: ResourceMap::new(),
            projects_map: ResourceMap::new(),
            services_map: ResourceMap::new(),
            environments_map: ResourceMap::new(),
            pipelines_map: ResourceMap::new(),
            projects_by_org_id: BTreeMap::new(),
            freeze_window_level: level,
        }
    }

    /// Global map of `field`. EnvType values are fixed and have no map.
    #[must_use]
    pub fn map_for(&self, field: EntityFieldType) -> Option<&ResourceMap> {
        match field {
            EntityFieldType::Org => Some(&self.orgs_map),
            EntityFieldType::Proj => Some(&self.projects_map),
            EntityFieldType::Pipeline => Some(&self.pipelines_map),
            EntityFieldType::Service => Some(&self.services_map),
            EntityFieldType::Environment => Some(&self.environments_map),
            EntityFieldType::EnvType => None,
        }
    }

    #[must_use]
    pub fn projects_of_org(&self, org: &Identifier) -> Option<&ResourceMap> {
        self.projects_by_org_id.get(org).map(|p| &p.projects_map)
    }
}

/// Port supplying the resource snapshot.
pub trait ResourceProvider: Send + Sync {
    fn resources(&self) -> Result<Resources>;
}
