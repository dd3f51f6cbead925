// crates/usecase/src/resolve.rs
use freeze_scope_domain::{EntityConfig, EntityFieldType, EntityFilter, FreezeWindowLevel};
use freeze_scope_ports::{ResourceMap, Resources};
use freeze_scope_shared_kernel::{Identifier, SelectOption};
use log::debug;

/// Label lookup for the refs of one entity config row.
///
/// At account level a row filtering on exactly one org resolves its
/// projects through that org's project map, since project identifiers are
/// only unique inside an org.
#[derive(Debug, Clone, Copy)]
pub struct RowResolver<'a> {
    resources: &'a Resources,
    projects: Option<&'a ResourceMap>,
}

impl<'a> RowResolver<'a> {
    pub fn new(config: &EntityConfig, resources: &'a Resources) -> Self {
        Self { resources, projects: project_map(config, resources) }
    }

    #[must_use]
    pub fn map_for(&self, field: EntityFieldType) -> Option<&'a ResourceMap> {
        match field {
            EntityFieldType::Proj => self.projects,
            other => self.resources.map_for(other),
        }
    }

    /// Options for `refs`; unknown identifiers become their own label.
    #[must_use]
    pub fn resolve(&self, field: EntityFieldType, refs: &[Identifier]) -> Vec<SelectOption> {
        let map = self.map_for(field);
        refs.iter()
            .map(|id| match map.and_then(|m| m.get(id)) {
                Some(option) => option.clone(),
                None => {
                    debug!("no {field} label for `{id}`, using the identifier");
                    SelectOption::bare(id.as_str())
                }
            })
            .collect()
    }
}

fn project_map<'a>(config: &EntityConfig, resources: &'a Resources) -> Option<&'a ResourceMap> {
    if resources.freeze_window_level == FreezeWindowLevel::Account
        && let EntityFilter::Equals(orgs) = config.filter_for(EntityFieldType::Org)
        && let [org] = orgs.as_slice()
        && let Some(projects) = resources.projects_of_org(org)
    {
        return Some(projects);
    }
    resources.map_for(EntityFieldType::Proj)
}
