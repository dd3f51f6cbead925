// crates/usecase/src/summary.rs
use std::fmt;

use freeze_scope_domain::{EntityConfig, EntityFieldType, EntityFilter};
use freeze_scope_ports::{LabelKey, LabelProvider, Resources};
use freeze_scope_shared_kernel::Identifier;

use crate::resolve::RowResolver;

/// One line of a row's read-only view, e.g. `Service: All except Billing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSummary {
    pub field: EntityFieldType,
    pub label: String,
    pub value: String,
}

impl fmt::Display for FieldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Summaries of the entries of `config`, in entry order.
pub fn summarize<L>(config: &EntityConfig, labels: &L, resources: &Resources) -> Vec<FieldSummary>
where
    L: LabelProvider + ?Sized,
{
    let resolver = RowResolver::new(config, resources);
    config
        .entities
        .iter()
        .map(|entry| {
            let joined = |refs: &[Identifier]| {
                let options = resolver.resolve(entry.field, refs);
                options.into_iter().map(|o| o.label).collect::<Vec<_>>().join(", ")
            };
            let value = match &entry.filter {
                EntityFilter::All => labels.label(LabelKey::all_option(entry.field)),
                EntityFilter::Equals(refs) => joined(refs),
                EntityFilter::NotEquals(refs) => format!("{} {}", labels.label(LabelKey::AllExcept), joined(refs)),
            };
            FieldSummary { field: entry.field, label: labels.label(LabelKey::FieldName(entry.field)), value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use freeze_scope_domain::{EntityFilterEntry, FreezeWindowLevel};
    use freeze_scope_shared_kernel::SelectOption;

    use super::*;

    fn labels(key: LabelKey) -> String {
        match key {
            LabelKey::AllExcept => "All except".into(),
            LabelKey::AllEnvironments => "All Environments".into(),
            LabelKey::FieldName(field) => field.to_string(),
            other => format!("{other:?}"),
        }
    }

    #[test]
    fn renders_each_filter_type() {
        let mut resources = Resources::empty(FreezeWindowLevel::Project);
        resources.services_map.insert("svc_1".into(), SelectOption::new("Billing", "svc_1"));
        let config = EntityConfig::new(
            "rule",
            vec![
                EntityFilterEntry::not_equals(EntityFieldType::Service, ["svc_1", "svc_2"]),
                EntityFilterEntry::all(EntityFieldType::Environment),
                EntityFilterEntry::equals(EntityFieldType::EnvType, ["Production"]),
            ],
        );

        let lines: Vec<_> = summarize(&config, &labels, &resources).iter().map(ToString::to_string).collect();

        assert_eq!(
            lines,
            vec!["Service: All except Billing, svc_2", "Environment: All Environments", "EnvType: Production"]
        );
    }
}
