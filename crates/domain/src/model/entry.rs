// crates/domain/src/model/entry.rs
use freeze_scope_shared_kernel::{ALL_SENTINEL, Identifier};
use log::warn;
use serde::{Deserialize, Serialize};

use super::{EntityFieldType, EntityFilter, FilterType};

/// One field constraint of an entity config row.
///
/// Serialized as `{type, filterType, entityRefs?}` where `entityRefs` is
/// omitted for `All`. `"All"` is reserved for the form's "All" option and is
/// dropped from persisted refs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntityFilterEntry", into = "RawEntityFilterEntry")]
pub struct EntityFilterEntry {
    pub field: EntityFieldType,
    pub filter: EntityFilter,
}

impl EntityFilterEntry {
    pub fn new(field: EntityFieldType, filter: EntityFilter) -> Self {
        Self { field, filter }
    }

    pub fn all(field: EntityFieldType) -> Self {
        Self::new(field, EntityFilter::All)
    }

    pub fn equals<I, T>(field: EntityFieldType, refs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        Self::new(field, EntityFilter::equals(refs.into_iter().map(Into::into)))
    }

    pub fn not_equals<I, T>(field: EntityFieldType, refs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        Self::new(field, EntityFilter::not_equals(refs.into_iter().map(Into::into)))
    }

    #[must_use]
    pub const fn filter_type(&self) -> FilterType {
        self.filter.filter_type()
    }

    #[must_use]
    pub fn refs(&self) -> &[Identifier] {
        self.filter.refs()
    }
}

/// Wire shape of [`EntityFilterEntry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntityFilterEntry {
    #[serde(rename = "type")]
    field: EntityFieldType,
    filter_type: FilterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    entity_refs: Option<Vec<Identifier>>,
}

impl From<RawEntityFilterEntry> for EntityFilterEntry {
    fn from(raw: RawEntityFilterEntry) -> Self {
        let mut refs = raw.entity_refs.unwrap_or_default();

        if refs.iter().any(|r| r.as_str() == ALL_SENTINEL) {
            warn!("{} entry lists the reserved ref `{ALL_SENTINEL}`, dropping it", raw.field);
            refs.retain(|r| r.as_str() != ALL_SENTINEL);
        }

        if !raw.field.is_multi_valued() && refs.len() > 1 {
            warn!("{} entry carries {} refs, keeping only `{}`", raw.field, refs.len(), refs[0]);
            refs.truncate(1);
        }

        let filter = match raw.filter_type {
            FilterType::All => EntityFilter::All,
            FilterType::Equals => EntityFilter::equals(refs),
            FilterType::NotEquals => EntityFilter::not_equals(refs),
        };

        if filter.filter_type() != raw.filter_type {
            warn!("{} entry declares {} without refs, treating it as All", raw.field, raw.filter_type);
        }

        Self { field: raw.field, filter }
    }
}

impl From<EntityFilterEntry> for RawEntityFilterEntry {
    fn from(entry: EntityFilterEntry) -> Self {
        let filter_type = entry.filter.filter_type();
        let entity_refs = match entry.filter {
            EntityFilter::All => None,
            EntityFilter::Equals(refs) | EntityFilter::NotEquals(refs) => Some(refs),
        };
        Self { field: entry.field, filter_type, entity_refs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_entries_omit_entity_refs() {
        let json = serde_json::to_value(EntityFilterEntry::all(EntityFieldType::Service)).expect("serializes");
        assert_eq!(json, serde_json::json!({ "type": "Service", "filterType": "All" }));
    }

    #[test]
    fn equals_entries_keep_entity_refs() {
        let entry = EntityFilterEntry::equals(EntityFieldType::Org, ["org_1", "org_2"]);
        let json = serde_json::to_value(entry).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({ "type": "Org", "filterType": "Equals", "entityRefs": ["org_1", "org_2"] })
        );
    }

    #[test]
    fn ref_less_equals_is_read_as_all() {
        let entry: EntityFilterEntry =
            serde_json::from_str(r#"{"type":"Pipeline","filterType":"Equals","entityRefs":[]}"#).expect("parses");
        assert_eq!(entry, EntityFilterEntry::all(EntityFieldType::Pipeline));

        let entry: EntityFilterEntry =
            serde_json::from_str(r#"{"type":"Pipeline","filterType":"NotEquals"}"#).expect("parses");
        assert_eq!(entry, EntityFilterEntry::all(EntityFieldType::Pipeline));
    }

    #[test]
    fn env_type_keeps_a_single_ref() {
        let entry: EntityFilterEntry = serde_json::from_str(
            r#"{"type":"EnvType","filterType":"Equals","entityRefs":["Production","PreProduction"]}"#,
        )
        .expect("parses");
        assert_eq!(entry.refs(), &[Identifier::from("Production")]);
    }

    #[test]
    fn reserved_all_ref_is_dropped() {
        let entry: EntityFilterEntry =
            serde_json::from_str(r#"{"type":"Service","filterType":"Equals","entityRefs":["All","svc_1"]}"#)
                .expect("parses");
        assert_eq!(entry, EntityFilterEntry::equals(EntityFieldType::Service, ["svc_1"]));

        let entry: EntityFilterEntry =
            serde_json::from_str(r#"{"type":"Service","filterType":"NotEquals","entityRefs":["All"]}"#)
                .expect("parses");
        assert_eq!(entry, EntityFilterEntry::all(EntityFieldType::Service));
    }

    #[test]
    fn unknown_field_type_is_rejected() {
        let result = serde_json::from_str::<EntityFilterEntry>(r#"{"type":"Cluster","filterType":"All"}"#);
        assert!(result.is_err());
    }
}
