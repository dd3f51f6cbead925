// crates/usecase/src/forward.rs
//! Persisted entity configs → form state.

use freeze_scope_domain::{
    EntityConfig, EntityFieldType, EntityFilter, ExcludeSelection, FieldValue, FormState, RowFormState,
    form::exclude_field_keys,
};
use freeze_scope_ports::{LabelKey, LabelProvider, Resources};
use freeze_scope_shared_kernel::SelectOption;
use log::debug;

use crate::resolve::RowResolver;

/// Seed the form from a declaration's entity configs, one row per config.
pub fn to_form_state<L>(configs: &[EntityConfig], labels: &L, resources: &Resources) -> FormState
where
    L: LabelProvider + ?Sized,
{
    FormState::new(configs.iter().map(|c| to_row_form_state(c, labels, resources)).collect())
}

pub fn to_row_form_state<L>(config: &EntityConfig, labels: &L, resources: &Resources) -> RowFormState
where
    L: LabelProvider + ?Sized,
{
    let resolver = RowResolver::new(config, resources);
    let mut row = RowFormState::named(config.name.clone());

    for entry in &config.entities {
        let field = entry.field;
        match &entry.filter {
            EntityFilter::All => row.set_field(field, all_value(field, labels)),
            EntityFilter::Equals(refs) => {
                let value = if field.is_multi_valued() {
                    FieldValue::Options(resolver.resolve(field, refs))
                } else {
                    refs.first().map_or_else(FieldValue::all_scalar, |r| FieldValue::Scalar(r.to_string()))
                };
                row.set_field(field, value);
            }
            EntityFilter::NotEquals(refs) => {
                row.set_field(field, all_value(field, labels));
                if exclude_field_keys(field).is_some() {
                    row.set_exclude(field, ExcludeSelection::new(true, resolver.resolve(field, refs)));
                } else {
                    debug!("{field} has no exclusion control, showing NotEquals as All");
                }
            }
        }
    }

    row
}

/// "All" value of a field: the sentinel for EnvType, the synthetic
/// "All <X>" option for the multi-selects.
pub fn all_value<L>(field: EntityFieldType, labels: &L) -> FieldValue
where
    L: LabelProvider + ?Sized,
{
    if field.is_multi_valued() {
        FieldValue::Options(vec![SelectOption::all(labels.label(LabelKey::all_option(field)))])
    } else {
        FieldValue::all_scalar()
    }
}
