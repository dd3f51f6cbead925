// crates/usecase/src/reverse/adapters.rs
use freeze_scope_domain::{
    EntityFieldType::{self, EnvType, Environment, Org, Pipeline, Proj, Service},
    EntityFilter, FreezeWindowLevel, RowFormState,
};

/// Builds the filter of one field from a row's form state.
pub trait FieldAdapter: Sync {
    fn field(&self) -> EntityFieldType;

    /// New filter for the field, or `None` to leave the row's entry as it is.
    fn adapt(&self, row: &RowFormState) -> Option<EntityFilter>;
}

/// Org, project and pipeline, plus service and environment at project level.
///
/// An "All" selection becomes `NotEquals` when the exclude checkbox is set
/// with a non-empty list; an empty selection writes nothing.
#[derive(Debug, Clone, Copy)]
pub struct HierarchicalAdapter(pub EntityFieldType);

impl FieldAdapter for HierarchicalAdapter {
    fn field(&self) -> EntityFieldType {
        self.0
    }

    fn adapt(&self, row: &RowFormState) -> Option<EntityFilter> {
        let value = row.field(self.0)?;
        if value.is_all_selected() {
            let filter = match row.exclude(self.0) {
                Some(exclude) if exclude.is_active() => EntityFilter::not_equals(exclude.identifiers()),
                _ => EntityFilter::All,
            };
            Some(filter)
        } else if value.has_value() {
            Some(EntityFilter::equals(value.identifiers()))
        } else {
            None
        }
    }
}

/// Service and environment at account and org level.
///
/// A concrete selection wins over the exclusion list; anything else is `All`.
#[derive(Debug, Clone, Copy)]
pub struct FlatAdapter(pub EntityFieldType);

impl FieldAdapter for FlatAdapter {
    fn field(&self) -> EntityFieldType {
        self.0
    }

    fn adapt(&self, row: &RowFormState) -> Option<EntityFilter> {
        let selected = row.field(self.0).filter(|v| v.has_value() && !v.is_all_selected());
        let filter = if let Some(value) = selected {
            EntityFilter::equals(value.identifiers())
        } else if let Some(exclude) = row.exclude(self.0).filter(|e| e.is_active()) {
            EntityFilter::not_equals(exclude.identifiers())
        } else {
            EntityFilter::All
        };
        Some(filter)
    }
}

/// The EnvType single select.
#[derive(Debug, Clone, Copy)]
pub struct SingleSelectAdapter;

impl FieldAdapter for SingleSelectAdapter {
    fn field(&self) -> EntityFieldType {
        EnvType
    }

    fn adapt(&self, row: &RowFormState) -> Option<EntityFilter> {
        let filter = match row.field(EnvType) {
            Some(value) if !value.is_all_selected() => EntityFilter::equals(value.identifiers().into_iter().take(1)),
            _ => EntityFilter::All,
        };
        Some(filter)
    }
}

const ACCOUNT_ADAPTERS: &[&dyn FieldAdapter] = &[
    &SingleSelectAdapter,
    &HierarchicalAdapter(Org),
    &HierarchicalAdapter(Proj),
    &FlatAdapter(Service),
    &FlatAdapter(Environment),
];

const ORG_ADAPTERS: &[&dyn FieldAdapter] =
    &[&SingleSelectAdapter, &HierarchicalAdapter(Proj), &FlatAdapter(Service), &FlatAdapter(Environment)];

const PROJECT_ADAPTERS: &[&dyn FieldAdapter] = &[
    &SingleSelectAdapter,
    &HierarchicalAdapter(Service),
    &HierarchicalAdapter(Environment),
    &HierarchicalAdapter(Pipeline),
];

/// Adapters run for `level`, in dispatch order.
#[must_use]
pub fn adapters_for(level: FreezeWindowLevel) -> &'static [&'static dyn FieldAdapter] {
    match level {
        FreezeWindowLevel::Account => ACCOUNT_ADAPTERS,
        FreezeWindowLevel::Org => ORG_ADAPTERS,
        FreezeWindowLevel::Project => PROJECT_ADAPTERS,
    }
}
