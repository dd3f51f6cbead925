// crates/infra/src/form_paths.rs
//! Flat `entity[i].<Key>` path map exchanged with the form-binding layer.
//!
//! Field values keep their form shape: option lists are arrays of
//! `{label, value}`, the EnvType select is a string and exclude checkboxes
//! are booleans.

use std::collections::BTreeMap;

use freeze_scope_domain::{
    EntityFieldType, ExcludeSelection, FieldValue, FormKey, FormState, RowFormState, form::field_path,
};
use freeze_scope_shared_kernel::{InfrastructureError, Result, SelectOption};
use log::debug;
use regex::Regex;
use serde::Deserialize;
use serde_json::{Value, json};

const PATH_PATTERN: &str = r"^entity\[(\d+)\]\.(\w+)$";

/// Row indices at or above this bound are skipped.
pub const MAX_ROWS: usize = 1024;

pub type FormPaths = BTreeMap<String, Value>;

fn option_value(option: &SelectOption) -> Value {
    json!({ "label": option.label, "value": option.value })
}

fn options_value(options: &[SelectOption]) -> Value {
    Value::Array(options.iter().map(option_value).collect())
}

fn field_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Options(options) => options_value(options),
        FieldValue::Scalar(value) => Value::String(value.clone()),
    }
}

/// Flatten `form` into its path map.
#[must_use]
pub fn flatten(form: &FormState) -> FormPaths {
    let mut paths = FormPaths::new();
    for (index, row) in form.iter().enumerate() {
        paths.insert(field_path(index, FormKey::Name), Value::String(row.name.clone()));
        for (&field, value) in &row.fields {
            paths.insert(field_path(index, FormKey::Field(field)), field_value(value));
        }
        for (&field, exclude) in &row.excludes {
            paths.insert(field_path(index, FormKey::ExcludeCheckbox(field)), Value::Bool(exclude.checked));
            paths.insert(field_path(index, FormKey::Exclude(field)), options_value(&exclude.options));
        }
    }
    paths
}

/// Rebuild a form from its path map.
///
/// The highest row index decides the row count; rows without keys stay empty.
/// Unknown keys and indices from [`MAX_ROWS`] up are skipped, and values of
/// the wrong shape are treated as absent.
pub fn unflatten(paths: &FormPaths) -> Result<FormState> {
    let pattern = Regex::new(PATH_PATTERN).map_err(|e| InfrastructureError::SerializationError {
        format: "form path".to_string(),
        details: e.to_string(),
    })?;

    let mut rows: BTreeMap<usize, RowFormState> = BTreeMap::new();
    for (path, value) in paths {
        let Some(caps) = pattern.captures(path) else {
            debug!("skipping form path '{path}'");
            continue;
        };
        let (Ok(index), Some(key)) = (caps[1].parse::<usize>(), FormKey::parse(&caps[2])) else {
            debug!("skipping form path '{path}'");
            continue;
        };
        if index >= MAX_ROWS {
            debug!("skipping form path '{path}': row index is not below {MAX_ROWS}");
            continue;
        }
        apply_value(rows.entry(index).or_default(), key, value, path);
    }

    let len = rows.keys().next_back().map_or(0, |&last| last + 1);
    let form = (0..len).map(|index| rows.remove(&index).unwrap_or_default()).collect();
    Ok(FormState::new(form))
}

fn apply_value(row: &mut RowFormState, key: FormKey, value: &Value, path: &str) {
    match key {
        FormKey::Name => match value {
            Value::String(name) => row.name.clone_from(name),
            _ => debug!("ignoring non-string name at '{path}'"),
        },
        FormKey::Field(field) => match FieldValue::deserialize(value) {
            Ok(parsed) => row.set_field(field, parsed),
            Err(err) => debug!("ignoring malformed value at '{path}': {err}"),
        },
        FormKey::ExcludeCheckbox(field) => match value {
            Value::Bool(checked) => exclude_of(row, field).checked = *checked,
            _ => debug!("ignoring non-boolean checkbox at '{path}'"),
        },
        FormKey::Exclude(field) => match Vec::<SelectOption>::deserialize(value) {
            Ok(options) => exclude_of(row, field).options = options,
            Err(err) => debug!("ignoring malformed exclusion list at '{path}': {err}"),
        },
    }
}

fn exclude_of(row: &mut RowFormState, field: EntityFieldType) -> &mut ExcludeSelection {
    row.excludes.entry(field).or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> FormState {
        FormState::new(vec![
            RowFormState::named("rule")
                .with_field(EntityFieldType::Service, FieldValue::Options(vec![SelectOption::all("All Services")]))
                .with_field(EntityFieldType::EnvType, FieldValue::Scalar("Production".into()))
                .with_exclude(
                    EntityFieldType::Service,
                    ExcludeSelection::new(true, vec![SelectOption::new("Billing", "svc_1")]),
                ),
        ])
    }

    #[test]
    fn flattens_to_indexed_paths() {
        let paths = flatten(&sample_form());

        assert_eq!(paths["entity[0].name"], json!("rule"));
        assert_eq!(paths["entity[0].Service"], json!([{ "label": "All Services", "value": "All" }]));
        assert_eq!(paths["entity[0].EnvType"], json!("Production"));
        assert_eq!(paths["entity[0].ExcludeServiceCheckbox"], json!(true));
        assert_eq!(paths["entity[0].ExcludeService"], json!([{ "label": "Billing", "value": "svc_1" }]));
        assert_eq!(paths.len(), 5);
    }

    #[test]
    fn unflatten_inverts_flatten() {
        let form = sample_form();
        assert_eq!(unflatten(&flatten(&form)).expect("unflattens"), form);
    }

    #[test]
    fn unknown_keys_and_bad_values_are_absent() {
        let mut paths = FormPaths::new();
        paths.insert("entity[1].name".into(), json!("second"));
        paths.insert("entity[1].Service".into(), json!(42));
        paths.insert("entity[1].ExcludeServiceCheckbox".into(), json!("yes"));
        paths.insert("entity[1].Bogus".into(), json!([]));
        paths.insert("freeze.name".into(), json!("window"));

        let form = unflatten(&paths).expect("unflattens");

        assert_eq!(form.len(), 2);
        assert_eq!(form.rows[0], RowFormState::default());
        assert_eq!(form.rows[1], RowFormState::named("second"));
    }

    #[test]
    fn out_of_range_row_indices_are_skipped() {
        let mut paths = FormPaths::new();
        paths.insert("entity[0].name".into(), json!("kept"));
        paths.insert(format!("entity[{}].name", usize::MAX), json!("huge"));
        paths.insert("entity[20000000].name".into(), json!("far"));
        paths.insert(format!("entity[{MAX_ROWS}].name"), json!("edge"));
        paths.insert("entity[99999999999999999999999].name".into(), json!("unparsable"));

        let form = unflatten(&paths).expect("unflattens");

        assert_eq!(form.len(), 1);
        assert_eq!(form.rows[0], RowFormState::named("kept"));
    }

    #[test]
    fn last_allowed_row_index_is_kept() {
        let mut paths = FormPaths::new();
        paths.insert(format!("entity[{}].name", MAX_ROWS - 1), json!("last"));

        let form = unflatten(&paths).expect("unflattens");

        assert_eq!(form.len(), MAX_ROWS);
        assert_eq!(form.rows[MAX_ROWS - 1], RowFormState::named("last"));
    }
}
