// crates/domain/tests/validation.rs
use freeze_scope_domain::{
    EntityFieldType::{Environment, Pipeline, Service},
    FieldErrorKind, FieldValue, FreezeWindowLevel, RowFormState, validation_schema,
};
use freeze_scope_shared_kernel::SelectOption;

#[test]
fn empty_project_row_yields_three_required_errors() {
    let errors = validation_schema(FreezeWindowLevel::Project).validate(0, &RowFormState::named("rule"));

    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.kind == FieldErrorKind::Required));
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Service, Environment, Pipeline]);
}

#[test]
fn any_single_project_leaf_clears_every_error() {
    let schema = validation_schema(FreezeWindowLevel::Project);
    for field in [Service, Environment, Pipeline] {
        let row = RowFormState::named("rule").with_field(field, FieldValue::Options(vec![SelectOption::bare("x")]));
        assert!(schema.validate(0, &row).is_empty(), "{field} alone should satisfy the schema");
    }
}

#[test]
fn all_option_counts_as_a_selection() {
    let row = RowFormState::named("rule")
        .with_field(Service, FieldValue::Options(vec![SelectOption::all("All Services")]));
    assert!(validation_schema(FreezeWindowLevel::Project).validate(0, &row).is_empty());
}

#[test]
fn empty_option_list_is_no_selection() {
    let row = RowFormState::named("rule").with_field(Service, FieldValue::Options(Vec::new()));
    assert_eq!(validation_schema(FreezeWindowLevel::Project).validate(0, &row).len(), 3);
}
