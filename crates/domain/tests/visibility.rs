// crates/domain/tests/visibility.rs
use freeze_scope_domain::{
    EntityFieldType::{self, EnvType, Environment, Org, Pipeline, Proj, Service},
    FreezeWindowLevel, empty_entity_config, fields_visibility,
};

fn visible(level: FreezeWindowLevel) -> Vec<EntityFieldType> {
    fields_visibility(level).visible_fields()
}

#[test]
fn pipeline_is_hidden_at_account_level() {
    let visibility = fields_visibility(FreezeWindowLevel::Account);
    assert!(visibility.show_org_field);
    assert!(visibility.show_project_field);
    assert!(!visibility.show_pipeline_field);
}

#[test]
fn pipeline_is_the_only_hierarchy_field_at_project_level() {
    let visibility = fields_visibility(FreezeWindowLevel::Project);
    assert!(visibility.show_pipeline_field);
    assert!(!visibility.show_org_field);
    assert!(!visibility.show_project_field);
}

#[test]
fn documented_field_sets_per_level() {
    assert_eq!(visible(FreezeWindowLevel::Account), vec![Org, Proj, Service, Environment, EnvType]);
    assert_eq!(visible(FreezeWindowLevel::Org), vec![Proj, Service, Environment, EnvType]);
    assert_eq!(visible(FreezeWindowLevel::Project), vec![Pipeline, Service, Environment, EnvType]);
}

#[test]
fn empty_row_lists_hierarchy_first_then_workload_fields() {
    let entries = empty_entity_config(&fields_visibility(FreezeWindowLevel::Account));
    let yaml = serde_yaml::to_string(&entries).expect("serializes");
    assert_eq!(
        yaml,
        "- type: Org\n  filterType: All\n\
         - type: Proj\n  filterType: All\n\
         - type: Service\n  filterType: All\n\
         - type: Environment\n  filterType: All\n\
         - type: EnvType\n  filterType: All\n"
    );
}

#[test]
fn visibility_serializes_like_the_host_record() {
    let json = serde_json::to_value(fields_visibility(FreezeWindowLevel::Org)).expect("serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "freezeWindowLevel": "ORG",
            "showOrgField": false,
            "showProjectField": true,
            "showPipelineField": false
        })
    );
}
