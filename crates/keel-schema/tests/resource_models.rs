//! Integration tests mapping complete resource models.
//!
//! The models mirror real SecureTransport resources: an advanced routing
//! application and an MBFT subscription with nested schedules and transfer
//! configurations.

#![allow(dead_code)]

use keel_core::{ListValue, MapValue, Model, ObjectValue};
use keel_schema::{
    AttributeKind, DefaultValue, ErrorKind, ListElement, SchemaError, TypeRegistry, map_model,
    model_to_schema,
};
use pretty_assertions::assert_eq;
use serde_json::json;

keel_core::model! {
    #[derive(Debug, Default)]
    pub struct AdvancedRoutingApplication {
        pub id: String = ",computed,state",
        pub name: String = ",required",
        pub last_updated: String = ",computed,noread,nowrite",
        pub kind: String = "type,default:AdvancedRouting",
        pub notes: String,
        pub business_units: Vec<String> = "businessUnits",
        pub additional_attributes: MapValue = "additionalAttributes,elementtype:string,optional",
    }
}

keel_core::model! {
    #[derive(Debug, Default)]
    pub struct Schedule {
        pub kind: String = "type,required",
        pub execution_times: Vec<String> = "executionTimes",
        pub skip_holidays: bool = "skipHolidays,default:false",
    }
}

keel_core::model! {
    #[derive(Debug, Default)]
    pub struct TransferConfiguration {
        pub tag: String = ",required",
        pub data_transform: bool = "dataTransform,default:",
        pub site: ObjectValue = ",elementtype:site,optional",
    }
}

keel_core::model! {
    #[derive(Debug, Default)]
    pub struct Site {
        pub name: String = ",required",
        pub port: i64 = ",default:22",
        pub password: String = ",sensitive,optional",
    }
}

keel_core::model! {
    #[derive(Debug, Default)]
    pub struct MbftSubscription {
        pub id: String = ",computed,state",
        pub last_updated: String = ",computed,noread,nowrite",
        pub kind: String = "type,default:MBFT",
        pub folder: String = ",required",
        pub account: String = ",required",
        pub application: String = ",required",
        pub max_parallel_sit_pulls: i64 = "maxParallelSitPulls,default:0",
        pub flow_attrs_merge_mode: String =
            "flowAttrsMergeMode,enum:/preserve/overwrite/append,default:preserve",
        pub folder_monitor_schedule_check: String =
            "folderMonitorScheduleCheck,emptyIsNull,default:",
        pub flow_name: String = "flowName,emptyIsNull,default:",
        pub scheduled_folder_monitor: String = "scheduledFolderMonitor,emptyIsNull,default:",
        pub subscription_encrypt_mode: String =
            "subscriptionEncryptMode,enum:/default/enabled/disabled,default:default",
        pub file_retention_period: i64 = "fileRetentionPeriod,default:0",
        pub flow_attributes: MapValue = "flowAttributes,elementtype:string,default:",
        pub schedules: Vec<Schedule> = "schedules,fold:type,optional",
        pub transfer_configurations: Vec<TransferConfiguration> = "transferConfigurations",
        pub post_transmission_actions: ListValue =
            "postTransmissionActions,elementtype:string,optional",
    }
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register_model::<Site>("site").expect("registers site");
    registry.seal();
    registry
}

// ---------------------------------------------------------------------------
// Advanced routing application
// ---------------------------------------------------------------------------

#[test]
fn advanced_routing_application_schema() {
    let schema = model_to_schema::<AdvancedRoutingApplication>(&registry()).expect("maps");
    let value = serde_json::to_value(&schema).expect("serializes");

    assert_eq!(
        value,
        json!({
            "model": "AdvancedRoutingApplication",
            "attributes": {
                "additionalAttributes": {
                    "kind": "map", "element": "string",
                    "required": false, "optional": true, "computed": false, "sensitive": false
                },
                "businessUnits": {
                    "kind": "list", "element": { "primitive": "string" },
                    "required": false, "optional": true, "computed": false, "sensitive": false
                },
                "id": {
                    "kind": "string",
                    "required": false, "optional": false, "computed": true, "sensitive": false,
                    "use_state_for_unknown": true
                },
                "last_updated": {
                    "kind": "string",
                    "required": false, "optional": false, "computed": true, "sensitive": false
                },
                "name": {
                    "kind": "string",
                    "required": true, "optional": false, "computed": false, "sensitive": false
                },
                "notes": {
                    "kind": "string",
                    "required": false, "optional": true, "computed": false, "sensitive": false
                },
                "type": {
                    "kind": "string",
                    "required": false, "optional": true, "computed": true, "sensitive": false,
                    "default": "AdvancedRouting"
                }
            }
        })
    );
}

// ---------------------------------------------------------------------------
// MBFT subscription
// ---------------------------------------------------------------------------

#[test]
fn mbft_subscription_scalars() {
    let schema = model_to_schema::<MbftSubscription>(&registry()).expect("maps");

    let merge = schema.get("flowAttrsMergeMode").expect("merge mode");
    assert_eq!(merge.default, Some(DefaultValue::String("preserve".into())));
    assert_eq!(
        merge.allowed_values.as_deref(),
        Some(&["preserve".to_string(), "overwrite".into(), "append".into()][..])
    );

    let flow_name = schema.get("flowName").expect("flow name");
    assert_eq!(flow_name.default, Some(DefaultValue::Null));
    assert!(flow_name.optional && flow_name.computed);

    let pulls = schema.get("maxParallelSitPulls").expect("pulls");
    assert_eq!(pulls.kind, AttributeKind::Int64);
    assert_eq!(pulls.default, Some(DefaultValue::Int64(0)));

    let flow_attributes = schema.get("flowAttributes").expect("flow attributes");
    assert_eq!(flow_attributes.default, Some(DefaultValue::Null));
    assert_eq!(flow_attributes.element_primitive(), Some(keel_core::Primitive::String));

    let actions = schema.get("postTransmissionActions").expect("actions");
    assert_eq!(
        actions.kind,
        AttributeKind::List {
            element: ListElement::Primitive(keel_core::Primitive::String)
        }
    );
}

#[test]
fn mbft_subscription_nested_lists() {
    let schema = model_to_schema::<MbftSubscription>(&registry()).expect("maps");

    let schedules = schema.get("schedules").expect("schedules");
    assert!(schedules.optional);
    let schedule = schedules.children().expect("object list");
    let keys: Vec<&str> = schedule.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["executionTimes", "skipHolidays", "type"]);
    assert_eq!(
        schedule.get("skipHolidays").and_then(|a| a.default.clone()),
        Some(DefaultValue::Bool(false))
    );

    let transfers = schema.get("transferConfigurations").expect("transfers");
    let transfer = transfers.children().expect("object list");
    assert_eq!(
        transfer.get("dataTransform").and_then(|a| a.default.clone()),
        Some(DefaultValue::Bool(false))
    );

    let site = transfer.get("site").and_then(|a| a.children()).expect("site object");
    assert_eq!(site.get("port").and_then(|a| a.default.clone()), Some(DefaultValue::Int64(22)));
    assert!(site.get("password").is_some_and(|a| a.sensitive));
}

#[test]
fn mapping_is_idempotent() {
    let registry = registry();
    let first = model_to_schema::<MbftSubscription>(&registry).expect("maps");
    let second = model_to_schema::<MbftSubscription>(&registry).expect("maps");
    assert_eq!(first, second);
    assert_eq!(
        first.to_json().expect("json"),
        second.to_json().expect("json")
    );
}

#[test]
fn deep_unregistered_reference_fails() {
    let mut open = TypeRegistry::new();
    open.seal();

    let err = model_to_schema::<MbftSubscription>(&open).expect_err("site not registered");
    assert_eq!(err.kind(), ErrorKind::Shape);
    assert_eq!(
        err,
        SchemaError::UnknownElementType {
            model: "MbftSubscription.transfer_configurations".into(),
            field: "site".into(),
            element_type: "site".into(),
        }
    );
    assert_eq!(
        err.to_string(),
        "MbftSubscription.transfer_configurations.site: element type 'site' is not registered"
    );
}

#[test]
fn nested_descriptor_errors_abort_whole_model() {
    let mut model = MbftSubscription::model_type();
    let bad = keel_core::ModelType::new("Broken", Vec::new()).with_field(
        "ratio",
        keel_core::FieldKind::Primitive(keel_core::Primitive::Float64),
        "",
    );
    model = model.with_field("broken", keel_core::FieldKind::Nested(bad), ",optional");

    let err = map_model(&model, &registry()).expect_err("float field");
    assert!(matches!(
        err,
        SchemaError::UnsupportedShape { ref model, ref field, .. }
            if model == "MbftSubscription.broken" && field == "ratio"
    ));
}
