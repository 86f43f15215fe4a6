use std::borrow::Cow;

use newtype_uuid::{TypedUuid, TypedUuidKind, TypedUuidTag};
use pretty_assertions::assert_eq;
use schemars::{
    JsonSchema,
    r#gen::SchemaGenerator,
    schema::{Schema, SchemaObject},
};
use serde::Serialize;

enum DeviceKind {}

impl TypedUuidKind for DeviceKind {
    fn tag() -> TypedUuidTag {
        const TAG: TypedUuidTag = TypedUuidTag::new("device");
        TAG
    }
}

impl JsonSchema for DeviceKind {
    fn schema_name() -> String {
        "DeviceKind".to_string()
    }

    fn schema_id() -> Cow<'static, str> {
        Cow::Borrowed("inventory::DeviceKind")
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        Schema::Object(SchemaObject::default())
    }
}

type DeviceUuid = TypedUuid<DeviceKind>;

#[derive(Serialize, JsonSchema)]
struct Device {
    id: DeviceUuid,
}

#[test_log::test]
fn test_schema_name_and_id() {
    assert_eq!(DeviceUuid::schema_name(), "TypedUuidForDeviceKind");
    assert_eq!(
        DeviceUuid::schema_id(),
        "newtype_uuid::TypedUuid<inventory::DeviceKind>"
    );
}

#[test_log::test]
fn test_schema_is_uuid_with_rust_type_extension() {
    let schema = schemars::schema_for!(DeviceUuid);
    let value = serde_json::to_value(&schema).unwrap();

    assert_eq!(value["type"], "string");
    assert_eq!(value["format"], "uuid");
    assert_eq!(
        value["x-rust-type"],
        serde_json::json!({
            "crate": "newtype_uuid",
            "version": env!("CARGO_PKG_VERSION"),
            "path": "newtype_uuid::TypedUuid",
            "parameters": [{ "$ref": "#/definitions/DeviceKind" }],
        })
    );
    assert!(value["definitions"]["DeviceKind"].is_object());
}

#[test_log::test]
fn test_schema_as_field() {
    let schema = schemars::schema_for!(Device);
    let value = serde_json::to_value(&schema).unwrap();

    assert_eq!(
        value["properties"]["id"]["$ref"],
        "#/definitions/TypedUuidForDeviceKind"
    );
    assert_eq!(
        value["definitions"]["TypedUuidForDeviceKind"]["format"],
        "uuid"
    );
}
