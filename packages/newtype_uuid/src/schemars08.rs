//! JSON schema support via schemars 0.8.

use std::borrow::Cow;

use schemars::{
    JsonSchema,
    r#gen::SchemaGenerator,
    schema::{Schema, SchemaObject},
};
use uuid::Uuid;

use crate::{TypedUuid, TypedUuidKind};

/// Value of the `x-rust-type` extension's `path` field.
const RUST_TYPE_PATH: &str = "newtype_uuid::TypedUuid";

/// Implements `JsonSchema` for `TypedUuid<T>`, if `T` implements `JsonSchema`.
///
/// * `schema_name` is `"TypedUuidFor"` followed by the schema name of `T`.
/// * `schema_id` is `newtype_uuid::TypedUuid<{T::schema_id()}>`.
/// * `json_schema` is the schema for [`Uuid`], with an `x-rust-type`
///   extension naming this crate and carrying `T`'s schema as its only
///   parameter. Code generators such as typify use the extension to map the
///   schema back onto `TypedUuid<T>`.
impl<T> JsonSchema for TypedUuid<T>
where
    T: TypedUuidKind + JsonSchema,
{
    #[inline]
    fn schema_name() -> String {
        format!("TypedUuidFor{}", T::schema_name())
    }

    #[inline]
    fn schema_id() -> Cow<'static, str> {
        Cow::Owned(format!("{RUST_TYPE_PATH}<{}>", T::schema_id()))
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let mut schema: SchemaObject = Uuid::json_schema(generator).into_object();
        let parameter = generator.subschema_for::<T>();

        schema.extensions.insert(
            "x-rust-type".to_string(),
            serde_json::json!({
                "crate": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "path": RUST_TYPE_PATH,
                "parameters": [parameter],
            }),
        );

        Schema::Object(schema)
    }
}
