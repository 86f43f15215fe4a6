//! Code generation for `impl_typed_uuid_kinds!`.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::input::{self, GlobalSettings, KindConfig, SchemarsSettings};

/// Generated items plus every error found along the way.
///
/// Valid kinds are emitted even when other kinds are invalid, so a typo in one
/// kind doesn't cascade into "type not found" errors everywhere else.
pub(crate) struct ImplKindsOutput {
    pub(crate) out: TokenStream,
    pub(crate) errors: Vec<syn::Error>,
}

impl ToTokens for ImplKindsOutput {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.out.to_tokens(tokens);
        for error in &self.errors {
            error.to_compile_error().to_tokens(tokens);
        }
    }
}

pub(crate) fn impl_typed_uuid_kinds(input: TokenStream) -> ImplKindsOutput {
    let mut errors = Vec::new();

    let Some(input) = input::parse_input(input, &mut errors) else {
        return ImplKindsOutput {
            out: TokenStream::new(),
            errors,
        };
    };

    let mut out = TokenStream::new();
    for entry in &input.kinds {
        if let Some(kind) = input::parse_kind(entry, &mut errors) {
            out.extend(generate_kind(&input.settings, &kind));
        }
    }

    ImplKindsOutput { out, errors }
}

fn generate_kind(settings: &GlobalSettings, kind: &KindConfig) -> TokenStream {
    let krate = &settings.newtype_uuid_crate;
    let KindConfig {
        tag,
        type_name,
        alias,
        attrs,
    } = kind;
    let attrs = attrs.as_ref().unwrap_or(&settings.attrs);

    let schemars_impl = settings
        .schemars08
        .as_ref()
        .map(|schemars| generate_schemars_impl(settings, schemars, kind));

    quote! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #(#attrs)*
        pub enum #type_name {}

        impl ::#krate::TypedUuidKind for #type_name {
            #[inline]
            fn tag() -> ::#krate::TypedUuidTag {
                const TAG: ::#krate::TypedUuidTag = ::#krate::TypedUuidTag::new(#tag);
                TAG
            }

            #[inline]
            fn alias() -> ::core::option::Option<&'static str> {
                ::core::option::Option::Some(stringify!(#alias))
            }
        }

        #schemars_impl

        #[allow(unused)]
        pub type #alias = ::#krate::TypedUuid<#type_name>;
    }
}

fn generate_schemars_impl(
    settings: &GlobalSettings,
    schemars: &SchemarsSettings,
    kind: &KindConfig,
) -> TokenStream {
    let krate = &settings.newtype_uuid_crate;
    let attrs = &schemars.attrs;
    let type_name = &kind.type_name;
    let type_name_str = type_name.to_string();
    let schemars08 = quote! { ::#krate::macro_support::schemars08 };

    let (schema_id, schema_object) = if let Some(rust_type) = &schemars.rust_type {
        let crate_name = &rust_type.crate_name;
        let version = &rust_type.version;
        let full_path = format!("{}::{type_name_str}", rust_type.path.value());

        let schema_object = quote! {
            let mut schema = SchemaObject {
                subschemas: ::std::option::Option::Some(::std::boxed::Box::new(SubschemaValidation {
                    not: ::std::option::Option::Some(::std::boxed::Box::new(Schema::Bool(true))),
                    ..::std::default::Default::default()
                })),
                ..::std::default::Default::default()
            };
            schema.extensions.insert(
                "x-rust-type".to_string(),
                ::#krate::macro_support::serde_json::json!({
                    "crate": #crate_name,
                    "version": #version,
                    "path": #full_path,
                }),
            );
        };

        (quote! { #full_path }, schema_object)
    } else {
        let schema_object = quote! {
            let schema = SchemaObject {
                subschemas: ::std::option::Option::Some(::std::boxed::Box::new(SubschemaValidation {
                    not: ::std::option::Option::Some(::std::boxed::Box::new(Schema::Bool(true))),
                    ..::std::default::Default::default()
                })),
                ..::std::default::Default::default()
            };
        };

        (
            quote! { ::core::concat!(::core::module_path!(), "::", #type_name_str) },
            schema_object,
        )
    };

    quote! {
        #(#attrs)*
        impl #schemars08::JsonSchema for #type_name {
            fn schema_name() -> ::std::string::String {
                #type_name_str.to_string()
            }

            fn schema_id() -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(#schema_id)
            }

            fn json_schema(
                _: &mut #schemars08::r#gen::SchemaGenerator,
            ) -> #schemars08::schema::Schema {
                use #schemars08::schema::{Schema, SchemaObject, SubschemaValidation};

                #schema_object
                Schema::Object(schema)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote::quote;
    use syn::Item;

    use super::*;

    fn generate(input: TokenStream) -> (syn::File, Vec<String>) {
        let output = impl_typed_uuid_kinds(input);
        let file = syn::parse2(output.out).unwrap();
        let errors = output.errors.iter().map(ToString::to_string).collect();
        (file, errors)
    }

    fn item_names(file: &syn::File) -> Vec<String> {
        file.items
            .iter()
            .filter_map(|item| match item {
                Item::Enum(item) => Some(format!("enum {}", item.ident)),
                Item::Type(item) => Some(format!("type {}", item.ident)),
                Item::Impl(item) => {
                    let trait_ = item.trait_.as_ref()?.1.segments.last()?.ident.to_string();
                    let self_ty = item.self_ty.to_token_stream().to_string();
                    Some(format!("impl {trait_} for {self_ty}"))
                }
                _ => None,
            })
            .collect()
    }

    #[test_log::test]
    fn test_basic_kinds() {
        let (file, errors) = generate(quote! {
            kinds = {
                User = {},
                Organization = {},
            }
        });

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            item_names(&file),
            vec![
                "enum UserKind",
                "impl TypedUuidKind for UserKind",
                "type UserUuid",
                "enum OrganizationKind",
                "impl TypedUuidKind for OrganizationKind",
                "type OrganizationUuid",
            ]
        );
    }

    #[test_log::test]
    fn test_empty_kinds() {
        let (file, errors) = generate(quote! { kinds = {} });
        assert!(errors.is_empty());
        assert!(file.items.is_empty());
    }

    #[test_log::test]
    fn test_custom_crate_path() {
        let output = impl_typed_uuid_kinds(quote! {
            settings = { newtype_uuid_crate = my_uuid },
            kinds = { User = {} },
        });
        let out = output.out.to_string();
        assert!(out.contains(":: my_uuid :: TypedUuidKind"), "{out}");
        assert!(out.contains(":: my_uuid :: TypedUuid < UserKind >"), "{out}");
        assert!(!out.contains("newtype_uuid"), "{out}");
    }

    #[test_log::test]
    fn test_kind_attrs_replace_global_attrs() {
        let (file, errors) = generate(quote! {
            settings = { attrs = [#[derive(Hash)]] },
            kinds = {
                User = {},
                Project = { attrs = [#[derive(PartialOrd, Ord)]] },
            },
        });
        assert!(errors.is_empty(), "{errors:?}");

        let attrs: Vec<_> = file
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Enum(item) => Some(
                    item.attrs
                        .iter()
                        .map(|attr| attr.to_token_stream().to_string())
                        .collect::<Vec<_>>(),
                ),
                _ => None,
            })
            .collect();

        assert_eq!(
            attrs,
            vec![
                vec![
                    "# [derive (Clone , Copy , Debug , PartialEq , Eq)]".to_string(),
                    "# [derive (Hash)]".to_string(),
                ],
                vec![
                    "# [derive (Clone , Copy , Debug , PartialEq , Eq)]".to_string(),
                    "# [derive (PartialOrd , Ord)]".to_string(),
                ],
            ]
        );
    }

    #[test_log::test]
    fn test_schemars_impl() {
        let (file, errors) = generate(quote! {
            settings = {
                schemars08 = {
                    attrs = [#[cfg(feature = "schemars")]],
                    rust_type = {
                        crate = "my-service",
                        version = "1.0.0",
                        path = "my_service::types",
                    },
                },
            },
            kinds = { User = {} },
        });
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            item_names(&file),
            vec![
                "enum UserKind",
                "impl TypedUuidKind for UserKind",
                "impl JsonSchema for UserKind",
                "type UserUuid",
            ]
        );

        let out = file.to_token_stream().to_string();
        assert!(out.contains("\"my_service::types::UserKind\""), "{out}");
        assert!(out.contains("\"x-rust-type\""), "{out}");
        assert!(out.contains("# [cfg (feature = \"schemars\")] impl"), "{out}");
    }

    #[test_log::test]
    fn test_schemars_without_rust_type_uses_module_path() {
        let output = impl_typed_uuid_kinds(quote! {
            settings = { schemars08 = {} },
            kinds = { User = {} },
        });
        let out = output.out.to_string();
        assert!(out.contains("module_path !"), "{out}");
        assert!(!out.contains("x-rust-type"), "{out}");
    }

    #[test_log::test]
    fn test_invalid_kinds_still_emit_valid_ones() {
        let (file, errors) = generate(quote! {
            kinds = {
                User = {},
                Tag = "hi",
                Custom = { tag = "custom" },
            }
        });

        assert_eq!(errors, vec!["expected a map `{ ... }` for kind `Tag`"]);
        assert_eq!(
            item_names(&file),
            vec![
                "enum UserKind",
                "impl TypedUuidKind for UserKind",
                "type UserUuid",
                "enum CustomKind",
                "impl TypedUuidKind for CustomKind",
                "type CustomUuid",
            ]
        );
    }

    #[test_log::test]
    fn test_invalid_settings_emit_nothing() {
        let output = impl_typed_uuid_kinds(quote! {
            settings = { newtype_uuid_crate = "quoted" },
            kinds = { User = {} },
        });
        assert!(output.out.is_empty());
        assert_eq!(output.errors.len(), 1);

        let all = output.to_token_stream().to_string();
        assert!(all.contains("compile_error"), "{all}");
    }
}
