use newtype_uuid::{GenericUuid, TypedUuidKind};
use newtype_uuid_macros::impl_typed_uuid_kinds;
use schemars::JsonSchema;

mod basic {
    use pretty_assertions::assert_eq;

    use super::*;

    impl_typed_uuid_kinds! {
        kinds = {
            User = {},
            UserAccount = {},
            HTTPClient = {},
            XMLParser = {},
            IOHandler = {},
        },
    }

    #[test_log::test]
    fn test_default_tags_are_snake_case() {
        assert_eq!(UserKind::tag().as_str(), "user");
        assert_eq!(UserAccountKind::tag().as_str(), "user_account");
        assert_eq!(HTTPClientKind::tag().as_str(), "http_client");
        assert_eq!(XMLParserKind::tag().as_str(), "xml_parser");
        assert_eq!(IOHandlerKind::tag().as_str(), "io_handler");
    }

    #[test_log::test]
    fn test_aliases() {
        assert_eq!(UserKind::alias(), Some("UserUuid"));
        assert_eq!(UserAccountKind::alias(), Some("UserAccountUuid"));
    }

    #[test_log::test]
    fn test_alias_is_a_typed_uuid() {
        let id = UserUuid::new_v4();
        let untyped = id.into_untyped_uuid();
        assert_eq!(UserUuid::from_untyped_uuid(untyped), id);
        assert!(format!("{id:?}").ends_with(" (user)"));
    }
}

mod single {
    use pretty_assertions::assert_eq;

    use super::*;

    impl_typed_uuid_kinds! {
        kinds = { Organization = {} }
    }

    #[test_log::test]
    fn test_single_kind() {
        assert_eq!(OrganizationKind::tag().as_str(), "organization");
        let _: OrganizationUuid = OrganizationUuid::nil();
    }
}

mod empty {
    use super::impl_typed_uuid_kinds;

    impl_typed_uuid_kinds! {
        kinds = {},
    }

    #[test_log::test]
    fn test_empty_kinds_compile() {}
}

mod attrs {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    impl_typed_uuid_kinds! {
        settings = {
            attrs = [#[derive(Hash)], #[derive(PartialOrd, Ord)],],
        },
        kinds = {
            Task = {},
            Note = { attrs = [#[allow(dead_code)], #[derive(Hash)]] },
        },
    }

    #[test_log::test]
    fn test_global_attrs_apply() {
        // `Hash` and `Ord` come from `settings.attrs`.
        let mut set = HashSet::new();
        set.insert(TaskUuid::nil());
        set.insert(TaskUuid::nil());
        assert_eq!(set.len(), 1);

        fn assert_hash_ord<T: std::hash::Hash + Ord>() {}
        assert_hash_ord::<TaskKind>();
    }

    #[test_log::test]
    fn test_kind_attrs_replace_global_attrs() {
        // `NoteKind` has the base derives plus its own `Hash`.
        fn assert_base_hash<T: Clone + Copy + std::fmt::Debug + Eq + std::hash::Hash>() {}
        assert_base_hash::<NoteKind>();
        assert_eq!(NoteKind::tag().as_str(), "note");
    }
}

mod custom_names {
    use pretty_assertions::assert_eq;

    use super::*;

    impl_typed_uuid_kinds! {
        kinds = {
            Project = {
                tag = "proj",
                type_name = MyProjectKind,
                alias = ProjId,
            },
        },
    }

    #[test_log::test]
    fn test_custom_tag_type_name_and_alias() {
        assert_eq!(MyProjectKind::tag().as_str(), "proj");
        assert_eq!(MyProjectKind::alias(), Some("ProjId"));

        let id: ProjId = ProjId::nil();
        assert_eq!(format!("{id:?}"), "00000000-0000-0000-0000-000000000000 (proj)");
    }
}

mod with_schemars {
    use pretty_assertions::assert_eq;

    use super::*;

    impl_typed_uuid_kinds! {
        settings = {
            schemars08 = {
                rust_type = {
                    crate = "my-service",
                    version = "1.0.0",
                    path = "my_service::types",
                },
            },
        },
        kinds = { Account = {} },
    }

    #[test_log::test]
    fn test_schema_name_and_id() {
        assert_eq!(AccountKind::schema_name(), "AccountKind");
        assert_eq!(AccountKind::schema_id(), "my_service::types::AccountKind");
    }

    #[test_log::test]
    fn test_kind_schema_is_never() {
        let schema = schemars::schema_for!(AccountKind);
        let value = serde_json::to_value(&schema).unwrap();

        assert_eq!(value["not"], serde_json::json!(true));
        assert_eq!(
            value["x-rust-type"],
            serde_json::json!({
                "crate": "my-service",
                "version": "1.0.0",
                "path": "my_service::types::AccountKind",
            })
        );
    }

    #[test_log::test]
    fn test_typed_uuid_schema_references_kind() {
        let schema = schemars::schema_for!(AccountUuid);
        let value = serde_json::to_value(&schema).unwrap();

        assert_eq!(value["format"], "uuid");
        assert_eq!(value["x-rust-type"]["crate"], "newtype_uuid");
        assert_eq!(value["x-rust-type"]["path"], "newtype_uuid::TypedUuid");
    }
}

mod schemars_module_path {
    use pretty_assertions::assert_eq;

    use super::*;

    impl_typed_uuid_kinds! {
        settings = { schemars08 = {} },
        kinds = { Widget = {} },
    }

    #[test_log::test]
    fn test_schema_id_uses_module_path() {
        assert_eq!(
            WidgetKind::schema_id(),
            concat!(module_path!(), "::WidgetKind")
        );
    }
}
