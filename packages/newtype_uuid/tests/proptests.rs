use newtype_uuid::{GenericUuid as _, TypedUuid, TypedUuidKind, TypedUuidTag, Uuid, Version};
use proptest::prelude::*;

enum SessionKind {}

impl TypedUuidKind for SessionKind {
    fn tag() -> TypedUuidTag {
        const TAG: TypedUuidTag = TypedUuidTag::new("session");
        TAG
    }
}

type SessionUuid = TypedUuid<SessionKind>;

proptest! {
    #[test]
    fn generated_uuids_are_v4(id in any::<SessionUuid>()) {
        prop_assert_eq!(id.get_version_num(), 4);
        prop_assert_eq!(id.get_version(), Some(Version::Random));
        prop_assert_eq!(id.into_untyped_uuid().get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn byte_views_match_untyped(id in any::<SessionUuid>()) {
        let untyped: Uuid = id.into();

        let bytes: &[u8] = id.as_ref();
        prop_assert_eq!(bytes, untyped.as_bytes().as_slice());

        let vec: Vec<u8> = id.into();
        prop_assert_eq!(vec, untyped.as_bytes().to_vec());

        prop_assert_eq!(id.as_u128(), untyped.as_u128());
    }

    #[test]
    fn display_parses_back(id in any::<SessionUuid>()) {
        let parsed: SessionUuid = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
    }
}
