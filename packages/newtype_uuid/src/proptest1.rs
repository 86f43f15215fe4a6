//! Property-based testing support via proptest 1.x.

use proptest::{
    arbitrary::{Arbitrary, any},
    strategy::{BoxedStrategy, Strategy as _},
};

use crate::{GenericUuid as _, TypedUuid, TypedUuidKind};

/// Parameters for generating arbitrary [`TypedUuid`] instances.
///
/// There are no options yet. The type exists so options can be added later
/// without changing the `Arbitrary::Parameters` type.
#[derive(Clone, Debug, Default)]
pub struct TypedUuidParams(());

/// Generates random `TypedUuid<T>` instances.
///
/// Generated UUIDs are always version 4 (random), with the RFC 4122 variant.
impl<T> Arbitrary for TypedUuid<T>
where
    T: TypedUuidKind,
{
    type Parameters = TypedUuidParams;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<uuid::Bytes>()
            .prop_map(|bytes| {
                Self::from_untyped_uuid(uuid::Builder::from_random_bytes(bytes).into_uuid())
            })
            .boxed()
    }
}
