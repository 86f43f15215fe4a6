//! Conversions shared by typed and untyped UUIDs.

use uuid::Uuid;

/// A trait abstracting over typed and untyped UUIDs.
///
/// This can be used to write code that's generic over
/// [`TypedUuid`](crate::TypedUuid), [`Uuid`], and other types that wrap a
/// [`TypedUuid`](crate::TypedUuid) (due to e.g. orphan rules).
///
/// It plays the role of `From`, but is harder to reach for by accident:
/// conversions between typed and untyped UUIDs should be explicit.
///
/// # Examples
///
/// ```
/// use newtype_uuid::{GenericUuid, TypedUuid, TypedUuidKind, TypedUuidTag, Uuid};
///
/// enum Widget {}
///
/// impl TypedUuidKind for Widget {
///     fn tag() -> TypedUuidTag {
///         const TAG: TypedUuidTag = TypedUuidTag::new("widget");
///         TAG
///     }
/// }
///
/// fn lookup<U: GenericUuid>(id: &U) -> u128 {
///     id.as_untyped_uuid().as_u128()
/// }
///
/// let typed = TypedUuid::<Widget>::from_u128(7);
/// assert_eq!(lookup(&typed), 7);
/// assert_eq!(lookup(&Uuid::from_u128(7)), 7);
/// ```
pub trait GenericUuid {
    /// Creates a new instance of `Self` from an untyped [`Uuid`].
    #[must_use]
    fn from_untyped_uuid(uuid: Uuid) -> Self
    where
        Self: Sized;

    /// Converts `self` into an untyped [`Uuid`].
    #[must_use]
    fn into_untyped_uuid(self) -> Uuid
    where
        Self: Sized;

    /// Returns the inner [`Uuid`].
    ///
    /// Prefer [`into_untyped_uuid`](Self::into_untyped_uuid). This exists for
    /// cases where a reference is needed to satisfy lifetime constraints.
    fn as_untyped_uuid(&self) -> &Uuid;
}

impl GenericUuid for Uuid {
    #[inline]
    fn from_untyped_uuid(uuid: Uuid) -> Self {
        uuid
    }

    #[inline]
    fn into_untyped_uuid(self) -> Uuid {
        self
    }

    #[inline]
    fn as_untyped_uuid(&self) -> &Uuid {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_uuid_identity() {
        let uuid = Uuid::from_u128(0x550e_8400_e29b_41d4_a716_4466_5544_0000);
        assert_eq!(Uuid::from_untyped_uuid(uuid), uuid);
        assert_eq!(uuid.into_untyped_uuid(), uuid);
        assert_eq!(uuid.as_untyped_uuid(), &uuid);
    }

    #[test_log::test]
    fn test_object_safe() {
        let uuid = Uuid::from_u128(42);
        let boxed = Box::new(uuid) as Box<dyn GenericUuid>;
        assert_eq!(boxed.as_untyped_uuid(), &uuid);
    }
}
