//! The [`TypedUuidKind`] marker trait.

use crate::TypedUuidTag;

/// Represents marker types that can be used as a type parameter for
/// [`TypedUuid`](crate::TypedUuid).
///
/// An implementation is usually a zero-sized type that can never be
/// constructed, such as an empty enum.
///
/// # Implementations
///
/// With the `schemars08` feature, [`TypedUuid`](crate::TypedUuid)`<T>`
/// implements `JsonSchema` whenever `T` does.
///
/// # Declaring many kinds
///
/// Writing this impl by hand for every kind gets repetitive. The `derive`
/// feature provides `#[derive(TypedUuidKind)]`, and the `macros` feature
/// provides `impl_typed_uuid_kinds!`, which also generates a type alias per
/// kind. A plain `macro_rules!` also works:
///
/// ```
/// use newtype_uuid::{TypedUuidKind, TypedUuidTag};
///
/// macro_rules! impl_typed_uuid_kind {
///     ($($kind:ident => $tag:literal),* $(,)?) => {
///         $(
///             pub enum $kind {}
///
///             impl TypedUuidKind for $kind {
///                 #[inline]
///                 fn tag() -> TypedUuidTag {
///                     const TAG: TypedUuidTag = TypedUuidTag::new($tag);
///                     TAG
///                 }
///             }
///         )*
///     };
/// }
///
/// impl_typed_uuid_kind! {
///     Kind1 => "kind1",
///     Kind2 => "kind2",
/// }
///
/// assert_eq!(Kind1::tag(), "kind1");
/// assert_eq!(Kind2::alias(), None);
/// ```
pub trait TypedUuidKind: Send + Sync + 'static {
    /// Returns the tag for this kind, the runtime representation of the type.
    fn tag() -> TypedUuidTag;

    /// Returns the name of the type alias generated for
    /// `TypedUuid<Self>`, if there is one.
    ///
    /// Code generators such as `impl_typed_uuid_kinds!` set this so tools can
    /// refer to the alias by name. Hand-written kinds return `None`.
    #[inline]
    #[must_use]
    fn alias() -> Option<&'static str> {
        None
    }
}
