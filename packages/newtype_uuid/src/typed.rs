//! The [`TypedUuid`] wrapper type.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use uuid::{Uuid, Version};

use crate::{GenericUuid, ParseError, TypedUuidKind};

/// A UUID with type-level information about what it's used for.
///
/// For more, see [the library documentation](crate).
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent, bound = ""))]
pub struct TypedUuid<T: TypedUuidKind> {
    uuid: Uuid,
    _phantom: PhantomData<T>,
}

impl<T: TypedUuidKind> TypedUuid<T> {
    /// The 'nil UUID' (all zeros).
    ///
    /// # References
    ///
    /// * [Nil UUID in RFC 9562](https://www.ietf.org/rfc/rfc9562.html#section-5.9)
    #[inline]
    #[must_use]
    pub const fn nil() -> Self {
        Self::from_untyped(Uuid::nil())
    }

    /// The 'max UUID' (all ones).
    ///
    /// # References
    ///
    /// * [Max UUID in RFC 9562](https://www.ietf.org/rfc/rfc9562.html#section-5.10)
    #[inline]
    #[must_use]
    pub const fn max() -> Self {
        Self::from_untyped(Uuid::max())
    }

    /// Creates a UUID from four field values.
    #[inline]
    #[must_use]
    pub const fn from_fields(d1: u32, d2: u16, d3: u16, d4: [u8; 8]) -> Self {
        Self::from_untyped(Uuid::from_fields(d1, d2, d3, &d4))
    }

    /// Creates a UUID from four field values in little-endian order.
    ///
    /// The bytes in the `d1`, `d2` and `d3` fields are flipped to convert into
    /// big-endian order. This depends on the endianness of the UUID, not of the
    /// target, so bytes are flipped on both big and little endian machines.
    #[inline]
    #[must_use]
    pub const fn from_fields_le(d1: u32, d2: u16, d3: u16, d4: [u8; 8]) -> Self {
        Self::from_untyped(Uuid::from_fields_le(d1, d2, d3, &d4))
    }

    /// Creates a UUID from a 128-bit value.
    ///
    /// # Examples
    ///
    /// ```
    /// use newtype_uuid::{TypedUuid, TypedUuidKind, TypedUuidTag};
    ///
    /// enum Order {}
    /// impl TypedUuidKind for Order {
    ///     fn tag() -> TypedUuidTag {
    ///         const TAG: TypedUuidTag = TypedUuidTag::new("order");
    ///         TAG
    ///     }
    /// }
    ///
    /// let id = TypedUuid::<Order>::from_u128(0x550e8400_e29b_41d4_a716_446655440000);
    /// assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self::from_untyped(Uuid::from_u128(value))
    }

    /// Creates a UUID from a 128-bit value in little-endian order.
    #[inline]
    #[must_use]
    pub const fn from_u128_le(value: u128) -> Self {
        Self::from_untyped(Uuid::from_u128_le(value))
    }

    /// Creates a UUID from two 64-bit values.
    #[inline]
    #[must_use]
    pub const fn from_u64_pair(high_bits: u64, low_bits: u64) -> Self {
        Self::from_untyped(Uuid::from_u64_pair(high_bits, low_bits))
    }

    /// Creates a UUID using the supplied bytes.
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: uuid::Bytes) -> Self {
        Self::from_untyped(Uuid::from_bytes(bytes))
    }

    /// Creates a UUID using the supplied bytes in little-endian order.
    ///
    /// The individual fields encoded in the buffer are flipped.
    #[inline]
    #[must_use]
    pub const fn from_bytes_le(bytes: uuid::Bytes) -> Self {
        Self::from_untyped(Uuid::from_bytes_le(bytes))
    }

    /// Creates a UUID from a byte slice.
    ///
    /// # Errors
    ///
    /// * If the slice is not exactly 16 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ParseError> {
        Uuid::from_slice(bytes)
            .map(Self::from_untyped)
            .map_err(|error| ParseError::new(error, T::tag()))
    }

    /// Creates a new, random version 4 UUID of this kind.
    ///
    /// With the `simulator` feature the bytes come from a seeded generator, see
    /// [`crate::simulator`].
    #[cfg(feature = "v4")]
    #[inline]
    #[must_use]
    pub fn new_v4() -> Self {
        #[cfg(feature = "simulator")]
        let uuid = crate::simulator::new_v4();
        #[cfg(not(feature = "simulator"))]
        let uuid = Uuid::new_v4();

        Self::from_untyped(uuid)
    }

    /// Creates a new version 7 UUID of this kind, using the current time.
    ///
    /// Version 7 UUIDs sort by creation time.
    #[cfg(feature = "v7")]
    #[inline]
    #[must_use]
    pub fn new_v7() -> Self {
        Self::from_untyped(Uuid::now_v7())
    }

    /// Returns the version number of the UUID.
    ///
    /// This is the future-proof alternative to [`Self::get_version`].
    ///
    /// # References
    ///
    /// * [Version Field in RFC 9562](https://www.ietf.org/rfc/rfc9562.html#section-4.2)
    #[inline]
    #[must_use]
    pub const fn get_version_num(&self) -> usize {
        self.uuid.get_version_num()
    }

    /// Returns the version of the UUID, or `None` if the version field holds
    /// a value the `uuid` crate doesn't recognize.
    ///
    /// # References
    ///
    /// * [Version Field in RFC 9562](https://www.ietf.org/rfc/rfc9562.html#section-4.2)
    #[inline]
    #[must_use]
    pub fn get_version(&self) -> Option<Version> {
        self.uuid.get_version()
    }

    /// Returns `true` if this is the nil UUID.
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.uuid.is_nil()
    }

    /// Returns `true` if this is the max UUID.
    #[inline]
    #[must_use]
    pub const fn is_max(&self) -> bool {
        self.uuid.is_max()
    }

    /// Returns the bytes of the UUID.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &uuid::Bytes {
        self.uuid.as_bytes()
    }

    /// Returns the UUID as a 128-bit value.
    #[inline]
    #[must_use]
    pub const fn as_u128(&self) -> u128 {
        self.uuid.as_u128()
    }

    /// Returns the UUID as a 128-bit value in little-endian order.
    #[inline]
    #[must_use]
    pub const fn to_u128_le(&self) -> u128 {
        self.uuid.to_u128_le()
    }

    /// Returns the UUID as two 64-bit values.
    #[inline]
    #[must_use]
    pub const fn as_u64_pair(&self) -> (u64, u64) {
        self.uuid.as_u64_pair()
    }

    #[inline]
    const fn from_untyped(uuid: Uuid) -> Self {
        Self {
            uuid,
            _phantom: PhantomData,
        }
    }
}

// The impls below are written out by hand: derives would add a `T: Trait`
// bound, and kinds are usually uninhabited enums that implement nothing.

impl<T: TypedUuidKind> PartialEq for TypedUuid<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.uuid.eq(&other.uuid)
    }
}

impl<T: TypedUuidKind> Eq for TypedUuid<T> {}

impl<T: TypedUuidKind> PartialOrd for TypedUuid<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: TypedUuidKind> Ord for TypedUuid<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.uuid.cmp(&other.uuid)
    }
}

impl<T: TypedUuidKind> Hash for TypedUuid<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl<T: TypedUuidKind> fmt::Debug for TypedUuid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.uuid, T::tag())
    }
}

impl<T: TypedUuidKind> fmt::Display for TypedUuid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.uuid, f)
    }
}

impl<T: TypedUuidKind> Clone for TypedUuid<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TypedUuidKind> Copy for TypedUuid<T> {}

impl<T: TypedUuidKind> FromStr for TypedUuid<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s).map_err(|error| ParseError::new(error, T::tag()))?;
        Ok(Self::from_untyped(uuid))
    }
}

impl<T: TypedUuidKind> Default for TypedUuid<T> {
    #[inline]
    fn default() -> Self {
        Self::nil()
    }
}

impl<T: TypedUuidKind> AsRef<[u8]> for TypedUuid<T> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.uuid.as_ref()
    }
}

impl<T: TypedUuidKind> AsRef<Uuid> for TypedUuid<T> {
    #[inline]
    fn as_ref(&self) -> &Uuid {
        &self.uuid
    }
}

impl<T: TypedUuidKind> From<TypedUuid<T>> for Uuid {
    #[inline]
    fn from(value: TypedUuid<T>) -> Self {
        value.uuid
    }
}

impl<T: TypedUuidKind> From<TypedUuid<T>> for Vec<u8> {
    #[inline]
    fn from(value: TypedUuid<T>) -> Self {
        value.uuid.as_bytes().to_vec()
    }
}

impl<T: TypedUuidKind> From<TypedUuid<T>> for uuid::Bytes {
    #[inline]
    fn from(value: TypedUuid<T>) -> Self {
        value.uuid.into_bytes()
    }
}

impl<T: TypedUuidKind> GenericUuid for TypedUuid<T> {
    #[inline]
    fn from_untyped_uuid(uuid: Uuid) -> Self {
        Self::from_untyped(uuid)
    }

    #[inline]
    fn into_untyped_uuid(self) -> Uuid {
        self.uuid
    }

    #[inline]
    fn as_untyped_uuid(&self) -> &Uuid {
        &self.uuid
    }
}
