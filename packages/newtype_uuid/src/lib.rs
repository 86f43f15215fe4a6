#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! A newtype wrapper around [`Uuid`] that carries the kind of entity it
//! identifies in its type.
//!
//! Large systems tend to use UUIDs for many unrelated entities. A bare
//! [`Uuid`] says nothing about what it identifies, so a user ID can be passed
//! where an organization ID was expected and nothing catches it.
//! [`TypedUuid<T>`] fixes that by tagging the UUID with a marker type `T`.
//!
//! # Example
//!
//! ```
//! use newtype_uuid::{GenericUuid, TypedUuid, TypedUuidKind, TypedUuidTag};
//!
//! // A marker type for the kind of entity the UUID identifies.
//! enum MyKind {}
//!
//! impl TypedUuidKind for MyKind {
//!     fn tag() -> TypedUuidTag {
//!         // Assigning to a const validates the tag at compile time.
//!         const TAG: TypedUuidTag = TypedUuidTag::new("my_kind");
//!         TAG
//!     }
//! }
//!
//! let uuid: TypedUuid<MyKind> = "dffc3068-1cd6-47d5-b2f3-636b41b07084".parse().unwrap();
//!
//! // Display is the same as for a plain UUID.
//! assert_eq!(uuid.to_string(), "dffc3068-1cd6-47d5-b2f3-636b41b07084");
//!
//! // Debug also shows the tag.
//! assert_eq!(format!("{uuid:?}"), "dffc3068-1cd6-47d5-b2f3-636b41b07084 (my_kind)");
//!
//! // Going back to an untyped UUID is explicit.
//! let untyped = uuid.into_untyped_uuid();
//! assert_eq!(untyped.to_string(), "dffc3068-1cd6-47d5-b2f3-636b41b07084");
//! ```
//!
//! Kinds can also be declared with `#[derive(TypedUuidKind)]` (feature
//! `derive`) or in bulk with `impl_typed_uuid_kinds!` (feature `macros`).
//!
//! # Wire formats
//!
//! [`TypedUuid`] uses the same wire and serialization formats as [`Uuid`]. The
//! kind only exists inside Rust code.
//!
//! * `Display` and `FromStr` forward to [`Uuid`].
//! * `serde`: serializes and deserializes exactly like [`Uuid`].
//! * `schemars08`: implements `JsonSchema` when the kind does.
//! * `proptest1`: implements `Arbitrary`, generating version 4 UUIDs.
//!
//! # Features
//!
//! * `v4` - `TypedUuid::new_v4`. *Enabled by default.*
//! * `v7` - `TypedUuid::new_v7`.
//! * `serde` - serde support.
//! * `schemars08` - JSON schema support via schemars 0.8.
//! * `proptest1` - `proptest::arbitrary::Arbitrary` support.
//! * `derive` - re-exports `#[derive(TypedUuidKind)]`.
//! * `macros` - re-exports `impl_typed_uuid_kinds!`.
//! * `simulator` - deterministic `new_v4` seeded from `SIMULATOR_UUID_SEED`.

mod error;
mod generic;
mod kind;
mod tag;
mod typed;

#[cfg(feature = "proptest1")]
mod proptest1;

#[cfg(feature = "schemars08")]
mod schemars08;

#[cfg(feature = "simulator")]
pub mod simulator;

#[doc(hidden)]
pub mod macro_support;

pub use error::ParseError;
pub use generic::GenericUuid;
pub use kind::TypedUuidKind;
pub use tag::{TagError, TypedUuidTag};
pub use typed::TypedUuid;

#[cfg(feature = "proptest1")]
pub use proptest1::TypedUuidParams;

pub use uuid::{Uuid, Version};

#[cfg(feature = "derive")]
pub use newtype_uuid_derive::TypedUuidKind;

#[cfg(feature = "macros")]
pub use newtype_uuid_macros::impl_typed_uuid_kinds;
