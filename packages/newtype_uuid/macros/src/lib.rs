#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Procedural macro for declaring many `newtype_uuid` kinds at once.
//!
//! Usually reached through `newtype_uuid`'s `macros` feature.

mod generate;
mod input;

use quote::ToTokens as _;

/// Declares typed UUID kinds along with a `TypedUuid` alias for each.
///
/// # Examples
///
/// ```
/// use newtype_uuid::TypedUuidKind as _;
/// use newtype_uuid_macros::impl_typed_uuid_kinds;
///
/// impl_typed_uuid_kinds! {
///     kinds = {
///         User = {},
///         Project = { tag = "proj" },
///     },
/// }
///
/// // Each kind gets a `<Name>Kind` enum and a `<Name>Uuid` alias.
/// let id = UserUuid::new_v4();
/// assert_eq!(UserKind::tag().as_str(), "user");
/// assert_eq!(ProjectKind::tag().as_str(), "proj");
/// assert_eq!(UserKind::alias(), Some("UserUuid"));
/// # let _ = id;
/// ```
///
/// # Input
///
/// ```text
/// impl_typed_uuid_kinds! {
///     settings = {                       // optional
///         newtype_uuid_crate = my_uuid,  // defaults to `newtype_uuid`
///         attrs = [#[derive(Hash)]],     // extra attributes for every kind
///         schemars08 = {                 // generate `JsonSchema` impls
///             attrs = [#[cfg(feature = "schemars")]],
///             feature = "schemars",      // shorthand for the cfg above
///             rust_type = {              // adds an `x-rust-type` extension
///                 crate = "my-service",
///                 version = "1.0.0",
///                 path = "my_service::types",
///             },
///         },
///     },
///     kinds = {
///         User = {},
///         Project = {
///             tag = "proj",              // defaults to snake_case of the name
///             type_name = ProjectKind,   // defaults to `<Name>Kind`
///             alias = ProjectUuid,       // defaults to `<Name>Uuid`
///             attrs = [],                // replaces `settings.attrs`
///         },
///     },
/// }
/// ```
///
/// Every kind is a `pub enum` deriving `Clone, Copy, Debug, PartialEq, Eq`.
///
/// Invalid kinds are reported as compile errors while the valid ones are still
/// generated. Invalid `settings` generate nothing.
///
/// `kinds` is required:
///
/// ```compile_fail
/// newtype_uuid_macros::impl_typed_uuid_kinds! {
///     settings = {},
/// }
/// ```
///
/// Malformed `settings` are rejected:
///
/// ```compile_fail
/// newtype_uuid_macros::impl_typed_uuid_kinds! {
///     settings = { newtype_uuid_crate = "newtype_uuid" },
///     kinds = { User = {} },
/// }
/// ```
///
/// ```compile_fail
/// newtype_uuid_macros::impl_typed_uuid_kinds! {
///     settings = { unknown = true },
///     kinds = { User = {} },
/// }
/// ```
///
/// Kind names must be ASCII identifiers:
///
/// ```compile_fail
/// newtype_uuid_macros::impl_typed_uuid_kinds! {
///     kinds = { NonÅscii = {} },
/// }
/// ```
///
/// ```compile_fail
/// newtype_uuid_macros::impl_typed_uuid_kinds! {
///     kinds = { "" = {} },
/// }
/// ```
///
/// Tags follow the same rules as `TypedUuidTag::new`:
///
/// ```compile_fail
/// newtype_uuid_macros::impl_typed_uuid_kinds! {
///     kinds = { Hello = { tag = "Hellö" } },
/// }
/// ```
///
/// Kind settings must be a map:
///
/// ```compile_fail
/// newtype_uuid_macros::impl_typed_uuid_kinds! {
///     kinds = { Tag = "hi" },
/// }
/// ```
#[proc_macro]
pub fn impl_typed_uuid_kinds(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    generate::impl_typed_uuid_kinds(input.into())
        .into_token_stream()
        .into()
}
