//! Re-exports used by code that `impl_typed_uuid_kinds!` generates.
//!
//! Not part of the public API. Generated code goes through these paths so the
//! calling crate doesn't have to depend on schemars or `serde_json` itself.

#[cfg(feature = "schemars08")]
pub use schemars as schemars08;

#[cfg(feature = "schemars08")]
pub use serde_json;
