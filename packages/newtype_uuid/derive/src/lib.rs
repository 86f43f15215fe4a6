#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Derive macro for the `newtype_uuid` crate.
//!
//! Usually reached through `newtype_uuid`'s `derive` feature, which
//! re-exports [`TypedUuidKind`](macro@TypedUuidKind) next to the trait of the
//! same name.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, ext::IdentExt as _, parse_macro_input};

const TAG_ATTR: &str = "typed_uuid_tag";

/// Derives `newtype_uuid::TypedUuidKind` for this type.
///
/// By default, the tag is the name of the Rust type:
///
/// ```
/// use newtype_uuid::TypedUuidKind;
///
/// #[derive(TypedUuidKind)]
/// struct MyKind;
///
/// assert_eq!(MyKind::tag().as_str(), "MyKind");
/// ```
///
/// `#[typed_uuid_tag("...")]` sets the tag explicitly:
///
/// ```
/// use newtype_uuid::TypedUuidKind;
///
/// #[derive(TypedUuidKind)]
/// #[typed_uuid_tag("my-great-uuid-kind")]
/// enum MyKind {}
///
/// assert_eq!(MyKind::tag().as_str(), "my-great-uuid-kind");
/// ```
///
/// A tag must be non-empty and consist of only:
///
/// * ASCII letters
/// * digits (only after the first character)
/// * underscores
/// * hyphens (only after the first character)
///
/// Invalid tags are rejected at compile time:
///
/// ```compile_fail
/// use newtype_uuid::TypedUuidKind;
///
/// #[derive(TypedUuidKind)]
/// #[typed_uuid_tag("1tag")]
/// struct MyKind;
/// ```
///
/// ```compile_fail
/// use newtype_uuid::TypedUuidKind;
///
/// #[derive(TypedUuidKind)]
/// #[typed_uuid_tag("")]
/// struct MyKind;
/// ```
///
/// ```compile_fail
/// use newtype_uuid::TypedUuidKind;
///
/// #[derive(TypedUuidKind)]
/// #[typed_uuid_tag()]
/// struct MyKind;
/// ```
#[proc_macro_derive(TypedUuidKind, attributes(typed_uuid_tag))]
pub fn derive_typed_uuid_kind(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    gen_typed_uuid_kind(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn gen_typed_uuid_kind(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let tag = match input.attrs.iter().find(|attr| attr.path().is_ident(TAG_ATTR)) {
        Some(attr) => {
            let tag = attr.parse_args::<LitStr>()?;
            validate_tag(&tag.value()).map_err(|message| syn::Error::new_spanned(&tag, message))?;
            tag
        }
        None => {
            let tag = LitStr::new(&name.unraw().to_string(), name.span());
            validate_tag(&tag.value()).map_err(|message| {
                syn::Error::new_spanned(
                    name,
                    format!(
                        "type name can't be used as a tag: {message}; \
                         set one with #[{TAG_ATTR}(\"...\")]"
                    ),
                )
            })?;
            tag
        }
    };

    Ok(quote! {
        impl #impl_generics ::newtype_uuid::TypedUuidKind for #name #ty_generics #where_clause {
            #[inline]
            fn tag() -> ::newtype_uuid::TypedUuidTag {
                // `const` ensures that tags are validated at compile time.
                const TAG: ::newtype_uuid::TypedUuidTag = ::newtype_uuid::TypedUuidTag::new(#tag);
                TAG
            }
        }
    })
}

fn validate_tag(tag: &str) -> Result<(), String> {
    let mut chars = tag.chars();
    let Some(first) = chars.next() else {
        return Err("tag must not be empty".to_string());
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(format!(
            "a tag's first character may only be an ASCII letter or an underscore (found {first:?})"
        ));
    }

    if let Some(c) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '_' && *c != '-') {
        return Err(format!(
            "a tag may only contain ASCII alphanumeric characters, underscores, and hyphens (found {c:?})"
        ));
    }

    Ok(())
}
