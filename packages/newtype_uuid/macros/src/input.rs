//! Parsing for the `impl_typed_uuid_kinds!` input.
//!
//! The input is a tree of `key = value` entries separated by commas. Parsing
//! happens in two passes: [`parse_entries`] splits the token stream into
//! entries without interpreting them, then the `parse_*` functions check each
//! entry against what the macro expects. The second pass collects errors
//! instead of stopping at the first one, so one bad kind doesn't hide the rest.

use std::collections::BTreeMap;

use convert_case::{Case, Casing as _};
use proc_macro2::{Delimiter, Ident, Span, TokenStream, TokenTree};
use quote::format_ident;
use syn::{
    Attribute, LitStr, Token,
    ext::IdentExt as _,
    parse::{ParseStream, Parser as _},
};

/// A single `key = value` entry.
#[derive(Clone)]
pub(crate) struct Entry {
    pub(crate) key: TokenTree,
    pub(crate) value: Value,
}

impl Entry {
    fn key_ident(&self) -> Option<&Ident> {
        match &self.key {
            TokenTree::Ident(ident) => Some(ident),
            _ => None,
        }
    }
}

/// The right-hand side of an [`Entry`].
#[derive(Clone)]
pub(crate) enum Value {
    /// `{ key = value, ... }`
    Map(Vec<Entry>, Span),
    /// `[ ... ]`
    List(TokenStream, Span),
    /// Anything else.
    Tokens(TokenStream, Span),
}

impl Value {
    fn from_tokens(tokens: Vec<TokenTree>) -> syn::Result<Self> {
        if let [TokenTree::Group(group)] = tokens.as_slice() {
            match group.delimiter() {
                Delimiter::Brace => {
                    return Ok(Self::Map(parse_entries(group.stream())?, group.span()));
                }
                Delimiter::Bracket => return Ok(Self::List(group.stream(), group.span())),
                Delimiter::Parenthesis | Delimiter::None => {}
            }
        }

        let span = tokens.first().map_or_else(Span::call_site, TokenTree::span);
        Ok(Self::Tokens(tokens.into_iter().collect(), span))
    }

    const fn span(&self) -> Span {
        match self {
            Self::Map(_, span) | Self::List(_, span) | Self::Tokens(_, span) => *span,
        }
    }

    fn as_map(&self, what: &str) -> syn::Result<&[Entry]> {
        match self {
            Self::Map(entries, _) => Ok(entries),
            Self::List(..) | Self::Tokens(..) => Err(syn::Error::new(
                self.span(),
                format!("expected a map `{{ ... }}` for {what}"),
            )),
        }
    }

    fn as_ident(&self, what: &str) -> syn::Result<Ident> {
        let error = || syn::Error::new(self.span(), format!("expected an identifier for {what}"));
        match self {
            Self::Tokens(tokens, _) => syn::parse2::<Ident>(tokens.clone()).map_err(|_| error()),
            Self::Map(..) | Self::List(..) => Err(error()),
        }
    }

    fn as_lit_str(&self, what: &str) -> syn::Result<LitStr> {
        let error = || syn::Error::new(self.span(), format!("expected a string literal for {what}"));
        match self {
            Self::Tokens(tokens, _) => syn::parse2::<LitStr>(tokens.clone()).map_err(|_| error()),
            Self::Map(..) | Self::List(..) => Err(error()),
        }
    }

    fn as_attrs(&self, what: &str) -> syn::Result<Vec<Attribute>> {
        match self {
            Self::List(tokens, _) => parse_attr_list.parse2(tokens.clone()),
            Self::Map(..) | Self::Tokens(..) => Err(syn::Error::new(
                self.span(),
                format!("expected a list of attributes `[#[...], ...]` for {what}"),
            )),
        }
    }
}

/// Parses `#[a], #[b] #[c],` style lists. Commas between attributes are
/// optional and a trailing comma is allowed.
fn parse_attr_list(input: ParseStream<'_>) -> syn::Result<Vec<Attribute>> {
    let mut attrs = Vec::new();
    while !input.is_empty() {
        attrs.extend(Attribute::parse_outer(input)?);
        if input.is_empty() {
            break;
        }
        input.parse::<Token![,]>()?;
    }
    Ok(attrs)
}

/// Splits a token stream into `key = value` entries.
///
/// Values end at the next top-level comma, so anything inside a group is
/// passed through untouched.
///
/// # Errors
///
/// * If a key isn't followed by `=`
/// * If a key has no value
pub(crate) fn parse_entries(input: TokenStream) -> syn::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut tokens = input.into_iter();

    while let Some(key) = tokens.next() {
        match tokens.next() {
            Some(TokenTree::Punct(punct)) if punct.as_char() == '=' => {}
            Some(other) => {
                return Err(syn::Error::new(
                    other.span(),
                    format!("expected `=` after `{key}`"),
                ));
            }
            None => {
                return Err(syn::Error::new(
                    key.span(),
                    format!("expected `=` after `{key}`"),
                ));
            }
        }

        let mut value = Vec::new();
        for token in tokens.by_ref() {
            if matches!(&token, TokenTree::Punct(punct) if punct.as_char() == ',') {
                break;
            }
            value.push(token);
        }

        if value.is_empty() {
            return Err(syn::Error::new(
                key.span(),
                format!("expected a value after `{key} =`"),
            ));
        }

        entries.push(Entry {
            value: Value::from_tokens(value)?,
            key,
        });
    }

    Ok(entries)
}

/// Checks the keys of a map against the allowed set and indexes the entries
/// by key.
///
/// Non-identifier, unknown and duplicate keys are reported and left out.
fn collect_fields<'a>(
    entries: &'a [Entry],
    allowed: &[&str],
    context: &str,
    errors: &mut Vec<syn::Error>,
) -> BTreeMap<String, &'a Entry> {
    let mut fields = BTreeMap::new();

    for entry in entries {
        let Some(key) = entry.key_ident() else {
            errors.push(syn::Error::new(
                entry.key.span(),
                format!("expected an identifier key in {context}"),
            ));
            continue;
        };

        let name = key.to_string();
        if !allowed.contains(&name.as_str()) {
            errors.push(syn::Error::new(
                key.span(),
                format!(
                    "unknown key `{name}` in {context}; expected one of: {}",
                    allowed.join(", ")
                ),
            ));
        } else if fields.contains_key(&name) {
            errors.push(syn::Error::new(
                key.span(),
                format!("duplicate key `{name}` in {context}"),
            ));
        } else {
            fields.insert(name, entry);
        }
    }

    fields
}

fn record<T>(result: syn::Result<T>, errors: &mut Vec<syn::Error>) -> Option<T> {
    result.map_err(|error| errors.push(error)).ok()
}

/// The validated top-level input.
pub(crate) struct ImplKindsInput {
    pub(crate) settings: GlobalSettings,
    /// Kinds are validated one at a time by [`parse_kind`].
    pub(crate) kinds: Vec<Entry>,
}

/// `settings = { ... }`
pub(crate) struct GlobalSettings {
    pub(crate) newtype_uuid_crate: Ident,
    pub(crate) attrs: Vec<Attribute>,
    pub(crate) schemars08: Option<SchemarsSettings>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            newtype_uuid_crate: Ident::new("newtype_uuid", Span::call_site()),
            attrs: Vec::new(),
            schemars08: None,
        }
    }
}

/// `settings.schemars08 = { ... }`
pub(crate) struct SchemarsSettings {
    pub(crate) attrs: Vec<Attribute>,
    pub(crate) rust_type: Option<RustTypeSettings>,
}

/// `settings.schemars08.rust_type = { ... }`, the `x-rust-type` extension.
pub(crate) struct RustTypeSettings {
    pub(crate) crate_name: LitStr,
    pub(crate) version: LitStr,
    pub(crate) path: LitStr,
}

/// A fully resolved kind.
pub(crate) struct KindConfig {
    pub(crate) tag: String,
    pub(crate) type_name: Ident,
    pub(crate) alias: Ident,
    /// Replaces the global attributes when set.
    pub(crate) attrs: Option<Vec<Attribute>>,
}

/// Parses the top-level input.
///
/// Returns `None` if anything outside of the individual kinds is invalid. In
/// that case no output should be generated at all.
pub(crate) fn parse_input(input: TokenStream, errors: &mut Vec<syn::Error>) -> Option<ImplKindsInput> {
    let entries = record(parse_entries(input), errors)?;
    let before = errors.len();

    let fields = collect_fields(
        &entries,
        &["settings", "kinds"],
        "impl_typed_uuid_kinds!",
        errors,
    );

    let settings = match fields.get("settings") {
        Some(entry) => parse_settings(&entry.value, errors),
        None => Some(GlobalSettings::default()),
    };

    let kinds = match fields.get("kinds") {
        Some(entry) => record(entry.value.as_map("`kinds`"), errors).map(<[Entry]>::to_vec),
        None => {
            errors.push(syn::Error::new(
                Span::call_site(),
                "missing required key `kinds`",
            ));
            None
        }
    };

    if errors.len() > before {
        return None;
    }

    Some(ImplKindsInput {
        settings: settings?,
        kinds: kinds?,
    })
}

fn parse_settings(value: &Value, errors: &mut Vec<syn::Error>) -> Option<GlobalSettings> {
    let entries = record(value.as_map("`settings`"), errors)?;
    let before = errors.len();
    let fields = collect_fields(
        entries,
        &["newtype_uuid_crate", "attrs", "schemars08"],
        "`settings`",
        errors,
    );

    let mut settings = GlobalSettings::default();

    if let Some(entry) = fields.get("newtype_uuid_crate") {
        if let Some(ident) = record(entry.value.as_ident("`newtype_uuid_crate`"), errors) {
            settings.newtype_uuid_crate = ident;
        }
    }

    if let Some(entry) = fields.get("attrs") {
        if let Some(attrs) = record(entry.value.as_attrs("`settings.attrs`"), errors) {
            settings.attrs = attrs;
        }
    }

    if let Some(entry) = fields.get("schemars08") {
        settings.schemars08 = parse_schemars_settings(&entry.value, errors);
    }

    (errors.len() == before).then_some(settings)
}

fn parse_schemars_settings(value: &Value, errors: &mut Vec<syn::Error>) -> Option<SchemarsSettings> {
    let entries = record(value.as_map("`settings.schemars08`"), errors)?;
    let fields = collect_fields(
        entries,
        &["attrs", "feature", "rust_type"],
        "`settings.schemars08`",
        errors,
    );

    let mut attrs = Vec::new();

    if let Some(entry) = fields.get("attrs") {
        attrs.extend(record(
            entry.value.as_attrs("`settings.schemars08.attrs`"),
            errors,
        )?);
    }

    // `feature = "x"` is shorthand for `attrs = [#[cfg(feature = "x")]]`.
    if let Some(entry) = fields.get("feature") {
        let feature = record(
            entry.value.as_lit_str("`settings.schemars08.feature`"),
            errors,
        )?;
        attrs.push(syn::parse_quote! { #[cfg(feature = #feature)] });
    }

    let rust_type = match fields.get("rust_type") {
        Some(entry) => Some(parse_rust_type(&entry.value, errors)?),
        None => None,
    };

    Some(SchemarsSettings { attrs, rust_type })
}

fn parse_rust_type(value: &Value, errors: &mut Vec<syn::Error>) -> Option<RustTypeSettings> {
    let entries = record(value.as_map("`settings.schemars08.rust_type`"), errors)?;
    let fields = collect_fields(
        entries,
        &["crate", "version", "path"],
        "`settings.schemars08.rust_type`",
        errors,
    );

    let mut required = |key: &str| {
        let Some(entry) = fields.get(key) else {
            errors.push(syn::Error::new(
                value.span(),
                format!("missing required key `{key}` in `settings.schemars08.rust_type`"),
            ));
            return None;
        };
        record(
            entry
                .value
                .as_lit_str(&format!("`settings.schemars08.rust_type.{key}`")),
            errors,
        )
    };

    let crate_name = required("crate");
    let version = required("version");
    let path = required("path");

    Some(RustTypeSettings {
        crate_name: crate_name?,
        version: version?,
        path: path?,
    })
}

/// Parses and validates a single `Name = { ... }` kind entry.
///
/// Returns `None` if the kind has any errors. Errors are pushed to `errors`.
pub(crate) fn parse_kind(entry: &Entry, errors: &mut Vec<syn::Error>) -> Option<KindConfig> {
    let before = errors.len();

    let Some(name) = entry.key_ident() else {
        errors.push(syn::Error::new(
            entry.key.span(),
            "kind name must be an identifier",
        ));
        return None;
    };
    let kind_name = name.unraw().to_string();
    validate_kind_name(name.span(), &kind_name, errors);
    if errors.len() > before {
        return None;
    }

    let context = format!("kind `{kind_name}`");
    let entries = record(entry.value.as_map(&context), errors)?;
    let fields = collect_fields(entries, &["tag", "type_name", "alias", "attrs"], &context, errors);

    let tag = match fields.get("tag") {
        Some(entry) => record(entry.value.as_lit_str("`tag`"), errors).and_then(|tag| {
            let value = tag.value();
            record(
                validate_tag(&value).map_err(|message| syn::Error::new(tag.span(), message)),
                errors,
            )
            .map(|()| value)
        }),
        None => {
            let value = kind_name.to_case(Case::Snake);
            record(
                validate_tag(&value).map_err(|message| {
                    syn::Error::new(
                        name.span(),
                        format!(
                            "can't derive a tag from kind name `{kind_name}` ({message}); \
                             set `tag` explicitly"
                        ),
                    )
                }),
                errors,
            )
            .map(|()| value)
        }
    };

    let type_name = match fields.get("type_name") {
        Some(entry) => record(entry.value.as_ident("`type_name`"), errors),
        None => Some(format_ident!("{}Kind", name.unraw(), span = name.span())),
    };

    let alias = match fields.get("alias") {
        Some(entry) => record(entry.value.as_ident("`alias`"), errors),
        None => Some(format_ident!("{}Uuid", name.unraw(), span = name.span())),
    };

    let attrs = match fields.get("attrs") {
        Some(entry) => Some(record(entry.value.as_attrs("`attrs`"), errors)?),
        None => None,
    };

    if errors.len() > before {
        return None;
    }

    Some(KindConfig {
        tag: tag?,
        type_name: type_name?,
        alias: alias?,
        attrs,
    })
}

fn validate_kind_name(span: Span, kind_name: &str, errors: &mut Vec<syn::Error>) {
    let mut chars = kind_name.chars();
    let Some(first) = chars.next() else {
        errors.push(syn::Error::new(span, "kind name must not be empty"));
        return;
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        errors.push(syn::Error::new(
            span,
            "kind name must start with an ASCII letter or underscore",
        ));
    }

    // Tags may contain hyphens, but Rust identifiers can't, so hyphens aren't
    // accepted here.
    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        errors.push(syn::Error::new(
            span,
            "kind name must consist of ASCII alphanumeric characters or underscores",
        ));
    }
}

/// Same rules as `TypedUuidTag::new`, checked early for a better error span.
fn validate_tag(tag: &str) -> Result<(), String> {
    let mut chars = tag.chars();
    let Some(first) = chars.next() else {
        return Err("tag must not be empty".to_string());
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(format!(
            "a tag's first character may only be an ASCII letter or an underscore (found {first:?})"
        ));
    }

    if let Some(c) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-')) {
        return Err(format!(
            "a tag may only contain ASCII alphanumeric characters, underscores, and hyphens (found {c:?})"
        ));
    }

    Ok(())
}
