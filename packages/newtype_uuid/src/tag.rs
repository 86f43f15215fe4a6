//! Runtime tags for UUID kinds.

use std::fmt;

/// Describes what kind of [`TypedUuid`](crate::TypedUuid) something is.
///
/// This is the runtime equivalent of [`TypedUuidKind`](crate::TypedUuidKind).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedUuidTag(&'static str);

impl TypedUuidTag {
    /// Creates a new `TypedUuidTag` from a static string.
    ///
    /// The string must be non-empty, and consist of:
    ///
    /// * ASCII letters
    /// * digits (only after the first character)
    /// * underscores
    /// * hyphens (only after the first character)
    ///
    /// # Panics
    ///
    /// * If the above conditions aren't met. When called in a `const`
    ///   context this becomes a compile error. Use [`Self::try_new`] to handle
    ///   errors instead.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        match validate(tag) {
            Ok(()) => Self(tag),
            Err(message) => panic!("{}", message),
        }
    }

    /// Attempts to create a new `TypedUuidTag` from a static string.
    ///
    /// See [`Self::new`] for the rules a tag must follow.
    ///
    /// # Errors
    ///
    /// * If the tag is empty
    /// * If the first character isn't an ASCII letter or underscore
    /// * If any other character isn't an ASCII letter, digit, underscore, or
    ///   hyphen
    pub const fn try_new(tag: &'static str) -> Result<Self, TagError> {
        match validate(tag) {
            Ok(()) => Ok(Self(tag)),
            Err(message) => Err(TagError {
                input: tag,
                message,
            }),
        }
    }

    /// Returns the tag as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

const fn validate(tag: &'static str) -> Result<(), &'static str> {
    let bytes = tag.as_bytes();
    let Some((first, rest)) = bytes.split_first() else {
        return Err("tag must not be empty");
    };

    if !(first.is_ascii_alphabetic() || *first == b'_') {
        return Err("first character of tag must be an ASCII letter or underscore");
    }

    // Iterator adapters aren't available in const fns.
    let mut i = 0;
    while i < rest.len() {
        let c = rest[i];
        if !(c.is_ascii_alphanumeric() || c == b'_' || c == b'-') {
            return Err("tag must only contain ASCII letters, digits, underscores, or hyphens");
        }
        i += 1;
    }

    Ok(())
}

impl fmt::Display for TypedUuidTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for TypedUuidTag {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<str> for TypedUuidTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypedUuidTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An error that occurred while creating a [`TypedUuidTag`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("error creating tag from '{input}': {message}")]
#[non_exhaustive]
pub struct TagError {
    /// The input string.
    pub input: &'static str,

    /// The error message.
    pub message: &'static str,
}
