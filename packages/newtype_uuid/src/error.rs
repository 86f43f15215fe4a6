//! The error returned when parsing a [`TypedUuid`](crate::TypedUuid) fails.

use thiserror::Error;

use crate::TypedUuidTag;

/// An error that occurred while parsing a [`TypedUuid`](crate::TypedUuid).
///
/// The error carries the tag of the kind that was being parsed, so a failure
/// deep inside a request handler still says which ID was malformed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("error parsing UUID ({tag})")]
#[non_exhaustive]
pub struct ParseError {
    /// The underlying error.
    #[source]
    pub error: uuid::Error,

    /// The tag of the UUID that failed to parse.
    pub tag: TypedUuidTag,
}

impl ParseError {
    pub(crate) const fn new(error: uuid::Error, tag: TypedUuidTag) -> Self {
        Self { error, tag }
    }
}
