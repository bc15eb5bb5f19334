//! Unified error type for the semver-kit library.
//!
//! Every parse, compare, sort and increment entry point either returns a
//! value or fails with one of these variants. There is no fallback to a
//! zero version on malformed input.

use thiserror::Error;

/// Unified error type for all semver-kit operations.
///
/// # Example
///
/// ```
/// use semver_kit::{parse, Error};
///
/// let err = parse("foo.1.1").unwrap_err();
/// assert!(matches!(err, Error::MalformedVersion(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input does not match the top-level version grammar.
    #[error("\"{0}\" is not a valid version")]
    MalformedVersion(String),

    /// A part handed to the versionable parser is not a `X.Y.Z` triple.
    #[error("part \"{0}\" can not be parsed into a major.minor.patch version")]
    InvalidVersionable(String),

    /// A numeric field is not a non-negative base-10 integer, or overflows.
    #[error("field \"{field}\" of \"{input}\" is not a valid number")]
    InvalidNumber { input: String, field: String },

    /// A build part is not alphanumeric.
    #[error("build part \"{0}\" is not alphanumeric")]
    BuildPartInvalid(String),

    /// The base handed to `next()` is neither absent, a string, nor a version.
    #[error("invalid base version: {0}")]
    InvalidBaseType(String),

    /// The base is a pre-release while the current version is not.
    #[error("base \"{base}\" is a pre-release but \"{current}\" is not, can not increment")]
    PreReleaseBaseMismatch { base: String, current: String },

    /// Incrementing would push a field past `u64::MAX`.
    #[error("\"{0}\" can not be incremented without overflowing")]
    VersionOverflow(String),

    /// `greatest()` was called without any version.
    #[error("no versions given")]
    EmptyInput,

    /// An element handed to `sort()` is neither a string nor a version.
    #[error("invalid version given, pass either versions or strings: {0}")]
    UnsortableElement(String),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if the error was raised while parsing a version string.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedVersion(_)
                | Self::InvalidVersionable(_)
                | Self::InvalidNumber { .. }
                | Self::BuildPartInvalid(_)
        )
    }

    /// Returns `true` if the error was raised by `next()` base handling.
    pub fn is_base_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBaseType(_) | Self::PreReleaseBaseMismatch { .. }
        )
    }

    pub(crate) fn invalid_number(input: &str, field: &str) -> Self {
        Self::InvalidNumber {
            input: input.to_string(),
            field: field.to_string(),
        }
    }
}
