//! Version string parsing.
//!
//! Parsing runs in stages: the grammar splits the input into a versionable
//! root, an optional pre-release tail and an optional build tail, and each
//! piece is handed to its own parser.

mod build;
mod grammar;
mod pre_release;
mod versionable;

use crate::error::Result;
use crate::logging::trace;
use crate::version::Version;

use build::parse_build;
use pre_release::parse_pre_release;
use versionable::parse_versionable;

/// How numeric fields that are not plain digits are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum NumberMode {
    /// Reject non-numeric or overflowing triple fields.
    #[default]
    Strict,
    /// Use the leading digits of a field, 0 if there are none.
    Lenient,
}

/// Options controlling a [`Parser`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub numbers: NumberMode,
}

/// Full version parser.
///
/// # Example
///
/// ```
/// use semver_kit::Parser;
///
/// let version = Parser::new().parse("1.2.3-beta.2+build.7.abc")?;
/// assert_eq!(version.minor(), 2);
/// assert_eq!(version.to_string(), "1.2.3-beta.2+build.7.abc");
/// # Ok::<(), semver_kit::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    /// A parser with strict numeric fields.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// A parser that coerces non-numeric triple fields instead of rejecting them.
    pub fn lenient() -> Self {
        Self::with_options(ParseOptions {
            numbers: NumberMode::Lenient,
        })
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parse a string into a [`Version`], keeping `input` as its original string.
    pub fn parse(&self, input: &str) -> Result<Version> {
        trace!(input = input, "parsing version");

        let parts = grammar::match_version(input)?;
        let numbers = self.options.numbers;

        let mut version: Version = parse_versionable(parts.version, numbers)?;

        if let Some(tail) = parts.pre_release {
            version = version.with_pre_release(parse_pre_release(tail, numbers)?);
        }

        if let Some(tail) = parts.build {
            version = version.with_build(parse_build(tail, numbers)?);
        }

        Ok(version.with_original_version(input))
    }
}

/// Values that can be turned into a [`Version`], parsing strings on the way.
pub trait IntoVersion {
    fn into_version(self, parser: &Parser) -> Result<Version>;
}

impl IntoVersion for Version {
    fn into_version(self, _parser: &Parser) -> Result<Version> {
        Ok(self)
    }
}

impl IntoVersion for &Version {
    fn into_version(self, _parser: &Parser) -> Result<Version> {
        Ok(self.clone())
    }
}

impl IntoVersion for &str {
    fn into_version(self, parser: &Parser) -> Result<Version> {
        parser.parse(self)
    }
}

impl IntoVersion for String {
    fn into_version(self, parser: &Parser) -> Result<Version> {
        parser.parse(&self)
    }
}

impl IntoVersion for &String {
    fn into_version(self, parser: &Parser) -> Result<Version> {
        parser.parse(self)
    }
}

/// Parse a string into a [`Version`] using the default [`Parser`].
pub fn parse(input: &str) -> Result<Version> {
    Parser::new().parse(input)
}
