//! Top-level grammar matching.
//!
//! ```text
//! version    := digits "." digits "." digits
//! prerelease := "-" [A-Za-z0-9.]+
//! build      := "+" [A-Za-z0-9.]+
//! input      := version prerelease? build?
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::logging::{debug, trace};

// The pattern is a compile-time constant; failing to compile it is a bug here.
#[allow(clippy::expect_used)]
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<version>[0-9]+\.[0-9]+\.[0-9]+)(?:-(?P<prerelease>[0-9A-Za-z.]+))?(?:\+(?P<build>[0-9A-Za-z.]+))?$",
    )
    .expect("version grammar regex must compile")
});

/// The three tails of a version string, separators stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VersionParts<'a> {
    pub version: &'a str,
    pub pre_release: Option<&'a str>,
    pub build: Option<&'a str>,
}

/// Split `input` into its versionable root, pre-release tail and build tail.
///
/// A bad character anywhere fails the whole match.
pub(crate) fn match_version(input: &str) -> Result<VersionParts<'_>> {
    let Some(captures) = VERSION_RE.captures(input) else {
        debug!(input = input, "input does not match version grammar");
        return Err(Error::MalformedVersion(input.to_string()));
    };

    let version = captures
        .name("version")
        .map(|m| m.as_str())
        .ok_or_else(|| Error::MalformedVersion(input.to_string()))?;
    let pre_release = captures.name("prerelease").map(|m| m.as_str());
    let build = captures.name("build").map(|m| m.as_str());

    trace!(
        version = version,
        pre_release = ?pre_release,
        build = ?build,
        "matched version grammar"
    );

    Ok(VersionParts {
        version,
        pre_release,
        build,
    })
}
