//! Pre-release tail parsing.

use crate::error::Result;
use crate::logging::debug;
use crate::version::PreRelease;

use super::NumberMode;
use super::versionable::{lenient_number, parse_versionable};

/// Parse a pre-release tail (without the leading `-`).
///
/// A tail with exactly two dots is a triple (`0.1.2`); anything else is a
/// greek tag optionally followed by a release number (`beta.2`).
pub(crate) fn parse_pre_release(tail: &str, numbers: NumberMode) -> Result<PreRelease> {
    if tail.matches('.').count() == 2 {
        return parse_versionable(tail, numbers);
    }

    let mut fields = tail.split('.');
    let greek = fields.next().unwrap_or_default();
    let release_number = fields.next().map(lenient_number).unwrap_or(0);

    if fields.next().is_some() {
        debug!(tail = tail, "ignoring pre-release fields after the release number");
    }

    Ok(PreRelease::tagged(greek, release_number))
}
