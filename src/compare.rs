//! Comparisons between versions.
//!
//! Versions are ordered tier by tier, each tier consulted only when the
//! previous ones are equal:
//!
//! 1. the `major.minor.patch` triple;
//! 2. pre-release presence (a release is greater than its pre-releases);
//! 3. the pre-release value (triple first, then greek tag precedence, then
//!    release number);
//! 4. build presence (a build is greater than none), then build number.
//!
//! Build parts are printed but never compared.
//!
//! Greek tags outside the precedence list rank above every listed tag. When
//! both tags are unlisted the left-hand side wins, so for two distinct
//! unlisted tags `greater_than` holds in both directions. This is why
//! [`Version`] does not implement `PartialOrd`.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::version::{Build, PreRelease, Version, Versioned};

/// Greek tags in ascending precedence.
pub const GREEK_PRECEDENCE: [&str; 6] =
    ["pre-alpha", "alpha", "pre-beta", "beta", "pre-rc", "rc"];

/// Are two versions equal?
///
/// Triples must match, pre-releases must both be absent or equal, builds
/// must both be absent or carry the same number.
pub fn equals(v1: &Version, v2: &Version) -> bool {
    if !versionable_equals(v1, v2) {
        return false;
    }

    let pre_releases_equal = match (v1.pre_release(), v2.pre_release()) {
        (None, None) => true,
        (Some(p1), Some(p2)) => pre_release_equals(p1, p2),
        _ => false,
    };
    if !pre_releases_equal {
        return false;
    }

    match (v1.build(), v2.build()) {
        (None, None) => true,
        (Some(b1), Some(b2)) => build_equals(b1, b2),
        _ => false,
    }
}

/// Is `v1` greater than `v2`?
pub fn greater_than(v1: &Version, v2: &Version) -> bool {
    if equals(v1, v2) {
        return false;
    }

    if !versionable_equals(v1, v2) {
        return versionable_greater_than(v1, v2);
    }

    match (v1.pre_release(), v2.pre_release()) {
        (Some(_), None) => return false,
        (None, Some(_)) => return true,
        (Some(p1), Some(p2)) if !pre_release_equals(p1, p2) => {
            return pre_release_greater_than(p1, p2);
        }
        _ => {}
    }

    match (v1.build(), v2.build()) {
        (Some(b1), Some(b2)) => build_greater_than(b1, b2),
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Is `v1` smaller than `v2`? Holds when neither equal nor greater.
pub fn smaller_than(v1: &Version, v2: &Version) -> bool {
    !equals(v1, v2) && !greater_than(v1, v2)
}

/// Where `v1` stands relative to `v2`.
///
/// `Greater` iff [`greater_than`], `Equal` iff [`equals`], `Less` otherwise.
pub fn ordering(v1: &Version, v2: &Version) -> Ordering {
    if equals(v1, v2) {
        Ordering::Equal
    } else if greater_than(v1, v2) {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// The greatest of a set of versions.
///
/// A running maximum: the current candidate is replaced unless it is
/// strictly greater, so among equal versions the last one wins.
///
/// # Example
///
/// ```
/// use semver_kit::{compare, parse};
///
/// let versions = [parse("0.1.2")?, parse("0.1.2-rc.1")?, parse("0.1.2-rc")?];
/// assert_eq!(compare::greatest(&versions)?.to_string(), "0.1.2");
/// # Ok::<(), semver_kit::Error>(())
/// ```
pub fn greatest<'a, I>(versions: I) -> Result<&'a Version>
where
    I: IntoIterator<Item = &'a Version>,
{
    versions
        .into_iter()
        .reduce(|greatest, next| {
            if greater_than(greatest, next) {
                greatest
            } else {
                next
            }
        })
        .ok_or(Error::EmptyInput)
}

fn versionable_equals(v1: &impl Versioned, v2: &impl Versioned) -> bool {
    v1.versionable() == v2.versionable()
}

fn versionable_greater_than(v1: &impl Versioned, v2: &impl Versioned) -> bool {
    v1.versionable() > v2.versionable()
}

fn pre_release_equals(p1: &PreRelease, p2: &PreRelease) -> bool {
    versionable_equals(p1, p2)
        && p1.greek() == p2.greek()
        && p1.release_number() == p2.release_number()
}

fn pre_release_greater_than(p1: &PreRelease, p2: &PreRelease) -> bool {
    // Triples take precedence over greek tags
    if !versionable_equals(p1, p2) {
        return versionable_greater_than(p1, p2);
    }

    if p1.greek() != p2.greek() {
        return greek_greater_than(p1.greek(), p2.greek());
    }

    p1.release_number() > p2.release_number()
}

fn greek_rank(greek: Option<&str>) -> Option<usize> {
    greek.and_then(|greek| GREEK_PRECEDENCE.iter().position(|known| *known == greek))
}

fn greek_greater_than(greek1: Option<&str>, greek2: Option<&str>) -> bool {
    match (greek_rank(greek1), greek_rank(greek2)) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(rank1), Some(rank2)) => rank1 > rank2,
    }
}

fn build_equals(b1: &Build, b2: &Build) -> bool {
    b1.number() == b2.number()
}

fn build_greater_than(b1: &Build, b2: &Build) -> bool {
    // An absent number sorts below any number
    b1.number() > b2.number()
}
