//! The `major.minor.patch` triple shared by versions and pre-releases.

use std::fmt;

/// A `major.minor.patch` integer triple. All fields default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Versionable {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Versionable {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns `true` if all three fields are zero.
    pub const fn is_zero(&self) -> bool {
        self.major == 0 && self.minor == 0 && self.patch == 0
    }
}

impl fmt::Display for Versionable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Anything carrying a versionable triple.
///
/// Implemented by [`Versionable`] itself, [`Version`](super::Version) and
/// [`PreRelease`](super::PreRelease) so that triple comparison is written once.
pub trait Versioned {
    fn versionable(&self) -> Versionable;
}

impl Versioned for Versionable {
    fn versionable(&self) -> Versionable {
        *self
    }
}
