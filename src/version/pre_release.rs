//! Pre-release qualifiers: either a triple (`1.2.3-0.1.2`) or a greek tag
//! with a release number (`1.2.3-beta.2`).

use std::fmt;

use super::versionable::{Versionable, Versioned};
use crate::error::{Error, Result};

/// A pre-release qualifier.
///
/// The mode is fixed when the value is built and never re-derived from the
/// field values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreRelease {
    /// Pre-release written as its own `X.Y.Z` triple.
    Versionable(Versionable),
    /// Pre-release written as a tag plus an optional release number.
    Greek { greek: String, release_number: u64 },
}

impl PreRelease {
    /// Build a greek-mode pre-release such as `rc.1`.
    pub fn tagged(greek: impl Into<String>, release_number: u64) -> Self {
        Self::Greek {
            greek: greek.into(),
            release_number,
        }
    }

    /// The triple of a versionable pre-release, all zero in greek mode.
    pub fn triple(&self) -> Versionable {
        match self {
            Self::Versionable(triple) => *triple,
            Self::Greek { .. } => Versionable::default(),
        }
    }

    /// The greek tag, absent in versionable mode.
    pub fn greek(&self) -> Option<&str> {
        match self {
            Self::Versionable(_) => None,
            Self::Greek { greek, .. } => Some(greek),
        }
    }

    /// The release number, 0 in versionable mode.
    pub fn release_number(&self) -> u64 {
        match self {
            Self::Versionable(_) => 0,
            Self::Greek { release_number, .. } => *release_number,
        }
    }

    pub fn is_versionable(&self) -> bool {
        matches!(self, Self::Versionable(_))
    }

    /// The next pre-release in the same series.
    ///
    /// Greek mode bumps the release number (`beta.1` -> `beta.2`); a
    /// versionable pre-release bumps its patch (`0.1.2` -> `0.1.3`).
    ///
    /// Fails with [`Error::VersionOverflow`] when the bumped field is already
    /// `u64::MAX`.
    pub fn incremented(&self) -> Result<Self> {
        let overflow = || Error::VersionOverflow(self.to_string());
        match self {
            Self::Versionable(triple) => Ok(Self::Versionable(Versionable {
                patch: triple.patch.checked_add(1).ok_or_else(overflow)?,
                ..*triple
            })),
            Self::Greek {
                greek,
                release_number,
            } => Ok(Self::tagged(
                greek.clone(),
                release_number.checked_add(1).ok_or_else(overflow)?,
            )),
        }
    }
}

impl From<Versionable> for PreRelease {
    fn from(triple: Versionable) -> Self {
        Self::Versionable(triple)
    }
}

impl Versioned for PreRelease {
    fn versionable(&self) -> Versionable {
        self.triple()
    }
}

/// Dispatches on the mode, not the field values: a versionable `0.0.0`
/// pre-release prints as `0.0.0` rather than as an empty greek tag.
impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Versionable(triple) => write!(f, "{}", triple),
            Self::Greek {
                greek,
                release_number,
            } => write!(f, "{}.{}", greek, release_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_accessors() {
        let pre = PreRelease::tagged("beta", 2);
        assert_eq!(pre.greek(), Some("beta"));
        assert_eq!(pre.release_number(), 2);
        assert!(pre.triple().is_zero());
        assert!(!pre.is_versionable());
    }

    #[test]
    fn test_versionable_accessors() {
        let pre = PreRelease::from(Versionable::new(0, 1, 2));
        assert_eq!(pre.greek(), None);
        assert_eq!(pre.release_number(), 0);
        assert_eq!(pre.triple(), Versionable::new(0, 1, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(PreRelease::tagged("rc", 6).to_string(), "rc.6");
        assert_eq!(PreRelease::tagged("alpha", 0).to_string(), "alpha.0");
        assert_eq!(
            PreRelease::from(Versionable::new(0, 1, 123)).to_string(),
            "0.1.123"
        );
    }

    #[test]
    fn test_incremented() {
        assert_eq!(
            PreRelease::tagged("beta", 5999).incremented(),
            Ok(PreRelease::tagged("beta", 6000))
        );
        assert_eq!(
            PreRelease::from(Versionable::new(0, 1, 2)).incremented(),
            Ok(PreRelease::from(Versionable::new(0, 1, 3)))
        );
    }

    #[test]
    fn test_incremented_overflow() {
        let greek = PreRelease::tagged("beta", u64::MAX);
        assert_eq!(
            greek.incremented(),
            Err(Error::VersionOverflow(greek.to_string()))
        );

        let triple = PreRelease::from(Versionable::new(0, 0, u64::MAX));
        assert_eq!(
            triple.incremented(),
            Err(Error::VersionOverflow(triple.to_string()))
        );
    }

    #[test]
    fn test_zero_triple_displays_as_triple() {
        assert_eq!(PreRelease::from(Versionable::default()).to_string(), "0.0.0");
    }
}
