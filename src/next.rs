//! Successor versions and clean copies.

use crate::compare;
use crate::error::{Error, Result};
use crate::logging::debug;
use crate::parser::{IntoVersion, Parser};
use crate::version::{Version, Versioned};

impl Version {
    /// A copy keeping the triple and pre-release, dropping the build and
    /// the original string.
    pub fn clean_copy(&self) -> Version {
        let copy = Version::from(self.versionable());
        match self.pre_release() {
            Some(pre_release) => copy.with_pre_release(pre_release.clone()),
            None => copy,
        }
    }

    /// The version following this one, using itself as the base.
    ///
    /// A pre-release bumps its release number (`1.0.0-beta.1` ->
    /// `1.0.0-beta.2`), a release bumps its patch (`1.0.0` -> `1.0.1`).
    /// Build metadata is dropped.
    ///
    /// Fails with [`Error::VersionOverflow`] when the bumped field is already
    /// `u64::MAX`.
    pub fn next(&self) -> Result<Version> {
        let next = Version::from(self.versionable());
        match self.pre_release() {
            Some(pre_release) => Ok(next.with_pre_release(pre_release.incremented()?)),
            None => self.next_patch(),
        }
    }

    /// The version following this one relative to `base`.
    ///
    /// - If `base` is greater than `self`, the next version is `base` itself
    ///   (as a clean copy).
    /// - If both are pre-releases, the pre-release of `self` is incremented.
    /// - If neither is a pre-release, the patch of `self` is incremented.
    /// - If only `self` is a pre-release, it graduates to its plain triple.
    ///
    /// Fails with [`Error::PreReleaseBaseMismatch`] when `base` is a
    /// pre-release and `self` is not, and with [`Error::VersionOverflow`]
    /// when the bumped field is already `u64::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use semver_kit::parse;
    ///
    /// let current = parse("1.0.0-beta")?;
    /// assert_eq!(current.next_from("1.0.0")?.to_string(), "1.0.0");
    /// assert_eq!(parse("1.0.0")?.next_from("1.0.2")?.to_string(), "1.0.2");
    /// # Ok::<(), semver_kit::Error>(())
    /// ```
    pub fn next_from(&self, base: impl IntoVersion) -> Result<Version> {
        let base = base.into_version(&Parser::new())?;

        if compare::greater_than(&base, self) {
            debug!(current = %self, base = %base, "jumping to greater base");
            return Ok(base.clean_copy());
        }

        let next = Version::from(self.versionable());
        match (base.pre_release(), self.pre_release()) {
            (Some(_), Some(pre_release)) => {
                debug!(current = %self, "incrementing pre-release");
                Ok(next.with_pre_release(pre_release.incremented()?))
            }
            (Some(_), None) => Err(Error::PreReleaseBaseMismatch {
                base: base.to_string(),
                current: self.to_string(),
            }),
            (None, None) => {
                debug!(current = %self, "incrementing patch");
                self.next_patch()
            }
            (None, Some(_)) => {
                debug!(current = %self, "graduating pre-release");
                Ok(next)
            }
        }
    }

    fn next_patch(&self) -> Result<Version> {
        let patch = self
            .patch()
            .checked_add(1)
            .ok_or_else(|| Error::VersionOverflow(self.to_string()))?;
        Ok(Version::from(self.versionable()).with_patch(patch))
    }
}
