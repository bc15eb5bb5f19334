//! Version data model.
//!
//! A [`Version`] is a [`Versionable`] triple plus an optional [`PreRelease`],
//! an optional [`Build`] and the verbatim string it was parsed from.

mod build;
mod pre_release;
mod versionable;

use std::fmt;

pub use build::Build;
pub use pre_release::PreRelease;
pub use versionable::{Versionable, Versioned};

/// A single version such as `1.2.3-rc.1+build.42`.
///
/// Equality follows [`compare::equals`](crate::compare::equals): the original
/// string and build parts are ignored.
#[derive(Debug, Clone, Default)]
pub struct Version {
    triple: Versionable,
    pre_release: Option<PreRelease>,
    build: Option<Build>,
    original: String,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            triple: Versionable::new(major, minor, patch),
            pre_release: None,
            build: None,
            original: String::new(),
        }
    }

    pub fn major(&self) -> u64 {
        self.triple.major
    }

    pub fn minor(&self) -> u64 {
        self.triple.minor
    }

    pub fn patch(&self) -> u64 {
        self.triple.patch
    }

    pub fn pre_release(&self) -> Option<&PreRelease> {
        self.pre_release.as_ref()
    }

    pub fn has_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    pub fn build(&self) -> Option<&Build> {
        self.build.as_ref()
    }

    pub fn has_build(&self) -> bool {
        self.build.is_some()
    }

    /// The string this version was parsed from, empty if it was built directly.
    pub fn original_version(&self) -> &str {
        &self.original
    }

    pub fn with_major(mut self, major: u64) -> Self {
        self.triple.major = major;
        self
    }

    pub fn with_minor(mut self, minor: u64) -> Self {
        self.triple.minor = minor;
        self
    }

    pub fn with_patch(mut self, patch: u64) -> Self {
        self.triple.patch = patch;
        self
    }

    pub fn with_pre_release(mut self, pre_release: PreRelease) -> Self {
        self.pre_release = Some(pre_release);
        self
    }

    pub fn with_build(mut self, build: Build) -> Self {
        self.build = Some(build);
        self
    }

    pub(crate) fn with_original_version(mut self, original: impl Into<String>) -> Self {
        self.original = original.into();
        self
    }
}

impl From<Versionable> for Version {
    fn from(triple: Versionable) -> Self {
        Self {
            triple,
            ..Self::default()
        }
    }
}

impl Versioned for Version {
    fn versionable(&self) -> Versionable {
        self.triple
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        crate::compare::equals(self, other)
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.triple)?;
        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{}", pre_release)?;
        }
        // An empty build renders as nothing, so the separator is dropped too
        if let Some(build) = self.build.as_ref().filter(|b| !b.is_empty()) {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
