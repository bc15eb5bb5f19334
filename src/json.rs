//! Serde support and JSON input adapters.
//!
//! [`Version`] serializes as its canonical string and deserializes by
//! parsing. The adapters accept loosely typed JSON input, where elements
//! that are neither strings nor versions can actually show up.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::parser::Parser;
use crate::sort::sort_array;
use crate::version::{PreRelease, Version};

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let input = String::deserialize(deserializer)?;
        crate::parser::parse(&input).map_err(serde::de::Error::custom)
    }
}

/// Structural view of a version, as printed by `semver-kit parse --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionSummary {
    pub version: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_release: Option<PreReleaseSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildSummary>,
    pub original: String,
}

/// Pre-release part of a [`VersionSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PreReleaseSummary {
    Versionable { major: u64, minor: u64, patch: u64 },
    Greek { greek: String, release_number: u64 },
}

/// Build part of a [`VersionSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub number: Option<u64>,
    pub parts: Vec<String>,
}

impl From<&Version> for VersionSummary {
    fn from(version: &Version) -> Self {
        Self {
            version: version.to_string(),
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre_release: version.pre_release().map(|pre_release| match pre_release {
                PreRelease::Versionable(triple) => PreReleaseSummary::Versionable {
                    major: triple.major,
                    minor: triple.minor,
                    patch: triple.patch,
                },
                PreRelease::Greek {
                    greek,
                    release_number,
                } => PreReleaseSummary::Greek {
                    greek: greek.clone(),
                    release_number: *release_number,
                },
            }),
            build: version.build().map(|build| BuildSummary {
                number: build.number(),
                parts: build.parts().to_vec(),
            }),
            original: version.original_version().to_string(),
        }
    }
}

/// Sort a JSON array of version strings.
///
/// Anything other than an array of strings fails with
/// [`Error::UnsortableElement`].
pub fn sort_values(parser: &Parser, value: &Value) -> Result<Vec<Version>> {
    let Value::Array(items) = value else {
        return Err(Error::UnsortableElement(value.to_string()));
    };

    let versions = items
        .iter()
        .map(|item| match item {
            Value::String(input) => parser.parse(input),
            other => Err(Error::UnsortableElement(other.to_string())),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(sort_array(versions))
}

/// Interpret a JSON value as the base of [`Version::next_from`].
///
/// `null`, `false` and `""` mean no base; a string is parsed; anything else
/// fails with [`Error::InvalidBaseType`].
pub fn base_from_value(parser: &Parser, value: &Value) -> Result<Option<Version>> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::String(input) if input.is_empty() => Ok(None),
        Value::String(input) => parser.parse(input).map(Some),
        other => Err(Error::InvalidBaseType(other.to_string())),
    }
}
