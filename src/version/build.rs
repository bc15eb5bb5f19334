//! Build metadata: an optional build number followed by opaque tags.

use std::fmt;

use crate::error::{Error, Result};

/// Build metadata such as `build.11.e0f985a`.
///
/// Part order is significant: it is the print order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Build {
    number: Option<u64>,
    parts: Vec<String>,
}

impl Build {
    /// Build metadata from a number and parts, validating every part.
    pub fn new<I, S>(number: Option<u64>, parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        parts
            .into_iter()
            .try_fold(Self { number, parts: Vec::new() }, |build, part| {
                build.with_part(part)
            })
    }

    /// Build metadata carrying only a build number.
    pub fn numbered(number: u64) -> Self {
        Self {
            number: Some(number),
            parts: Vec::new(),
        }
    }

    /// Append a part. Parts must be non-empty and ASCII alphanumeric.
    pub fn with_part(mut self, part: impl Into<String>) -> Result<Self> {
        let part = part.into();
        if !is_alphanumeric(&part) {
            return Err(Error::BuildPartInvalid(part));
        }
        self.parts.push(part);
        Ok(self)
    }

    pub fn number(&self) -> Option<u64> {
        self.number
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Returns `true` if there is neither a number nor any part.
    pub fn is_empty(&self) -> bool {
        self.number.is_none() && self.parts.is_empty()
    }
}

fn is_alphanumeric(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.number, self.parts.is_empty()) {
            (_, false) => {
                f.write_str("build")?;
                if let Some(number) = self.number {
                    write!(f, ".{}", number)?;
                }
                write!(f, ".{}", self.parts.join("."))
            }
            (Some(number), true) => write!(f, "build.{}", number),
            (None, true) => Ok(()),
        }
    }
}
