//! Convenient re-exports for common usage patterns.
//!
//! # Example
//!
//! ```
//! use semver_kit::prelude::*;
//!
//! let versions = [parse("0.1.2")?, parse("0.1.2-rc.1")?];
//! let greatest = compare::greatest(&versions)?;
//! assert_eq!(greatest.to_string(), "0.1.2");
//! # Ok::<(), semver_kit::Error>(())
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Data model
pub use crate::version::{Build, PreRelease, Version, Versionable, Versioned};

// Parsing, comparing and sorting
pub use crate::compare;
pub use crate::parser::{IntoVersion, NumberMode, ParseOptions, Parser, parse};
pub use crate::sort::{sort, sort_array, sort_with};

// JSON adapters (requires "serde" feature)
#[cfg(feature = "serde")]
pub use crate::json::{VersionSummary, base_from_value, sort_values};
