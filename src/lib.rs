//! Version string parsing, ordering, sorting and incrementing.
//!
//! Versions have the form `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`, where the
//! pre-release is either a greek tag with a release number (`beta.2`) or a
//! triple of its own (`0.1.2`), and the build is an optional number followed
//! by alphanumeric tags (`build.11.e0f985a`).
//!
//! # Quick Start
//!
//! ```
//! use semver_kit::prelude::*;
//!
//! let current = parse("1.0.0-beta.0")?;
//! let release = parse("1.0.0")?;
//!
//! assert!(compare::greater_than(&release, &current));
//! assert_eq!(current.next_from("1.0.0-beta.0")?.to_string(), "1.0.0-beta.1");
//!
//! let sorted = sort(["2.0.2", "0.0.1", "0.0.1-alpha.0"])?;
//! assert_eq!(sorted.first().map(ToString::to_string).as_deref(), Some("0.0.1-alpha.0"));
//! # Ok::<(), semver_kit::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`version`] - Data model: [`Version`], [`PreRelease`], [`Build`], [`Versionable`]
//! - [`parser`] - Grammar and staged parsing into a [`Version`]
//! - [`compare`] - Equality, ordering and "greatest of"
//! - [`sort`](mod@sort) - Quicksort over the [`compare`] ordering
//! - [`json`] - Serde support and JSON input adapters (requires `serde` feature)
//!
//! # Feature Flags
//!
//! - `serde` - Serialize versions as strings, JSON adapters for sort/next
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the command-line interface binary
//! - `full` - Enable all features

#[cfg(feature = "cli")]
pub mod cli;
pub mod compare;
#[cfg(feature = "serde")]
pub mod json;
mod logging;
mod next;
pub mod parser;
pub mod prelude;
pub mod sort;
pub mod version;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export the data model and entry points at crate root for convenience
pub use parser::{IntoVersion, NumberMode, ParseOptions, Parser, parse};
pub use sort::{sort, sort_array, sort_with};
pub use version::{Build, PreRelease, Version, Versionable, Versioned};
