//! Support code for the `semver-kit` command-line interface.
//!
//! Configuration is read from an optional TOML file and logging goes
//! through a `tracing-subscriber` registry on stderr.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, LogFormat, LoggingConfig, OutputFormat};
pub use logging::LoggingError;
