use std::cmp::Ordering;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser as ClapParser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use semver_kit::cli::{Config, ConfigError, LoggingError, OutputFormat};
use semver_kit::json::{VersionSummary, sort_values};
use semver_kit::{Error as VersionError, NumberMode, Parser, Version, compare, sort_array};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Version(#[from] VersionError),
}

#[derive(ClapParser)]
#[command(name = "semver-kit")]
#[command(about = "Parse, compare, sort and increment MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD] versions")]
struct Cli {
    /// Path to the configuration file (defaults to ./semver-kit.toml if present)
    #[arg(long, global = true, env = "SEMVER_KIT_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "semver_kit=trace" (overrides the config file)
    #[arg(long, global = true, env = "SEMVER_KIT_LOG")]
    log_level: Option<String>,

    /// Print results as JSON (overrides the config file)
    #[arg(long, global = true)]
    json: bool,

    /// Coerce non-numeric triple fields to numbers instead of rejecting them
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a version and print its structure
    Parse {
        /// Version string to parse
        version: String,
    },

    /// Compare two versions, printing whether A is equal, greater or smaller than B
    Compare {
        /// Left-hand version
        a: String,

        /// Right-hand version
        b: String,
    },

    /// Print the greatest of the given versions
    Greatest {
        /// Versions to consider
        versions: Vec<String>,
    },

    /// Sort versions in ascending order
    Sort {
        /// Versions to sort
        #[arg(group = "input")]
        versions: Vec<String>,

        /// Read a JSON array of version strings from a file
        #[arg(long, group = "input")]
        json_file: Option<PathBuf>,

        /// Print in descending order
        #[arg(long)]
        reverse: bool,
    },

    /// Print the version following CURRENT
    Next {
        /// Current version
        current: String,

        /// Base version to increment relative to (an empty string means none)
        #[arg(long)]
        base: Option<String>,
    },

    /// Print a version without its build metadata
    Clean {
        /// Version string to clean
        version: String,
    },
}

#[derive(Serialize)]
struct Comparison<'a> {
    a: &'a Version,
    b: &'a Version,
    result: &'static str,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).map_err(AppError::from)?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    if cli.lenient {
        config.parser.numbers = NumberMode::Lenient;
    }

    semver_kit::cli::logging::init(&config.logging).map_err(AppError::from)?;

    let parser = config.parser();
    let format = config.output.format;

    run(cli.command, &parser, format)?;
    Ok(())
}

fn run(command: Commands, parser: &Parser, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        Commands::Parse { version } => {
            let version = parse(parser, &version)?;
            match format {
                OutputFormat::Json => print_json(&VersionSummary::from(&version))?,
                OutputFormat::Text => {
                    println!("version:     {}", version);
                    println!("major:       {}", version.major());
                    println!("minor:       {}", version.minor());
                    println!("patch:       {}", version.patch());
                    if let Some(pre_release) = version.pre_release() {
                        println!("pre-release: {}", pre_release);
                    }
                    if let Some(build) = version.build() {
                        println!("build:       {}", build);
                    }
                    println!("original:    {}", version.original_version());
                }
            }
        }
        Commands::Compare { a, b } => {
            let a = parse(parser, &a)?;
            let b = parse(parser, &b)?;
            let result = match compare::ordering(&a, &b) {
                Ordering::Equal => "equal",
                Ordering::Greater => "greater",
                Ordering::Less => "smaller",
            };
            match format {
                OutputFormat::Json => print_json(&Comparison {
                    a: &a,
                    b: &b,
                    result,
                })?,
                OutputFormat::Text => println!("{}", result),
            }
        }
        Commands::Greatest { versions } => {
            let versions = versions
                .iter()
                .map(|version| parse(parser, version))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let greatest = compare::greatest(&versions).map_err(AppError::from)?;
            print_versions(format, std::slice::from_ref(greatest))?;
        }
        Commands::Sort {
            versions,
            json_file,
            reverse,
        } => {
            let mut sorted = match json_file {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)
                        .map_err(AppError::from)
                        .with_context(|| format!("reading {}", path.display()))?;
                    let value: serde_json::Value =
                        serde_json::from_str(&content).map_err(AppError::from)?;
                    sort_values(parser, &value).map_err(AppError::from)?
                }
                None => {
                    let versions = versions
                        .iter()
                        .map(|version| parse(parser, version))
                        .collect::<anyhow::Result<Vec<_>>>()?;
                    sort_array(versions)
                }
            };
            if reverse {
                sorted.reverse();
            }
            print_versions(format, &sorted)?;
        }
        Commands::Next { current, base } => {
            let current = parse(parser, &current)?;
            let next = match base.as_deref() {
                None | Some("") => current.next().map_err(AppError::from)?,
                Some(base) => {
                    let base = parse(parser, base)?;
                    current.next_from(&base).map_err(AppError::from)?
                }
            };
            print_versions(format, std::slice::from_ref(&next))?;
        }
        Commands::Clean { version } => {
            let version = parse(parser, &version)?;
            print_versions(format, std::slice::from_ref(&version.clean_copy()))?;
        }
    }
    Ok(())
}

fn parse(parser: &Parser, input: &str) -> anyhow::Result<Version> {
    parser
        .parse(input)
        .map_err(AppError::from)
        .with_context(|| format!("parsing version '{}'", input))
}

fn print_versions(format: OutputFormat, versions: &[Version]) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&versions)?,
        OutputFormat::Text => {
            for version in versions {
                println!("{}", version);
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(AppError::from)?;
    println!("{}", json);
    Ok(())
}
