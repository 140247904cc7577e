//! Errors raised while reading or converting scenarios.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use tether_engine::ConfigError;
use tether_space::SpaceError;

/// Errors from scenario loading and conversion.
#[derive(Debug)]
pub enum ScenarioError {
    /// The scenario file could not be read.
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// TOML text did not describe a scenario.
    Toml(toml::de::Error),
    /// A scenario could not be written as TOML.
    TomlWrite(toml::ser::Error),
    /// A line of the legacy text format is malformed.
    Legacy {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// The described grid is invalid.
    Space(SpaceError),
    /// The described run configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Toml(e) => write!(f, "invalid scenario TOML: {e}"),
            Self::TomlWrite(e) => write!(f, "cannot serialise scenario: {e}"),
            Self::Legacy { line, reason } => write!(f, "line {line}: {reason}"),
            Self::Space(e) => write!(f, "invalid grid: {e}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl Error for ScenarioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Toml(e) => Some(e),
            Self::TomlWrite(e) => Some(e),
            Self::Space(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Legacy { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ScenarioError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<toml::ser::Error> for ScenarioError {
    fn from(e: toml::ser::Error) -> Self {
        Self::TomlWrite(e)
    }
}

impl From<SpaceError> for ScenarioError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ConfigError> for ScenarioError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
