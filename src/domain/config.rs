use std::{io, path::Path};

use serde::{Deserialize, Serialize};

use crate::domain::SortDirection;

/// Settings for a customer directory session.
///
/// Settings are stored as TOML. Customers themselves are never written to
/// disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The sort direction a session starts with.
    default_sort: SortDirection,

    /// Whether deleting a customer asks for confirmation first.
    pub confirm_delete: bool,

    /// Whether the detail view shows when a customer was added.
    pub show_created: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sort: SortDirection::default(),
            confirm_delete: default_true(),
            show_created: default_true(),
        }
    }
}

/// Errors raised when reading or writing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file: {0}")]
    Read(#[source] io::Error),

    /// The file is not valid configuration TOML.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The file could not be written.
    #[error("Failed to write config file: {0}")]
    Write(#[source] io::Error),
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(ConfigError::Write)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The sort direction a session starts with.
    #[must_use]
    pub const fn default_sort(&self) -> SortDirection {
        self.default_sort
    }

    /// Sets the sort direction a session starts with.
    pub const fn set_default_sort(&mut self, direction: SortDirection) {
        self.default_sort = direction;
    }
}

const fn default_true() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        default_sort: SortDirection,

        #[serde(default = "default_true")]
        confirm_delete: bool,

        #[serde(default = "default_true")]
        show_created: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                default_sort,
                confirm_delete,
                show_created,
            } => Self {
                default_sort,
                confirm_delete,
                show_created,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            default_sort: config.default_sort,
            confirm_delete: config.confirm_delete,
            show_created: config.show_created,
        }
    }
}
