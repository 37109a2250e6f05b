// src/config.rs

use crate::constants::CLIENT_CONFIG_FILENAME;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the client configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    /// The config file exists but could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// A path template in the config could not be expanded.
    #[error("Failed to expand path '{path}': {message}")]
    Expand { path: String, message: String },
}

/// Connection settings for the simulator transport.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 11_000,
        }
    }
}

/// Settings for the persistent key/value store.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Store file path template. Supports `~` and environment variables;
    /// `None` means the platform default location.
    pub path: Option<String>,
}

/// The client configuration (`skystack.toml`).
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub connection: ConnectionConfig,
    pub storage: StorageConfig,
}

impl ClientConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, the default
    /// location (`<config dir>/skystack/skystack.toml`) is tried and a
    /// missing file simply yields the defaults — only a present-but-broken
    /// file is an error, so a typo never degrades silently.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, must_exist) = match path {
            Some(explicit) => (explicit.to_path_buf(), true),
            None => (default_config_path()?, false),
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if !must_exist && e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config file at '{}', using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        };

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// The expanded store file path, when the config overrides the default
    /// location.
    pub fn store_path(&self) -> Result<Option<PathBuf>, ConfigError> {
        let Some(template) = &self.storage.path else {
            return Ok(None);
        };
        let expanded = shellexpand::full(template).map_err(|e| ConfigError::Expand {
            path: template.clone(),
            message: e.to_string(),
        })?;
        Ok(Some(PathBuf::from(expanded.into_owned())))
    }
}

/// Returns the default config file path (`<config dir>/skystack/skystack.toml`).
fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("skystack");
    Ok(dir.join(CLIENT_CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn full_file_parses_every_section() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skystack.toml");
        fs::write(
            &path,
            "[connection]\nhost = \"sim.example\"\nport = 11500\n\n[storage]\npath = \"/tmp/skystack-store.json\"\n",
        )
        .unwrap();

        let config = ClientConfig::load(Some(&path)).unwrap();
        assert_eq!(config.connection.host, "sim.example");
        assert_eq!(config.connection.port, 11_500);
        assert_eq!(
            config.store_path().unwrap(),
            Some(PathBuf::from("/tmp/skystack-store.json"))
        );
    }

    #[test]
    fn partial_file_falls_back_to_defaults_per_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skystack.toml");
        fs::write(&path, "[connection]\nhost = \"sim.example\"\n").unwrap();

        let config = ClientConfig::load(Some(&path)).unwrap();
        assert_eq!(config.connection.host, "sim.example");
        assert_eq!(config.connection.port, 11_000);
        assert_eq!(config.store_path().unwrap(), None);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let result = ClientConfig::load(Some(Path::new("/nonexistent/skystack.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skystack.toml");
        fs::write(&path, "connection = 5").unwrap();

        let result = ClientConfig::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
