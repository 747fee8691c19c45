//! Engine configuration, stored in the OS-standard config directory:
//! - Windows: %APPDATA%\seal\config.toml
//! - macOS: ~/Library/Application Support/seal/config.toml
//! - Linux: ~/.config/seal/config.toml
//!
//! Persisted state is not part of the source playback subsystem's contract
//! (§6: "Persisted state: none"); this config only carries ambient defaults
//! (device name, default queue/chunk size, log filter) and is entirely
//! optional — absence of a file just means built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::source::{DEFAULT_CHUNK_SIZE, DEFAULT_QUEUE_SIZE};

/// Engine-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Output device name to request at startup. `None` means "default".
    pub device_name: Option<String>,

    /// Default `queue_size` newly initialized sources are given.
    pub default_queue_size: u8,

    /// Default `chunk_size` newly initialized sources are given.
    pub default_chunk_size: u32,

    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            device_name: None,
            default_queue_size: DEFAULT_QUEUE_SIZE,
            default_chunk_size: DEFAULT_CHUNK_SIZE,
            log_filter: "seal=info".to_string(),
        }
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("seal"))
}

/// Get the full path to the config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

impl EngineConfig {
    /// Load configuration from disk, falling back to defaults if the
    /// directory can't be determined, the file doesn't exist, or it fails to
    /// parse. Never fails — this is an ambient convenience, not part of the
    /// source subsystem's contract.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            tracing::warn!("could not determine config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::info!(?path, "no config file found, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(?path, "loaded engine config");
                    config
                }
                Err(e) => {
                    tracing::error!(?path, error = %e, "failed to parse config file");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::error!(?path, error = %e, "failed to read config file");
                Self::default()
            }
        }
    }

    /// Save configuration to disk, creating the config directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
        let path = dir.join("config.toml");

        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::CreateDir(dir.clone(), e))?;

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        let temp_path = path.with_extension("toml.tmp");
        std::fs::write(&temp_path, &contents)
            .map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
        std::fs::rename(&temp_path, &path)
            .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

        tracing::info!(?path, "saved engine config");
        Ok(())
    }
}

/// Configuration errors. Kept separate from [`crate::error::SealError`]:
/// config I/O is an ambient concern, not a device/source failure kind.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(toml::ser::Error),
    #[error("failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),
    #[error("failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = EngineConfig::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("default_queue_size"));
        assert!(toml.contains("default_chunk_size"));
    }

    #[test]
    fn config_roundtrip() {
        let mut config = EngineConfig::default();
        config.device_name = Some("Speakers".to_string());
        config.default_queue_size = 5;

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: EngineConfig = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.device_name, Some("Speakers".to_string()));
        assert_eq!(parsed.default_queue_size, 5);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let toml = r#"
device_name = "Custom Device"
"#;
        let config: EngineConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.device_name, Some("Custom Device".to_string()));
        assert_eq!(config.default_queue_size, DEFAULT_QUEUE_SIZE);
        assert_eq!(config.default_chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn load_with_missing_directory_falls_back_to_defaults() {
        // Can't easily force `dirs::config_dir()` to None, but we can assert
        // that the defaults themselves satisfy the clamp invariants the
        // source module expects.
        let config = EngineConfig::default();
        assert!((2..=63).contains(&(config.default_queue_size as i32)));
        assert_eq!(config.default_chunk_size % 9216, 0);
    }
}
