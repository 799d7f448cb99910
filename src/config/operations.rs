//! Config loading, validation, and path resolution.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{HotTakeError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(HotTakeError::Config)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            HotTakeError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for this run.
    ///
    /// An explicit path must exist. Without one, `hottakes.yaml` in the
    /// working directory is used if present, and defaults otherwise.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit config");
            return Self::load(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            debug!(path = DEFAULT_CONFIG_FILE, "loading config from working directory");
            Self::load(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| HotTakeError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `data_path` must be non-empty
    /// - `count` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.data_path.trim().is_empty() {
            return Err(HotTakeError::Config(
                "config validation failed: data_path must not be empty".to_string(),
            ));
        }

        if self.count == 0 {
            return Err(HotTakeError::Config(
                "config validation failed: count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Pick the dataset path: `flag`, then `env`, then `data_path`.
    ///
    /// `env` is the value of [`super::DATA_PATH_ENV_VAR`]; empty values are ignored.
    pub fn resolve_data_path(&self, flag: Option<&Path>, env: Option<OsString>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        match env {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => PathBuf::from(&self.data_path),
        }
    }
}
