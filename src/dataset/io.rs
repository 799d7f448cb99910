//! Dataset loading from JSON or YAML documents.

use super::Dataset;
use crate::error::{HotTakeError, Result};
use std::path::Path;
use tracing::{debug, info};

impl Dataset {
    /// Load a dataset from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML; everything else
    /// is parsed as JSON.
    ///
    /// # Returns
    ///
    /// * `Ok(Dataset)` - Successfully loaded dataset
    /// * `Err(HotTakeError::Dataset)` - Read error, parse error, or wrong entry shape
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading dataset");

        let content = std::fs::read_to_string(path).map_err(|e| {
            HotTakeError::Dataset(format!(
                "failed to read dataset file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let dataset = if is_yaml {
            Self::from_yaml(&content)?
        } else {
            Self::from_json(&content)?
        };

        info!(
            path = %path.display(),
            takes = dataset.takes.len(),
            people = dataset.people.len(),
            languages = dataset.languages.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| HotTakeError::Dataset(format!("failed to parse dataset JSON: {}", e)))
    }

    /// Parse a dataset from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| HotTakeError::Dataset(format!("failed to parse dataset YAML: {}", e)))
    }

    /// Serialize the dataset to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HotTakeError::Dataset(format!("failed to serialize dataset: {}", e)))
    }
}
