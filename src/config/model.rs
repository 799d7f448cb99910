//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "hottakes.yaml";

/// Dataset file used when nothing else names one.
pub const DEFAULT_DATA_FILE: &str = "hotTakeData.json";

/// Environment variable that overrides the configured dataset path.
pub const DATA_PATH_ENV_VAR: &str = "HOTTAKES_DATA";

/// Configuration for hottakes.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the dataset file, relative to the working directory.
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Number of takes to generate per invocation.
    #[serde(default = "default_count")]
    pub count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            count: default_count(),
        }
    }
}

fn default_data_path() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_count() -> u32 {
    1
}
