//! Configuration for hottakes.
//!
//! This module defines the Config struct that represents `hottakes.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, DATA_PATH_ENV_VAR, DEFAULT_CONFIG_FILE, DEFAULT_DATA_FILE};
