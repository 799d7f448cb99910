//! Command implementations for hottakes.
//!
//! This module provides the dispatcher that loads config and dataset once,
//! then routes the CLI command to its implementation.

mod generate;
mod stats;

use crate::cli::{Cli, Command};
use crate::config::{Config, DATA_PATH_ENV_VAR};
use crate::dataset::Dataset;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?;
    let data_path =
        config.resolve_data_path(cli.data.as_deref(), std::env::var_os(DATA_PATH_ENV_VAR));
    let dataset = Dataset::load(&data_path)?;

    match cli.command {
        Command::Generate(args) => generate::cmd_generate(args, &config, dataset),
        Command::Stats => stats::cmd_stats(&dataset),
    }
}
