//! CLI argument parsing for hottakes.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hottakes: generate randomized hot takes from a templated word list.
///
/// Takes are template sentences such as `{person} should rewrite {thing}`;
/// each bracket group is filled with a random entry from the dataset.
#[derive(Parser, Debug)]
#[command(name = "hottakes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to use instead of `hottakes.yaml` in the working directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset file (JSON or YAML). Overrides HOTTAKES_DATA and the config file.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for hottakes.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one or more hot takes.
    ///
    /// Prints each take followed by its images, or one JSON object per
    /// take with `--json`.
    Generate(GenerateArgs),

    /// Show how many entries each dataset category holds.
    Stats,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Number of takes to generate (defaults to `count` from the config).
    #[arg(short = 'n', long)]
    pub count: Option<u32>,

    /// Print each take as a JSON object.
    #[arg(long)]
    pub json: bool,

    /// Seed the random generator for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
