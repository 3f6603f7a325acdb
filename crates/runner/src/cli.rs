// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing for the test runner.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::runner::DEFAULT_TIMEOUT_MS;

/// Run glslc test manifests and check the compiler's behavior
#[derive(Parser, Debug, Clone)]
#[command(name = "glslc-runner", version)]
pub struct Cli {
    /// Manifest files (TOML or JSON)
    #[arg(value_name = "MANIFEST", required = true)]
    pub manifests: Vec<PathBuf>,

    /// Compiler under test
    #[arg(long, env = "GLSLC", default_value = "glslc")]
    pub glslc: PathBuf,

    /// Only run cases whose name contains this substring
    #[arg(long)]
    pub filter: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Per-case compiler timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Keep each case's run directory and print its path
    #[arg(long)]
    pub keep_dir: bool,

    /// Print progress to stderr as cases finish
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
