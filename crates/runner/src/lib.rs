// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test runner for glslc.
//!
//! Reads TOML or JSON manifests of compiler invocations, runs each one in a
//! scratch directory holding the case's shader files, and evaluates the
//! case's expectations with [`glslc_expect`].

pub mod cli;
pub mod manifest;
pub mod output;
pub mod output_diagnostic;
pub mod runner;

pub use manifest::{CaseSpec, Manifest, ManifestError, ShaderSpec};
pub use runner::{CaseResult, RunError, Runner, SuiteRun};
