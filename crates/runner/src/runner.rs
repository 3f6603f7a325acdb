// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runs the compiler under test for each manifest case.

use crate::manifest::{CaseSpec, Manifest, ManifestError};
use glslc_expect::{CaseReport, ProcessResult, SuiteSummary};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tempfile::TempDir;
use thiserror::Error;
use tokio::process::Command;

/// Default time a single compiler invocation may take
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to prepare run directory: {0}")]
    Workspace(std::io::Error),

    #[error("Failed to spawn compiler '{}': {source}", compiler.display())]
    Spawn {
        compiler: PathBuf,
        source: std::io::Error,
    },

    #[error("Compiler I/O error: {0}")]
    Io(std::io::Error),

    #[error("Compiler timed out after {0}ms")]
    Timeout(u64),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// A case that ran to completion
#[derive(Debug)]
pub struct CaseRun {
    pub report: CaseReport,
    pub status: ProcessResult,
    /// Run directory, when it was kept after the run
    pub kept_dir: Option<PathBuf>,
}

/// Outcome of one case within a suite
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CaseResult {
    Completed {
        report: CaseReport,
        #[serde(skip_serializing_if = "Option::is_none")]
        kept_dir: Option<PathBuf>,
    },
    Skipped {
        name: String,
    },
    Errored {
        name: String,
        error: String,
    },
}

impl CaseResult {
    pub fn name(&self) -> &str {
        match self {
            CaseResult::Completed { report, .. } => &report.name,
            CaseResult::Skipped { name } | CaseResult::Errored { name, .. } => name,
        }
    }
}

/// Results of every selected case in a manifest
#[derive(Debug, Serialize)]
pub struct SuiteRun {
    pub name: String,
    pub cases: Vec<CaseResult>,
    pub summary: SuiteSummary,
}

/// Compiler invocation settings shared by all cases
#[derive(Clone, Debug)]
pub struct Runner {
    compiler: PathBuf,
    timeout_ms: u64,
    keep_dirs: bool,
}

impl Runner {
    pub fn new(compiler: impl Into<PathBuf>) -> Self {
        Self {
            compiler: compiler.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            keep_dirs: false,
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Keep run directories instead of deleting them
    pub fn with_keep_dirs(mut self, keep_dirs: bool) -> Self {
        self.keep_dirs = keep_dirs;
        self
    }

    pub fn compiler(&self) -> &Path {
        &self.compiler
    }

    /// Run one case in a fresh directory and evaluate its checks.
    pub async fn run_case(
        &self,
        case: &CaseSpec,
        common_args: &[String],
    ) -> Result<CaseRun, RunError> {
        let test_case = case.test_case()?;

        let dir = TempDir::with_prefix("glslc-run-").map_err(RunError::Workspace)?;
        write_shaders(dir.path(), case).await?;

        let child = Command::new(&self.compiler)
            .args(common_args)
            .args(&case.args)
            .current_dir(dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunError::Spawn {
                compiler: self.compiler.clone(),
                source,
            })?;

        let timeout = Duration::from_millis(self.timeout_ms);
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(RunError::Io)?,
            // The child is killed when its handle drops.
            Err(_) => return Err(RunError::Timeout(self.timeout_ms)),
        };

        let status = ProcessResult::from_output(&output, dir.path(), case.input_filenames());
        let report = test_case.evaluate(&status);
        let kept_dir = self.keep_dirs.then(|| dir.keep());

        Ok(CaseRun {
            report,
            status,
            kept_dir,
        })
    }

    /// Run the cases selected by `filter`, calling `progress` after each one.
    pub async fn run_manifest(
        &self,
        manifest: &Manifest,
        filter: Option<&str>,
        mut progress: impl FnMut(&CaseResult),
    ) -> SuiteRun {
        let mut summary = SuiteSummary::default();
        let mut cases = Vec::new();

        for case in manifest.select(filter) {
            let result = if case.skip {
                summary.record_skip();
                CaseResult::Skipped {
                    name: case.name.clone(),
                }
            } else {
                match self.run_case(case, &manifest.common_args).await {
                    Ok(run) => {
                        summary.record(&run.report);
                        CaseResult::Completed {
                            report: run.report,
                            kept_dir: run.kept_dir,
                        }
                    }
                    Err(e) => {
                        summary.record_error();
                        CaseResult::Errored {
                            name: case.name.clone(),
                            error: e.to_string(),
                        }
                    }
                }
            };
            progress(&result);
            cases.push(result);
        }

        SuiteRun {
            name: manifest.name.clone(),
            cases,
            summary,
        }
    }
}

async fn write_shaders(dir: &Path, case: &CaseSpec) -> Result<(), RunError> {
    for shader in &case.shaders {
        let path = dir.join(&shader.name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(RunError::Workspace)?;
        }
        let source = shader.source.as_deref().unwrap_or_default();
        tokio::fs::write(&path, source)
            .await
            .map_err(RunError::Workspace)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
