// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured result of one compiler invocation.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Output;

/// Return code reported for a process that exited without one (killed by a signal).
pub const SIGNALED_RETURN_CODE: i32 = -1;

/// Snapshot of a finished compiler run.
///
/// Produced once per invocation by the harness and only ever read by checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessResult {
    pub returncode: i32,
    pub stdout: String,
    pub stderr: String,
    /// Directory the compiler ran in; output files are looked up relative to it.
    pub directory: PathBuf,
    /// Source files handed to the compiler, in command-line order.
    pub input_filenames: Vec<String>,
}

impl ProcessResult {
    /// A successful run in `directory` with no output and no inputs.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            returncode: 0,
            stdout: String::new(),
            stderr: String::new(),
            directory: directory.into(),
            input_filenames: Vec::new(),
        }
    }

    /// Build a result from a captured [`Output`], decoding streams lossily.
    pub fn from_output(
        output: &Output,
        directory: impl Into<PathBuf>,
        input_filenames: Vec<String>,
    ) -> Self {
        Self {
            returncode: output.status.code().unwrap_or(SIGNALED_RETURN_CODE),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            directory: directory.into(),
            input_filenames,
        }
    }

    pub fn with_returncode(mut self, returncode: i32) -> Self {
        self.returncode = returncode;
        self
    }

    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self
    }

    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    pub fn with_input(mut self, filename: impl Into<String>) -> Self {
        self.input_filenames.push(filename.into());
        self
    }

    /// Path of `filename` inside the run directory.
    pub fn path_of(&self, filename: impl AsRef<Path>) -> PathBuf {
        self.directory.join(filename)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
