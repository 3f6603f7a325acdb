// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative expectations for a compiler test case.
//!
//! An expectation names a family of checks together with the values those
//! checks need, e.g. `valid_object_file_with_warning` carries the expected
//! warning text. Expectations are validated before any check runs so a bad
//! test definition is reported as a configuration error, not a test failure.

use crate::checks::{
    Check, ErrorMessage, NoOutputOnStderr, NoOutputOnStdout, OutputFilePreamble, ReturnCodeIsZero,
    StderrMatch, StdoutMatch, StdoutNoWiderThan80Columns, SuccessfulReturn, ValidFileContents,
    WarningMessage,
};
use crate::text::ExpectedOutput;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};
use thiserror::Error;

/// One expected property of a compiler run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum Expectation {
    ReturnCodeIsZero,
    NoOutputOnStdout,
    NoOutputOnStderr,
    /// Zero exit code, no stdout, no stderr.
    SuccessfulReturn,
    /// Successful run and a valid `.spv` file for every input.
    ValidObjectFile,
    /// Successful run and a valid `.s` file for every input.
    ValidAssemblyFile,
    /// Valid `.spv` files, no stdout, and exactly this warning on stderr.
    ValidObjectFileWithWarning { expected_warning: String },
    /// Valid `.s` files, no stdout, and exactly this warning on stderr.
    ValidAssemblyFileWithWarning { expected_warning: String },
    /// A file in the run directory holds exactly this text.
    ValidFileContents {
        target_filename: String,
        expected_contents: String,
    },
    ErrorMessage { expected_error: String },
    WarningMessage { expected_warning: String },
    StdoutMatch { expected: ExpectedOutput },
    StderrMatch { expected: ExpectedOutput },
    StdoutNoWiderThan80Columns,
}

/// Invalid expectation configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpectationError {
    #[error("{expectation}: {field} must not be empty")]
    EmptyField {
        expectation: &'static str,
        field: &'static str,
    },

    #[error("{expectation}: target_filename '{path}' must be a relative path inside the run directory")]
    TargetOutsideRunDirectory {
        expectation: &'static str,
        path: String,
    },

    #[error("{check}: conflicting expectations {first} and {second}")]
    Conflicting {
        check: &'static str,
        first: String,
        second: String,
    },
}

impl Expectation {
    /// The snake_case name used in configuration files.
    pub fn kind(&self) -> &'static str {
        match self {
            Expectation::ReturnCodeIsZero => "return_code_is_zero",
            Expectation::NoOutputOnStdout => "no_output_on_stdout",
            Expectation::NoOutputOnStderr => "no_output_on_stderr",
            Expectation::SuccessfulReturn => "successful_return",
            Expectation::ValidObjectFile => "valid_object_file",
            Expectation::ValidAssemblyFile => "valid_assembly_file",
            Expectation::ValidObjectFileWithWarning { .. } => "valid_object_file_with_warning",
            Expectation::ValidAssemblyFileWithWarning { .. } => "valid_assembly_file_with_warning",
            Expectation::ValidFileContents { .. } => "valid_file_contents",
            Expectation::ErrorMessage { .. } => "error_message",
            Expectation::WarningMessage { .. } => "warning_message",
            Expectation::StdoutMatch { .. } => "stdout_match",
            Expectation::StderrMatch { .. } => "stderr_match",
            Expectation::StdoutNoWiderThan80Columns => "stdout_no_wider_than_80_columns",
        }
    }

    /// Check that the configured values can ever be satisfied.
    pub fn validate(&self) -> Result<(), ExpectationError> {
        let kind = self.kind();
        match self {
            Expectation::ValidObjectFileWithWarning { expected_warning }
            | Expectation::ValidAssemblyFileWithWarning { expected_warning }
            | Expectation::WarningMessage { expected_warning } => {
                require_non_empty(kind, "expected_warning", expected_warning)
            }
            Expectation::ErrorMessage { expected_error } => {
                require_non_empty(kind, "expected_error", expected_error)
            }
            Expectation::ValidFileContents {
                target_filename, ..
            } => {
                require_non_empty(kind, "target_filename", target_filename)?;
                if !is_inside_run_directory(target_filename) {
                    return Err(ExpectationError::TargetOutsideRunDirectory {
                        expectation: kind,
                        path: target_filename.clone(),
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// The checks this expectation stands for, in evaluation order.
    pub fn checks(&self) -> Vec<Box<dyn Check>> {
        match self {
            Expectation::ReturnCodeIsZero => vec![Box::new(ReturnCodeIsZero)],
            Expectation::NoOutputOnStdout => vec![Box::new(NoOutputOnStdout)],
            Expectation::NoOutputOnStderr => vec![Box::new(NoOutputOnStderr)],
            Expectation::SuccessfulReturn => vec![Box::new(SuccessfulReturn)],
            Expectation::ValidObjectFile => vec![
                Box::new(SuccessfulReturn),
                Box::new(OutputFilePreamble::object()),
            ],
            Expectation::ValidAssemblyFile => vec![
                Box::new(SuccessfulReturn),
                Box::new(OutputFilePreamble::assembly()),
            ],
            Expectation::ValidObjectFileWithWarning { expected_warning } => vec![
                Box::new(NoOutputOnStdout),
                Box::new(OutputFilePreamble::object()),
                Box::new(WarningMessage::new(expected_warning.as_str())),
            ],
            Expectation::ValidAssemblyFileWithWarning { expected_warning } => vec![
                Box::new(NoOutputOnStdout),
                Box::new(OutputFilePreamble::assembly()),
                Box::new(WarningMessage::new(expected_warning.as_str())),
            ],
            Expectation::ValidFileContents {
                target_filename,
                expected_contents,
            } => vec![Box::new(ValidFileContents::new(
                target_filename.as_str(),
                expected_contents.as_str(),
            ))],
            Expectation::ErrorMessage { expected_error } => {
                vec![Box::new(ErrorMessage::new(expected_error.as_str()))]
            }
            Expectation::WarningMessage { expected_warning } => {
                vec![Box::new(WarningMessage::new(expected_warning.as_str()))]
            }
            Expectation::StdoutMatch { expected } => {
                vec![Box::new(StdoutMatch::new(expected.clone()))]
            }
            Expectation::StderrMatch { expected } => {
                vec![Box::new(StderrMatch::new(expected.clone()))]
            }
            Expectation::StdoutNoWiderThan80Columns => vec![Box::new(StdoutNoWiderThan80Columns)],
        }
    }
}

fn require_non_empty(
    expectation: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ExpectationError> {
    if value.is_empty() {
        return Err(ExpectationError::EmptyField { expectation, field });
    }
    Ok(())
}

fn is_inside_run_directory(path: &str) -> bool {
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
#[path = "expectation_tests.rs"]
mod tests;
