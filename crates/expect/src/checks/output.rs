// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checks on the content of stdout and stderr.

use super::Check;
use crate::outcome::CheckResult;
use crate::status::ProcessResult;
use crate::text::{convert_to_unix_line_endings, ExpectedOutput};

/// Widest stdout line accepted by [`StdoutNoWiderThan80Columns`].
pub const MAX_STDOUT_COLUMNS: usize = 80;

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn label(self) -> &'static str {
        match self {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }

    fn of(self, status: &ProcessResult) -> &str {
        match self {
            Stream::Stdout => &status.stdout,
            Stream::Stderr => &status.stderr,
        }
    }
}

fn match_stream(stream: Stream, expected: &ExpectedOutput, status: &ProcessResult) -> CheckResult {
    let actual = stream.of(status);
    match expected {
        ExpectedOutput::NonEmpty => {
            if actual.is_empty() {
                return CheckResult::fail(format!("Expected something on {}", stream.label()));
            }
            CheckResult::pass()
        }
        ExpectedOutput::Exact(expected) => compare_exact(stream, expected, actual),
    }
}

fn describe(expected: &ExpectedOutput) -> String {
    match expected {
        ExpectedOutput::NonEmpty => "non-empty output".to_string(),
        ExpectedOutput::Exact(text) => format!("{text:?}"),
    }
}

fn compare_exact(stream: Stream, expected: &str, actual: &str) -> CheckResult {
    let normalized = convert_to_unix_line_endings(actual);
    if normalized == expected {
        return CheckResult::pass();
    }
    CheckResult::fail(format!(
        "Incorrect {} output:\n{}\nExpected:\n{}",
        stream.label(),
        actual,
        expected
    ))
    .with_mismatch(expected, normalized)
}

/// Stdout is non-empty or matches exactly, depending on the expectation.
#[derive(Clone, Debug)]
pub struct StdoutMatch {
    pub expected: ExpectedOutput,
}

impl StdoutMatch {
    pub fn new(expected: ExpectedOutput) -> Self {
        Self { expected }
    }
}

impl Check for StdoutMatch {
    fn name(&self) -> &'static str {
        "stdout_match"
    }

    fn evaluate(&self, status: &ProcessResult) -> CheckResult {
        match_stream(Stream::Stdout, &self.expected, status)
    }

    fn setting(&self) -> Option<String> {
        Some(describe(&self.expected))
    }
}

/// Stderr is non-empty or matches exactly, depending on the expectation.
#[derive(Clone, Debug)]
pub struct StderrMatch {
    pub expected: ExpectedOutput,
}

impl StderrMatch {
    pub fn new(expected: ExpectedOutput) -> Self {
        Self { expected }
    }
}

impl Check for StderrMatch {
    fn name(&self) -> &'static str {
        "stderr_match"
    }

    fn evaluate(&self, status: &ProcessResult) -> CheckResult {
        match_stream(Stream::Stderr, &self.expected, status)
    }

    fn setting(&self) -> Option<String> {
        Some(describe(&self.expected))
    }
}

/// The compiler failed and printed exactly the expected error.
#[derive(Clone, Debug)]
pub struct ErrorMessage {
    pub expected_error: String,
}

impl ErrorMessage {
    pub fn new(expected_error: impl Into<String>) -> Self {
        Self {
            expected_error: expected_error.into(),
        }
    }
}

impl Check for ErrorMessage {
    fn name(&self) -> &'static str {
        "has_error_message"
    }

    fn evaluate(&self, status: &ProcessResult) -> CheckResult {
        if status.returncode == 0 {
            return CheckResult::fail("Expected error message, but returned success from glslc");
        }
        if status.stderr.is_empty() {
            return CheckResult::fail("Expected error message, but no output on stderr");
        }
        compare_exact(Stream::Stderr, &self.expected_error, &status.stderr)
    }

    fn setting(&self) -> Option<String> {
        Some(format!("{:?}", self.expected_error))
    }
}

/// The compiler succeeded and printed exactly the expected warning.
#[derive(Clone, Debug)]
pub struct WarningMessage {
    pub expected_warning: String,
}

impl WarningMessage {
    pub fn new(expected_warning: impl Into<String>) -> Self {
        Self {
            expected_warning: expected_warning.into(),
        }
    }
}

impl Check for WarningMessage {
    fn name(&self) -> &'static str {
        "has_warning_message"
    }

    fn evaluate(&self, status: &ProcessResult) -> CheckResult {
        if status.returncode != 0 {
            return CheckResult::fail("Expected warning message, but returned failure from glslc");
        }
        if status.stderr.is_empty() {
            return CheckResult::fail("Expected warning message, but no output on stderr");
        }
        compare_exact(Stream::Stderr, &self.expected_warning, &status.stderr)
    }

    fn setting(&self) -> Option<String> {
        Some(format!("{:?}", self.expected_warning))
    }
}

/// No stdout line is wider than [`MAX_STDOUT_COLUMNS`] characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutNoWiderThan80Columns;

impl Check for StdoutNoWiderThan80Columns {
    fn name(&self) -> &'static str {
        "stdout_not_too_wide"
    }

    fn evaluate(&self, status: &ProcessResult) -> CheckResult {
        if status.stdout.is_empty() {
            return CheckResult::pass();
        }
        let normalized = convert_to_unix_line_endings(&status.stdout);
        match normalized
            .lines()
            .find(|line| line.chars().count() > MAX_STDOUT_COLUMNS)
        {
            Some(line) => CheckResult::fail(format!(
                "Stdout line longer than {MAX_STDOUT_COLUMNS} columns: {line}"
            )),
            None => CheckResult::pass(),
        }
    }
}
