// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exit code and empty-stream checks.

use super::{first_failure, Check};
use crate::outcome::CheckResult;
use crate::status::ProcessResult;

/// The compiler exited with code zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReturnCodeIsZero;

impl Check for ReturnCodeIsZero {
    fn name(&self) -> &'static str {
        "return_code_is_zero"
    }

    fn evaluate(&self, status: &ProcessResult) -> CheckResult {
        if status.returncode != 0 {
            return CheckResult::fail(format!("Non-zero return code: {}\n", status.returncode));
        }
        CheckResult::pass()
    }
}

/// Nothing was written to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOutputOnStdout;

impl Check for NoOutputOnStdout {
    fn name(&self) -> &'static str {
        "no_output_on_stdout"
    }

    fn evaluate(&self, status: &ProcessResult) -> CheckResult {
        if !status.stdout.is_empty() {
            return CheckResult::fail(format!("Non empty stdout: {}\n", status.stdout));
        }
        CheckResult::pass()
    }
}

/// Nothing was written to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOutputOnStderr;

impl Check for NoOutputOnStderr {
    fn name(&self) -> &'static str {
        "no_output_on_stderr"
    }

    fn evaluate(&self, status: &ProcessResult) -> CheckResult {
        if !status.stderr.is_empty() {
            return CheckResult::fail(format!("Non empty stderr: {}\n", status.stderr));
        }
        CheckResult::pass()
    }
}

/// Zero exit code and both streams empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuccessfulReturn;

impl Check for SuccessfulReturn {
    fn name(&self) -> &'static str {
        "successful_return"
    }

    fn evaluate(&self, status: &ProcessResult) -> CheckResult {
        first_failure(
            [
                &ReturnCodeIsZero as &dyn Check,
                &NoOutputOnStdout,
                &NoOutputOnStderr,
            ],
            status,
        )
    }
}
