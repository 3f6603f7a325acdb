// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checks over a captured compiler run.
//!
//! Every check is an independent predicate over a [`ProcessResult`]. Composite
//! checks stop at their first failing part and report only that diagnostic.

mod files;
mod output;
mod status;

pub use files::{OutputFilePreamble, OutputKind, ValidFileContents};
pub use output::{
    ErrorMessage, StderrMatch, StdoutMatch, StdoutNoWiderThan80Columns, WarningMessage,
    MAX_STDOUT_COLUMNS,
};
pub use status::{NoOutputOnStderr, NoOutputOnStdout, ReturnCodeIsZero, SuccessfulReturn};

use crate::outcome::CheckResult;
use crate::status::ProcessResult;

/// A named predicate over a compiler run.
pub trait Check: Send + Sync {
    /// Stable identifier, used in reports and to drop duplicate checks.
    fn name(&self) -> &'static str;

    /// Evaluate the check. Failures are values, never errors.
    fn evaluate(&self, status: &ProcessResult) -> CheckResult;

    /// What this instance inspects, when several checks of one name may
    /// coexist in a case (one per target file).
    fn subject(&self) -> Option<&str> {
        None
    }

    /// The configured expected value. Two checks with the same name and
    /// subject are interchangeable only when their settings are equal.
    fn setting(&self) -> Option<String> {
        None
    }
}

impl<C: Check + ?Sized> Check for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn evaluate(&self, status: &ProcessResult) -> CheckResult {
        (**self).evaluate(status)
    }

    fn subject(&self) -> Option<&str> {
        (**self).subject()
    }

    fn setting(&self) -> Option<String> {
        (**self).setting()
    }
}

/// Evaluate `checks` in order, returning the first failure or a pass.
pub(crate) fn first_failure<'a>(
    checks: impl IntoIterator<Item = &'a dyn Check>,
    status: &ProcessResult,
) -> CheckResult {
    checks
        .into_iter()
        .map(|check| check.evaluate(status))
        .find(|result| !result.passed)
        .unwrap_or_else(CheckResult::pass)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
