// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pass/fail result of a single check.

use serde::Serialize;

/// Expected and actual text of a failed comparison, kept for diff rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub expected: String,
    pub actual: String,
}

/// Outcome of evaluating one check.
///
/// `message` is empty when the check passed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub passed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<Mismatch>,
}

impl CheckResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
            mismatch: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            mismatch: None,
        }
    }

    /// Attach the compared texts to a failed result.
    pub fn with_mismatch(mut self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        self.mismatch = Some(Mismatch {
            expected: expected.into(),
            actual: actual.into(),
        });
        self
    }

    /// The `(passed, message)` pair.
    pub fn as_tuple(&self) -> (bool, &str) {
        (self.passed, &self.message)
    }
}

impl From<CheckResult> for (bool, String) {
    fn from(result: CheckResult) -> Self {
        (result.passed, result.message)
    }
}
