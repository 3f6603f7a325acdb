// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reports of evaluated test cases.

use crate::outcome::CheckResult;
use serde::Serialize;

/// Result of one named check within a case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub check: String,
    #[serde(flatten)]
    pub result: CheckResult,
}

/// All check outcomes for one case, in evaluation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub passed: bool,
    pub outcomes: Vec<CheckOutcome>,
}

impl CaseReport {
    pub fn new(name: impl Into<String>, outcomes: Vec<CheckOutcome>) -> Self {
        let passed = outcomes.iter().all(|o| o.result.passed);
        Self {
            name: name.into(),
            passed,
            outcomes,
        }
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Outcomes of the checks that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.result.passed)
    }
}

/// Pass/fail/error counts over a run of cases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SuiteSummary {
    pub passed: usize,
    pub failed: usize,
    /// Cases that could not be run at all.
    pub errored: usize,
    pub skipped: usize,
}

impl SuiteSummary {
    pub fn record(&mut self, report: &CaseReport) {
        if report.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn record_error(&mut self) {
        self.errored += 1;
    }

    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Add another summary's counts to this one.
    pub fn merge(&mut self, other: &SuiteSummary) {
        self.passed += other.passed;
        self.failed += other.failed;
        self.errored += other.errored;
        self.skipped += other.skipped;
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errored + self.skipped
    }

    /// No case failed or errored.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}

impl std::fmt::Display for SuiteSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} errored, {} skipped",
            self.passed, self.failed, self.errored, self.skipped
        )
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
