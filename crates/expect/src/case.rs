// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A named test case and the checks it runs.

use crate::checks::Check;
use crate::expectation::{Expectation, ExpectationError};
use crate::report::{CaseReport, CheckOutcome};
use crate::status::ProcessResult;

/// Ordered set of checks evaluated against one compiler run.
///
/// A check equal to one already present (same name, subject and setting) is
/// not added again, so combining expectations that share a check (say
/// `successful_return` and `valid_object_file`) evaluates it once. A check
/// that matches an existing one by name and subject but expects something
/// else is a conflict.
pub struct TestCase {
    name: String,
    checks: Vec<Box<dyn Check>>,
}

impl TestCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checks: Vec::new(),
        }
    }

    /// Build a case from expectations, validating each one first.
    pub fn from_expectations(
        name: impl Into<String>,
        expectations: &[Expectation],
    ) -> Result<Self, ExpectationError> {
        let mut case = Self::new(name);
        for expectation in expectations {
            expectation.validate()?;
            for check in expectation.checks() {
                case.push(check)?;
            }
        }
        Ok(case)
    }

    pub fn with_check(mut self, check: impl Check + 'static) -> Result<Self, ExpectationError> {
        self.push(Box::new(check))?;
        Ok(self)
    }

    fn push(&mut self, check: Box<dyn Check>) -> Result<(), ExpectationError> {
        let existing = self
            .checks
            .iter()
            .find(|c| c.name() == check.name() && c.subject() == check.subject())
            .map(|c| c.setting());
        match existing {
            None => self.checks.push(check),
            Some(first) => {
                let second = check.setting();
                if first != second {
                    return Err(ExpectationError::Conflicting {
                        check: check.name(),
                        first: first.unwrap_or_default(),
                        second: second.unwrap_or_default(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the checks in evaluation order.
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check; a failure does not stop later checks.
    pub fn evaluate(&self, status: &ProcessResult) -> CaseReport {
        let outcomes = self
            .checks
            .iter()
            .map(|check| CheckOutcome {
                check: check.name().to_string(),
                result: check.evaluate(status),
            })
            .collect();
        CaseReport::new(self.name.clone(), outcomes)
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("checks", &self.check_names())
            .finish()
    }
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
