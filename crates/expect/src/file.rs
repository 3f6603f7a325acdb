// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Presence checks for files written by the compiler.

use crate::outcome::CheckResult;
use std::path::Path;

/// Check that `path` is an existing regular file with at least one byte.
pub fn verify_file_non_empty(path: &Path) -> CheckResult {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {
            if meta.len() == 0 {
                CheckResult::fail(format!("Empty file: {}", path.display()))
            } else {
                CheckResult::pass()
            }
        }
        _ => missing_file(path),
    }
}

pub(crate) fn missing_file(path: &Path) -> CheckResult {
    CheckResult::fail(format!("Cannot find file: {}", path.display()))
}

pub(crate) fn unreadable_file(path: &Path, err: &std::io::Error) -> CheckResult {
    CheckResult::fail(format!("Cannot read file: {}: {}", path.display(), err))
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
