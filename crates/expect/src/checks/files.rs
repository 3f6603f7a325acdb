// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checks on files the compiler wrote into its run directory.

use super::Check;
use crate::file::{missing_file, unreadable_file};
use crate::filename::{assembly_filename, object_filename};
use crate::outcome::CheckResult;
use crate::preamble::{verify_assembly_file_preamble, verify_object_file_preamble};
use crate::status::ProcessResult;

/// Kind of file glslc emits per input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    /// SPIR-V binary (`-c`).
    Object,
    /// SPIR-V assembly (`-S`).
    Assembly,
}

impl OutputKind {
    /// Output filename for `source_filename`.
    pub fn filename_for(self, source_filename: &str) -> String {
        match self {
            OutputKind::Object => object_filename(source_filename),
            OutputKind::Assembly => assembly_filename(source_filename),
        }
    }
}

/// Every input produced an output file with a correct preamble.
#[derive(Clone, Copy, Debug)]
pub struct OutputFilePreamble {
    pub kind: OutputKind,
}

impl OutputFilePreamble {
    pub fn object() -> Self {
        Self {
            kind: OutputKind::Object,
        }
    }

    pub fn assembly() -> Self {
        Self {
            kind: OutputKind::Assembly,
        }
    }
}

impl Check for OutputFilePreamble {
    fn name(&self) -> &'static str {
        match self.kind {
            OutputKind::Object => "object_file_preamble",
            OutputKind::Assembly => "assembly_file_preamble",
        }
    }

    fn evaluate(&self, status: &ProcessResult) -> CheckResult {
        for input in &status.input_filenames {
            let path = status.path_of(self.kind.filename_for(input));
            let result = match self.kind {
                OutputKind::Object => verify_object_file_preamble(&path),
                OutputKind::Assembly => verify_assembly_file_preamble(&path),
            };
            if !result.passed {
                return result;
            }
        }
        CheckResult::pass()
    }
}

/// A named file in the run directory has exactly the expected text.
#[derive(Clone, Debug)]
pub struct ValidFileContents {
    pub target_filename: String,
    pub expected_contents: String,
}

impl ValidFileContents {
    pub fn new(target_filename: impl Into<String>, expected_contents: impl Into<String>) -> Self {
        Self {
            target_filename: target_filename.into(),
            expected_contents: expected_contents.into(),
        }
    }
}

impl Check for ValidFileContents {
    fn name(&self) -> &'static str {
        "file_contents"
    }

    fn evaluate(&self, status: &ProcessResult) -> CheckResult {
        let path = status.path_of(&self.target_filename);
        if !path.is_file() {
            return missing_file(&path);
        }
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => return unreadable_file(&path, &e),
        };
        if contents == self.expected_contents {
            return CheckResult::pass();
        }
        CheckResult::fail(format!(
            "Incorrect file output: \n{}\nExpected:\n{}",
            contents, self.expected_contents
        ))
        .with_mismatch(self.expected_contents.as_str(), contents)
    }

    fn subject(&self) -> Option<&str> {
        Some(&self.target_filename)
    }

    fn setting(&self) -> Option<String> {
        Some(format!("{:?}", self.expected_contents))
    }
}
