// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering for text and JSON formats.

use crate::cli::OutputFormat;
use crate::runner::{CaseResult, SuiteRun};
use glslc_expect::{CheckOutcome, SuiteSummary};
use serde::Serialize;
use similar::TextDiff;
use std::io::Write;

const INDENT: &str = "    ";

/// Every suite of a run plus the combined counts
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub suites: &'a [SuiteRun],
    pub summary: SuiteSummary,
}

impl<'a> RunReport<'a> {
    pub fn new(suites: &'a [SuiteRun]) -> Self {
        let mut summary = SuiteSummary::default();
        for suite in suites {
            summary.merge(&suite.summary);
        }
        Self { suites, summary }
    }
}

/// Report writer that handles different formats
pub struct ReportWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Write the report in the configured format
    pub fn write_report(&mut self, report: &RunReport<'_>) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => self.write_text(report),
            OutputFormat::Json => self.write_json(report),
        }
    }

    fn write_text(&mut self, report: &RunReport<'_>) -> std::io::Result<()> {
        let headers = report.suites.len() > 1;
        for suite in report.suites {
            if headers && !suite.name.is_empty() {
                writeln!(self.writer, "== {} ==", suite.name)?;
            }
            for case in &suite.cases {
                write_case(&mut self.writer, case)?;
            }
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", report.summary)
    }

    fn write_json(&mut self, report: &RunReport<'_>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(self.writer, "{}", json)
    }
}

/// Fixed-width status label for a case.
pub fn case_status(case: &CaseResult) -> &'static str {
    match case {
        CaseResult::Completed { report, .. } if report.passed() => "PASS ",
        CaseResult::Completed { .. } => "FAIL ",
        CaseResult::Skipped { .. } => "SKIP ",
        CaseResult::Errored { .. } => "ERROR",
    }
}

/// Write one case: its status line, then details for anything that went wrong.
pub fn write_case<W: Write>(writer: &mut W, case: &CaseResult) -> std::io::Result<()> {
    writeln!(writer, "{} {}", case_status(case), case.name())?;
    match case {
        CaseResult::Completed { report, kept_dir } => {
            for failure in report.failures() {
                write_failure(writer, failure)?;
            }
            if let Some(dir) = kept_dir {
                writeln!(writer, "{INDENT}kept: {}", dir.display())?;
            }
        }
        CaseResult::Errored { error, .. } => write_indented(writer, error)?,
        CaseResult::Skipped { .. } => {}
    }
    Ok(())
}

fn write_failure<W: Write>(writer: &mut W, failure: &CheckOutcome) -> std::io::Result<()> {
    writeln!(writer, "{INDENT}[{}]", failure.check)?;
    match &failure.result.mismatch {
        // The full message repeats both texts; the diff replaces them.
        Some(mismatch) => {
            let headline = failure.result.message.lines().next().unwrap_or_default();
            writeln!(writer, "{INDENT}{}", headline.trim_end())?;
            write_indented(writer, &unified_diff(&mismatch.expected, &mismatch.actual))
        }
        None => write_indented(writer, &failure.result.message),
    }
}

fn write_indented<W: Write>(writer: &mut W, text: &str) -> std::io::Result<()> {
    for line in text.lines() {
        if line.is_empty() {
            writeln!(writer)?;
        } else {
            writeln!(writer, "{INDENT}{line}")?;
        }
    }
    Ok(())
}

/// Line diff of expected against actual output.
pub fn unified_diff(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    diff.unified_diff()
        .context_radius(3)
        .header("expected", "actual")
        .to_string()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
