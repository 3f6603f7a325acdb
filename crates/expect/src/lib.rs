// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result checks for glslc command-line tests.
//!
//! Each check inspects one [`ProcessResult`] (exit code, captured output, the
//! scratch directory and the shader files that were compiled) and returns a
//! [`CheckResult`]. Checks never fail with an error: a wrong exit code, a
//! missing object file or a malformed SPIR-V header are all reported as
//! ordinary failed results so several checks can run against one invocation.
//!
//! Test cases are usually declared with [`Expectation`]s, which expand into
//! the checks a case needs, and evaluated into a [`CaseReport`].

pub mod case;
pub mod checks;
pub mod expectation;
pub mod file;
pub mod filename;
pub mod outcome;
pub mod preamble;
pub mod report;
pub mod status;
pub mod text;

pub use case::TestCase;
pub use checks::Check;
pub use expectation::{Expectation, ExpectationError};
pub use outcome::{CheckResult, Mismatch};
pub use report::{CaseReport, CheckOutcome, SuiteSummary};
pub use status::ProcessResult;
pub use text::ExpectedOutput;
