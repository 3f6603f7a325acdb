// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text helpers for comparing captured compiler output.

use serde::{Deserialize, Serialize};

/// Rewrite `\r\n` and lone `\r` line endings as `\n`.
pub fn convert_to_unix_line_endings(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\r', "\n")
}

/// What a stream is expected to contain.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawExpectedOutput", into = "RawExpectedOutput")]
pub enum ExpectedOutput {
    /// Anything at all, as long as the stream is not empty.
    NonEmpty,
    /// Exactly this text after line endings are normalized.
    Exact(String),
}

impl ExpectedOutput {
    pub fn exact(text: impl Into<String>) -> Self {
        Self::Exact(text.into())
    }
}

/// Config-file form: `true` for non-empty, a string for an exact match.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
enum RawExpectedOutput {
    Flag(bool),
    Text(String),
}

impl TryFrom<RawExpectedOutput> for ExpectedOutput {
    type Error = String;

    fn try_from(raw: RawExpectedOutput) -> Result<Self, Self::Error> {
        match raw {
            RawExpectedOutput::Flag(true) => Ok(Self::NonEmpty),
            RawExpectedOutput::Flag(false) => Err(
                "expected output must be `true` or a string; use an empty string to expect no output"
                    .to_string(),
            ),
            RawExpectedOutput::Text(text) => Ok(Self::Exact(text)),
        }
    }
}

impl From<ExpectedOutput> for RawExpectedOutput {
    fn from(expected: ExpectedOutput) -> Self {
        match expected {
            ExpectedOutput::NonEmpty => Self::Flag(true),
            ExpectedOutput::Exact(text) => Self::Text(text),
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
