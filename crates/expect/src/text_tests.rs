// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use serde::Deserialize;
use yare::parameterized;

#[parameterized(
    crlf = { "a\r\nb\r\n", "a\nb\n" },
    lone_cr = { "a\rb\r", "a\nb\n" },
    mixed = { "a\r\nb\r", "a\nb\n" },
    unix = { "a\nb\n", "a\nb\n" },
    empty = { "", "" },
    cr_before_crlf = { "a\r\r\n", "a\n\n" },
)]
fn normalizes_line_endings(input: &str, expected: &str) {
    assert_eq!(convert_to_unix_line_endings(input), expected);
}

#[derive(Debug, Deserialize)]
struct Holder {
    expected: ExpectedOutput,
}

#[test]
fn deserializes_true_as_non_empty() {
    let holder: Holder = toml::from_str("expected = true").unwrap();
    assert_eq!(holder.expected, ExpectedOutput::NonEmpty);
}

#[test]
fn deserializes_string_as_exact() {
    let holder: Holder = toml::from_str(r#"expected = "glslc: error\n""#).unwrap();
    assert_eq!(holder.expected, ExpectedOutput::exact("glslc: error\n"));
}

#[test]
fn rejects_false() {
    let err = toml::from_str::<Holder>("expected = false").unwrap_err();
    assert!(err.to_string().contains("use an empty string"));
}

#[test]
fn serializes_back_to_config_form() {
    let non_empty = serde_json::to_string(&ExpectedOutput::NonEmpty).unwrap();
    assert_eq!(non_empty, "true");
    let exact = serde_json::to_string(&ExpectedOutput::exact("x")).unwrap();
    assert_eq!(exact, "\"x\"");
}

proptest! {
    #[test]
    fn normalized_text_has_no_carriage_returns(input in ".*") {
        let normalized = convert_to_unix_line_endings(&input);
        prop_assert!(!normalized.contains('\r'));
    }

    #[test]
    fn normalization_is_idempotent(input in ".*") {
        let once = convert_to_unix_line_endings(&input);
        prop_assert_eq!(convert_to_unix_line_endings(&once), once.clone());
    }
}
