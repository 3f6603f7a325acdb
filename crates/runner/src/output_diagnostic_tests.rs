// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn render(write: impl Fn(&mut Vec<u8>)) -> String {
    let mut buf = Vec::new();
    write(&mut buf);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_plain_text_when_not_terminal() {
    let output = render(|buf| write_labeled(buf, RED, "Error: ", "no cases", false));
    assert_eq!(output, "Error: no cases\n");
}

#[test]
fn error_with_ansi_when_terminal() {
    let output = render(|buf| write_labeled(buf, RED, "Error: ", "no cases", true));
    assert_eq!(output, "\x1b[31mError: no cases\x1b[0m\n");
}

#[test]
fn warning_with_ansi_when_terminal() {
    let output = render(|buf| write_labeled(buf, YELLOW, "Warning: ", "No cases selected", true));
    assert_eq!(output, "\x1b[33mWarning: No cases selected\x1b[0m\n");
}

#[test]
fn verbose_is_unlabeled() {
    let output = render(|buf| write_labeled(buf, DIM, "", format_args!("Running {}", "a.toml"), false));
    assert_eq!(output, "Running a.toml\n");
}

#[test]
fn verbose_is_dimmed_on_terminal() {
    let output = render(|buf| write_labeled(buf, DIM, "", "PASS  a", true));
    assert_eq!(output, "\x1b[2mPASS  a\x1b[0m\n");
}

#[test]
fn path_error_is_prefixed_with_path() {
    let output = render(|buf| {
        write_path_error(
            buf,
            Path::new("cases/compile.toml"),
            "Failed to parse TOML: missing field `expect`",
            false,
        )
    });
    assert_eq!(
        output,
        "Error: cases/compile.toml: Failed to parse TOML: missing field `expect`\n"
    );
}

#[test]
fn path_error_is_red_on_terminal() {
    let output = render(|buf| write_path_error(buf, Path::new("glslc"), "not found", true));
    assert_eq!(output, "\x1b[31mError: glslc: not found\x1b[0m\n");
}
