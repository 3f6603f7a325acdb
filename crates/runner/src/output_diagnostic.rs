// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output on stderr for the runner.
//!
//! Errors are red and warnings yellow when stderr is a terminal; progress
//! lines are dimmed. Piped stderr gets plain text.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Print an error message to stderr.
pub fn print_error(msg: impl Display) {
    write_labeled(&mut io::stderr(), RED, "Error: ", msg, stderr_is_terminal());
}

/// Print an error about a file the runner was given (manifest or compiler).
pub fn print_path_error(path: &Path, err: impl Display) {
    write_path_error(&mut io::stderr(), path, err, stderr_is_terminal());
}

fn write_path_error<W: Write>(writer: &mut W, path: &Path, err: impl Display, is_terminal: bool) {
    write_labeled(
        writer,
        RED,
        "Error: ",
        format_args!("{}: {}", path.display(), err),
        is_terminal,
    );
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl Display) {
    write_labeled(&mut io::stderr(), YELLOW, "Warning: ", msg, stderr_is_terminal());
}

/// Print a progress line to stderr. Only called under `--verbose`.
pub fn print_verbose(msg: impl Display) {
    write_labeled(&mut io::stderr(), DIM, "", msg, stderr_is_terminal());
}

fn stderr_is_terminal() -> bool {
    io::stderr().is_terminal()
}

/// Write `label` and `msg` as one line, colored when `is_terminal`.
fn write_labeled<W: Write>(
    writer: &mut W,
    color: &str,
    label: &str,
    msg: impl Display,
    is_terminal: bool,
) {
    let _ = if is_terminal {
        writeln!(writer, "{color}{label}{msg}{RESET}")
    } else {
        writeln!(writer, "{label}{msg}")
    };
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
