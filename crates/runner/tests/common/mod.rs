// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for runner integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Stand-in for glslc, run as `/bin/sh <script> <args>`.
///
/// `-c` writes `<input>.spv` with a valid SPIR-V preamble, `-S` writes
/// `<input>.s` with the assembly header, `--version` prints a banner and a
/// missing input fails the way glslc does.
pub const FAKE_GLSLC: &str = r#"
mode=
for arg in "$@"; do
  case "$arg" in
    -c) mode=object ;;
    -S) mode=assembly ;;
    --version) echo "glslc fake"; exit 0 ;;
    --sleep) sleep 5 ;;
    -*) ;;
    *)
      if [ ! -f "$arg" ]; then
        echo "glslc: error: cannot open input file: '$arg': No such file or directory" >&2
        exit 1
      fi
      case "$mode" in
        object) printf '\003\002\043\007\143\000\000\000\273\000\032\005\010\000\000\000\000\000\000\000' > "$arg.spv" ;;
        assembly) printf '// Module Version 99\n// Generated by (magic number): 51a00bb\n' > "$arg.s" ;;
      esac ;;
  esac
done
"#;

// =============================================================================
// Fixture
// =============================================================================

/// A temp directory holding the fake compiler and manifests.
pub struct Fixture {
    dir: TempDir,
    script: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("glslc.sh");
        fs::write(&script, FAKE_GLSLC).unwrap();
        Self { dir, script }
    }

    /// Write a manifest whose cases all start with the fake compiler script.
    /// `body` holds the `[[cases]]` tables.
    pub fn manifest(&self, file_name: &str, body: &str) -> PathBuf {
        let content = format!(
            "name = \"{}\"\ncommon_args = ['{}']\n{}",
            file_name,
            self.script.display(),
            body
        );
        self.raw_manifest(file_name, &content)
    }

    /// Write a manifest file verbatim.
    pub fn raw_manifest(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(file_name);
        fs::write(&path, content).unwrap();
        path
    }
}

/// Runner binary preconfigured to use the shell as the compiler.
#[allow(deprecated)]
pub fn runner() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("glslc-runner").unwrap();
    cmd.env("GLSLC", "/bin/sh");
    cmd
}
