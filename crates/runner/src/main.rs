// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! glslc test runner binary entry point.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use glslc_runner::cli::Cli;
use glslc_runner::manifest::Manifest;
use glslc_runner::output::{case_status, ReportWriter, RunReport};
use glslc_runner::output_diagnostic::{
    print_error, print_path_error, print_verbose, print_warning,
};
use glslc_runner::runner::Runner;

/// Exit code when any case failed its checks.
const EXIT_FAILED: i32 = 1;
/// Exit code for unusable manifests and cases that could not be run.
const EXIT_HARNESS_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut manifests = Vec::with_capacity(cli.manifests.len());
    for path in &cli.manifests {
        match Manifest::load(path) {
            Ok(manifest) => manifests.push(manifest),
            Err(e) => {
                print_path_error(path, e);
                std::process::exit(EXIT_HARNESS_ERROR);
            }
        }
    }

    let compiler = match resolve_compiler(&cli.glslc) {
        Ok(compiler) => compiler,
        Err(e) => {
            print_path_error(&cli.glslc, e);
            std::process::exit(EXIT_HARNESS_ERROR);
        }
    };
    let runner = Runner::new(compiler)
        .with_timeout(cli.timeout_ms)
        .with_keep_dirs(cli.keep_dir);

    let mut suites = Vec::with_capacity(manifests.len());
    for (manifest, path) in manifests.iter().zip(&cli.manifests) {
        if cli.verbose {
            print_verbose(format_args!("Running {}", path.display()));
        }
        let suite = runner
            .run_manifest(manifest, cli.filter.as_deref(), |case| {
                if cli.verbose {
                    print_verbose(format_args!("{} {}", case_status(case), case.name()));
                }
            })
            .await;
        suites.push(suite);
    }

    let report = RunReport::new(&suites);
    if report.summary.total() == 0 {
        print_warning("No cases selected");
    }
    let mut stdout = std::io::stdout().lock();
    let written = ReportWriter::new(&mut stdout, cli.format).write_report(&report);
    if let Err(e) = written.and_then(|()| stdout.flush()) {
        print_error(format_args!("Failed to write report: {e}"));
        std::process::exit(EXIT_HARNESS_ERROR);
    }

    if report.summary.errored > 0 {
        std::process::exit(EXIT_HARNESS_ERROR);
    }
    if report.summary.failed > 0 {
        std::process::exit(EXIT_FAILED);
    }
}

/// Anchor a relative compiler path with a directory part to the current
/// directory, since each case runs elsewhere. Bare names go through `PATH`.
fn resolve_compiler(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_relative() && path.components().count() > 1 {
        std::path::absolute(path)
    } else {
        Ok(path.to_path_buf())
    }
}
