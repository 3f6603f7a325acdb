// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test manifest types for TOML/JSON manifest files.
//!
//! ```toml
//! name = "compile"
//!
//! [[cases]]
//! name = "vertex shader to object"
//! args = ["-c", "shader.vert"]
//! expect = [{ type = "valid_object_file" }]
//!
//! [[cases.shaders]]
//! name = "shader.vert"
//! source = "#version 140\nvoid main() {}\n"
//! ```

use glslc_expect::{Expectation, ExpectationError, TestCase};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Top-level manifest
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Name for reporting
    #[serde(default)]
    pub name: String,

    /// Arguments placed before every case's own arguments
    #[serde(default)]
    pub common_args: Vec<String>,

    /// Test cases, run in order
    #[serde(default)]
    pub cases: Vec<CaseSpec>,
}

/// One compiler invocation and what it should produce
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CaseSpec {
    pub name: String,

    /// Compiler arguments
    #[serde(default)]
    pub args: Vec<String>,

    /// Shader files written to the run directory before the compiler starts.
    /// Their names, in order, are the case's input filenames.
    #[serde(default)]
    pub shaders: Vec<ShaderSpec>,

    pub expect: Vec<Expectation>,

    /// Skip this case without running it
    #[serde(default)]
    pub skip: bool,
}

/// A shader source file for a case
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ShaderSpec {
    /// Filename inside the run directory
    pub name: String,

    /// Inline source text
    #[serde(default)]
    pub source: Option<String>,

    /// Source file, relative to the manifest's directory
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read shader file '{}': {source}", path.display())]
    ShaderFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Case '{case}': {source}")]
    Expectation {
        case: String,
        source: ExpectationError,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl Manifest {
    /// Load a manifest from a TOML or JSON file and resolve shader files.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        let mut manifest = if path.extension().is_some_and(|e| e == "json") {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        let base = path.parent().unwrap_or(Path::new("."));
        manifest.resolve_shader_files(base)?;
        Ok(manifest)
    }

    pub fn from_toml(content: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check structure and expectations without touching the filesystem.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.cases.is_empty() {
            return Err(ManifestError::Validation(
                "manifest defines no cases".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for case in &self.cases {
            if case.name.trim().is_empty() {
                return Err(ManifestError::Validation(
                    "case name must not be empty".to_string(),
                ));
            }
            if !seen.insert(case.name.as_str()) {
                return Err(ManifestError::Validation(format!(
                    "duplicate case name '{}'",
                    case.name
                )));
            }
            case.validate()?;
        }
        Ok(())
    }

    /// Replace `file` references with their contents.
    fn resolve_shader_files(&mut self, base: &Path) -> Result<(), ManifestError> {
        for shader in self.cases.iter_mut().flat_map(|c| c.shaders.iter_mut()) {
            if let Some(file) = shader.file.take() {
                let path = base.join(&file);
                let source = std::fs::read_to_string(&path)
                    .map_err(|source| ManifestError::ShaderFile { path, source })?;
                shader.source = Some(source);
            }
        }
        Ok(())
    }

    /// Cases whose name contains `filter` (all cases when `None`).
    pub fn select<'a>(&'a self, filter: Option<&'a str>) -> impl Iterator<Item = &'a CaseSpec> {
        self.cases
            .iter()
            .filter(move |c| filter.is_none_or(|f| c.name.contains(f)))
    }
}

impl CaseSpec {
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.expect.is_empty() {
            return Err(ManifestError::Validation(format!(
                "case '{}' has no expectations",
                self.name
            )));
        }

        let mut names = HashSet::new();
        for shader in &self.shaders {
            if !is_plain_relative(&shader.name) {
                return Err(ManifestError::Validation(format!(
                    "case '{}': shader name '{}' must be a relative path inside the run directory",
                    self.name, shader.name
                )));
            }
            if !names.insert(shader.name.as_str()) {
                return Err(ManifestError::Validation(format!(
                    "case '{}': duplicate shader '{}'",
                    self.name, shader.name
                )));
            }
            if shader.source.is_some() == shader.file.is_some() {
                return Err(ManifestError::Validation(format!(
                    "case '{}': shader '{}' needs exactly one of `source` or `file`",
                    self.name, shader.name
                )));
            }
        }

        self.test_case().map(|_| ())
    }

    /// Build the checks for this case.
    pub fn test_case(&self) -> Result<TestCase, ManifestError> {
        TestCase::from_expectations(self.name.as_str(), &self.expect).map_err(|source| {
            ManifestError::Expectation {
                case: self.name.clone(),
                source,
            }
        })
    }

    /// Shader filenames in declaration order.
    pub fn input_filenames(&self) -> Vec<String> {
        self.shaders.iter().map(|s| s.name.clone()).collect()
    }
}

fn is_plain_relative(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
