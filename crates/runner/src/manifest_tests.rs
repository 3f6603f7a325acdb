// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

const MINIMAL: &str = r#"
    name = "compile"
    common_args = ["--target-env=vulkan"]

    [[cases]]
    name = "vertex to object"
    args = ["-c", "shader.vert"]
    expect = [{ type = "valid_object_file" }]

    [[cases.shaders]]
    name = "shader.vert"
    source = "void main() {}\n"

    [[cases]]
    name = "missing input"
    args = ["nothing.vert"]
    expect = [{ type = "error_message", expected_error = "glslc: error: cannot open input file: 'nothing.vert': No such file or directory\n" }]
"#;

#[test]
fn deserialize_minimal_manifest() {
    let manifest = Manifest::from_toml(MINIMAL).unwrap();
    assert_eq!(manifest.name, "compile");
    assert_eq!(manifest.common_args, vec!["--target-env=vulkan"]);
    assert_eq!(manifest.cases.len(), 2);

    let first = &manifest.cases[0];
    assert_eq!(first.args, vec!["-c", "shader.vert"]);
    assert_eq!(first.input_filenames(), vec!["shader.vert"]);
    assert_eq!(first.expect, vec![Expectation::ValidObjectFile]);
    assert!(!first.skip);
    assert!(manifest.cases[1].shaders.is_empty());
}

#[test]
fn deserialize_json_manifest() {
    let json = r#"{
        "cases": [{
            "name": "version",
            "args": ["--version"],
            "expect": [
                { "type": "return_code_is_zero" },
                { "type": "stdout_match", "expected": true }
            ]
        }]
    }"#;
    let manifest = Manifest::from_json(json).unwrap();
    assert_eq!(manifest.cases[0].expect.len(), 2);
}

#[test]
fn test_case_expands_expectations() {
    let manifest = Manifest::from_toml(MINIMAL).unwrap();
    let case = manifest.cases[0].test_case().unwrap();
    assert_eq!(
        case.check_names(),
        vec!["successful_return", "object_file_preamble"]
    );
}

#[test]
fn select_filters_by_substring() {
    let manifest = Manifest::from_toml(MINIMAL).unwrap();
    let all: Vec<_> = manifest.select(None).map(|c| c.name.as_str()).collect();
    assert_eq!(all, vec!["vertex to object", "missing input"]);

    let some: Vec<_> = manifest
        .select(Some("missing"))
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(some, vec!["missing input"]);

    assert_eq!(manifest.select(Some("nope")).count(), 0);
}

#[test]
fn rejects_unknown_fields() {
    let err = Manifest::from_toml("bogus = 1\n[[cases]]\nname = \"a\"\nexpect = []").unwrap_err();
    assert!(matches!(err, ManifestError::Toml(_)));
}

#[test]
fn rejects_empty_manifest() {
    let err = Manifest::from_toml("name = \"empty\"").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation error: manifest defines no cases"
    );
}

#[rstest]
#[case::duplicate_names(
    r#"
    [[cases]]
    name = "a"
    expect = [{ type = "successful_return" }]
    [[cases]]
    name = "a"
    expect = [{ type = "successful_return" }]
    "#,
    "duplicate case name 'a'"
)]
#[case::blank_name(
    r#"
    [[cases]]
    name = "  "
    expect = [{ type = "successful_return" }]
    "#,
    "case name must not be empty"
)]
#[case::no_expectations(
    r#"
    [[cases]]
    name = "a"
    expect = []
    "#,
    "case 'a' has no expectations"
)]
#[case::shader_escapes_directory(
    r#"
    [[cases]]
    name = "a"
    expect = [{ type = "successful_return" }]
    [[cases.shaders]]
    name = "../x.vert"
    source = ""
    "#,
    "must be a relative path"
)]
#[case::duplicate_shader(
    r#"
    [[cases]]
    name = "a"
    expect = [{ type = "successful_return" }]
    [[cases.shaders]]
    name = "x.vert"
    source = ""
    [[cases.shaders]]
    name = "x.vert"
    source = ""
    "#,
    "duplicate shader 'x.vert'"
)]
#[case::shader_without_source(
    r#"
    [[cases]]
    name = "a"
    expect = [{ type = "successful_return" }]
    [[cases.shaders]]
    name = "x.vert"
    "#,
    "needs exactly one of `source` or `file`"
)]
#[case::shader_with_both(
    r#"
    [[cases]]
    name = "a"
    expect = [{ type = "successful_return" }]
    [[cases.shaders]]
    name = "x.vert"
    source = ""
    file = "x.vert"
    "#,
    "needs exactly one of `source` or `file`"
)]
fn rejects_invalid_structure(#[case] src: &str, #[case] message: &str) {
    let err = Manifest::from_toml(src).unwrap_err();
    assert!(matches!(err, ManifestError::Validation(_)), "{err}");
    assert!(err.to_string().contains(message), "{err}");
}

#[test]
fn rejects_invalid_expectation() {
    let err = Manifest::from_toml(
        r#"
        [[cases]]
        name = "bad warning"
        expect = [{ type = "warning_message", expected_warning = "" }]
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, ManifestError::Expectation { .. }));
    assert!(err.to_string().starts_with("Case 'bad warning': "));
}

#[test]
fn rejects_conflicting_expectations() {
    let err = Manifest::from_toml(
        r#"
        [[cases]]
        name = "two stdouts"
        expect = [
            { type = "stdout_match", expected = "a\n" },
            { type = "stdout_match", expected = "b\n" },
        ]
        "#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ManifestError::Expectation {
            source: ExpectationError::Conflicting { .. },
            ..
        }
    ));
    assert!(err
        .to_string()
        .starts_with("Case 'two stdouts': stdout_match: conflicting expectations"));
}

#[test]
fn accepts_repeated_identical_expectations() {
    let manifest = Manifest::from_toml(
        r#"
        [[cases]]
        name = "same warning"
        expect = [
            { type = "warning_message", expected_warning = "w\n" },
            { type = "valid_object_file_with_warning", expected_warning = "w\n" },
        ]
        "#,
    )
    .unwrap();
    assert_eq!(manifest.cases[0].test_case().unwrap().len(), 3);
}

#[test]
fn load_resolves_shader_files() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("shaders")).unwrap();
    fs::write(dir.path().join("shaders/a.frag"), "void main() {}\n").unwrap();
    let path = dir.path().join("cases.toml");
    fs::write(
        &path,
        r#"
        [[cases]]
        name = "from file"
        args = ["-c", "a.frag"]
        expect = [{ type = "valid_object_file" }]
        [[cases.shaders]]
        name = "a.frag"
        file = "shaders/a.frag"
        "#,
    )
    .unwrap();

    let manifest = Manifest::load(&path).unwrap();
    let shader = &manifest.cases[0].shaders[0];
    assert_eq!(shader.source.as_deref(), Some("void main() {}\n"));
    assert!(shader.file.is_none());
}

#[test]
fn load_reports_missing_shader_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cases.toml");
    fs::write(
        &path,
        r#"
        [[cases]]
        name = "missing"
        expect = [{ type = "successful_return" }]
        [[cases.shaders]]
        name = "a.frag"
        file = "nope.frag"
        "#,
    )
    .unwrap();

    let err = Manifest::load(&path).unwrap_err();
    assert!(matches!(err, ManifestError::ShaderFile { .. }));
    assert!(err.to_string().contains("nope.frag"));
}

#[test]
fn load_picks_parser_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cases.json");
    fs::write(
        &path,
        r#"{"cases": [{"name": "j", "expect": [{"type": "successful_return"}]}]}"#,
    )
    .unwrap();
    assert_eq!(Manifest::load(&path).unwrap().cases[0].name, "j");
}

#[test]
fn load_missing_manifest_is_io_error() {
    let err = Manifest::load(Path::new("/nonexistent/cases.toml")).unwrap_err();
    assert!(matches!(err, ManifestError::Io(_)));
}
