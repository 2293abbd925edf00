//! Behavioral specs for `rxpreview test`.
//!
//! Tests that rxpreview correctly handles:
//! - Picking a literal by caret position or index
//! - Evaluating it against a sample file or the built-in sample
//! - Forced global+multiline evaluation
//! - Exit codes when nothing matches

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

fn project() -> Project {
    let project = Project::empty();
    project
        .file("app.js", "const a = /ab*/g;\nconst b = /^a/;\nconst c = /zzz/;\n")
        .file("sample.txt", "a ab abb\na");
    project
}

// =============================================================================
// BY POSITION
// =============================================================================

/// > The literal under the caret is evaluated against the sample
#[test]
fn caret_inside_literal() {
    let project = project();

    project
        .cmd()
        .args(["test", "app.js", "--line", "1", "--column", "14"])
        .args(["--sample", "sample.txt"])
        .assert()
        .success()
        .stdout(predicates::str::starts_with("app.js:1:11 /ab*/g\n"))
        .stdout(predicates::str::contains("4 matches\n"))
        .stdout(predicates::str::contains("  1:6  \"abb\"\n"));
}

/// > A caret outside every literal selects nothing (exit 1)
#[test]
fn caret_outside_literal() {
    let project = project();

    project
        .cmd()
        .args(["test", "app.js", "--line", "1", "--column", "5"])
        .args(["--sample", "sample.txt"])
        .assert()
        .code(1)
        .stdout("app.js: no regex literal at the given position\n");
}

/// > A literal without matches exits 1
#[test]
fn literal_without_matches() {
    let project = project();

    project
        .cmd()
        .args(["test", "app.js", "--line", "3", "--column", "12"])
        .args(["--sample", "sample.txt"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("0 matches"));
}

// =============================================================================
// BY INDEX
// =============================================================================

/// > `--index` picks the N-th literal listed by scan
#[test]
fn by_index() {
    let project = project();

    project
        .cmd()
        .args(["test", "app.js", "--index", "2", "--sample", "sample.txt"])
        .assert()
        .success()
        .stdout(predicates::str::contains("app.js:2:11 /^a/"))
        .stdout(predicates::str::contains("1 match\n"));
}

/// > An index past the last literal is an error
#[test]
fn index_out_of_range() {
    let project = project();

    project
        .cmd()
        .args(["test", "app.js", "--index", "9", "--sample", "sample.txt"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("no literal #9"));
}

// =============================================================================
// AUGMENT
// =============================================================================

/// > `--augment` forces global and multiline evaluation
#[test]
fn augment_flag() {
    let project = project();

    project
        .cmd()
        .args(["test", "app.js", "--index", "2", "--sample", "sample.txt", "--augment"])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 matches (global+multiline forced)"));
}

// =============================================================================
// SAMPLE
// =============================================================================

/// > Without `--sample` the built-in sample text is used
#[test]
fn builtin_sample() {
    let project = Project::empty();
    project.file("app.js", "const r = /fox/;\n");

    project
        .cmd()
        .args(["test", "app.js", "--index", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1 match\n"))
        .stdout(predicates::str::contains("The quick brown fox"));
}

/// > A missing sample file is an error
#[test]
fn missing_sample_fails() {
    let project = project();

    project
        .cmd()
        .args(["test", "app.js", "--index", "1", "--sample", "gone.txt"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("failed to read sample"));
}

// =============================================================================
// JSON OUTPUT
// =============================================================================

/// > JSON output lists match offsets and positions
#[test]
fn json_output() {
    let project = project();

    let value = json_stdout(project.cmd().args([
        "test",
        "app.js",
        "--index",
        "1",
        "--sample",
        "sample.txt",
        "-o",
        "json",
    ]));

    assert_eq!(value["literal"]["pattern"], "ab*");
    assert_eq!(value["augment"], false);
    let matches = value["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 4);
    assert_eq!(matches[3]["start"], 9);
    assert_eq!(matches[3]["line"], 2);
    assert_eq!(matches[3]["column"], 1);
}

/// > Usage errors for incomplete positions
#[test]
fn line_without_column_is_usage_error() {
    let project = project();

    project
        .cmd()
        .args(["test", "app.js", "--line", "1"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("--column"));
}
