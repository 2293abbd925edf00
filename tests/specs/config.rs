//! Behavioral specs for configuration.
//!
//! Tests that rxpreview correctly handles:
//! - Config discovery and `-C`
//! - Validation errors (exit 2)
//! - `[preview]`, `[languages]` and `[dialects]` settings

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// VALIDATION
// =============================================================================

/// > Unknown keys are errors
#[test]
fn unknown_key_fails() {
    let project = Project::empty();
    project.config("version = 1\nunknown_key = true\n");

    project
        .cmd()
        .arg("languages")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// > Only version 1 is accepted
#[test]
fn unsupported_version_fails() {
    let project = Project::empty();
    project.config("version = 7\n");

    project
        .cmd()
        .arg("languages")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 7"));
}

/// > Dialect names are validated
#[test]
fn unknown_dialect_fails() {
    let project = Project::empty();
    project.config("version = 1\n[dialects]\nmarko = \"slashy\"\n");

    project
        .cmd()
        .arg("languages")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown dialect `slashy`"));
}

// =============================================================================
// DISCOVERY
// =============================================================================

/// > Config is discovered from parent directories
#[test]
fn discovered_from_subdirectory() {
    let project = Project::empty();
    project
        .config("version = 1\n[dialects]\nmarko = \"default\"\n")
        .file("web/App.marko", "let r = /a/;\n");

    project
        .cmd()
        .current_dir(project.path().join("web"))
        .args(["scan", "App.marko", "--lang", "marko"])
        .assert()
        .success()
        .stdout(predicates::str::contains("(marko, default)"));
}

/// > `-C` names the config file explicitly
#[test]
fn explicit_config_path() {
    let project = Project::empty();
    project.file("conf/custom.toml", "version = 3\n");

    project
        .cmd()
        .args(["-C", "conf/custom.toml", "languages"])
        .assert()
        .code(2);
}

/// > A missing explicit config is a config error
#[test]
fn missing_explicit_config_fails() {
    let project = Project::empty();

    project
        .cmd()
        .args(["languages", "-C", "missing.toml"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read missing.toml"));
}

// =============================================================================
// SETTINGS
// =============================================================================

/// > `[languages]` maps file globs to language tags
#[test]
fn language_globs() {
    let project = Project::empty();
    project
        .config("version = 1\n[languages]\n\"**/*.es\" = \"javascript\"\n")
        .file("legacy.es", "x = /a/;\n");

    project
        .cmd()
        .args(["scan", "legacy.es"])
        .assert()
        .success()
        .stdout(predicates::str::contains("(javascript, default)"));
}

/// > `[preview] sample` is resolved relative to the config file
#[test]
fn configured_sample() {
    let project = Project::empty();
    project
        .config("version = 1\n[preview]\nsample = \"fixtures/words.txt\"\n")
        .file("fixtures/words.txt", "cat dog cat\n")
        .file("src/app.js", "const r = /cat/g;\n");

    project
        .cmd()
        .current_dir(project.path().join("src"))
        .args(["test", "app.js", "--index", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 matches\n"));
}

/// > `[preview] augment` turns on forced global+multiline evaluation
#[test]
fn configured_augment() {
    let project = Project::empty();
    project
        .config("version = 1\n[preview]\naugment = true\n")
        .file("app.js", "const r = /^a/;\n")
        .file("sample.txt", "a\na\n");

    project
        .cmd()
        .args(["test", "app.js", "--index", "1", "--sample", "sample.txt"])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 matches (global+multiline forced)"));
}
