//! Behavioral specs for `rxpreview scan`.
//!
//! Tests that rxpreview correctly handles:
//! - Listing literals per dialect
//! - Language detection and `--lang`
//! - JSON output
//! - Unreadable input

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// TEXT OUTPUT
// =============================================================================

/// > Every literal is listed with its 1-based line and column
#[test]
fn lists_literals_in_source_order() {
    let project = Project::empty();
    project.file(
        "app.js",
        "const a = /ab*/g;\nif (x) { return s.replace(/\\s+/g, ' '); }\n",
    );

    project
        .cmd()
        .args(["scan", "app.js"])
        .assert()
        .success()
        .stdout(
            "app.js (javascript, default)\n   1  1:11  /ab*/g\n   2  2:27  /\\s+/g\n",
        );
}

/// > Literals that do not compile are not offered
#[test]
fn skips_invalid_literals() {
    let project = Project::empty();
    project.file("app.ts", "const bad = /(/;\nconst good = /x/i;\n");

    project
        .cmd()
        .args(["scan", "app.ts"])
        .assert()
        .success()
        .stdout(predicates::str::contains("/x/i"))
        .stdout(predicates::str::contains("/(/").not());
}

/// > PHP uses quoted literals
#[test]
fn scans_quoted_dialect() {
    let project = Project::empty();
    project.file("index.php", "<?php preg_match('/^a+$/i', $s);\n");

    project
        .cmd()
        .args(["scan", "index.php"])
        .assert()
        .success()
        .stdout(predicates::str::contains("(php, quoted-string)"))
        .stdout(predicates::str::contains("1:19  /^a+$/i"));
}

/// > Haxe uses sigil literals
#[test]
fn scans_prefix_sigil_dialect() {
    let project = Project::empty();
    project.file("Main.hx", "var r = ~/a.b/si;\n");

    project
        .cmd()
        .args(["scan", "Main.hx"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1:9  ~/a.b/si"));
}

/// > Unknown languages have no literals
#[test]
fn unsupported_language_reports_nothing() {
    let project = Project::empty();
    project.file("notes.txt", "x = /a/;\n");

    project
        .cmd()
        .args(["scan", "notes.txt"])
        .assert()
        .success()
        .stdout("notes.txt (unsupported language)\nno regex literals found\n");
}

/// > `--lang` overrides detection
#[test]
fn lang_flag_overrides_detection() {
    let project = Project::empty();
    project.file("snippet.txt", "x = /a/;\n");

    project
        .cmd()
        .args(["scan", "snippet.txt", "--lang", "typescript"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1:5  /a/"));
}

// =============================================================================
// JSON OUTPUT
// =============================================================================

/// > JSON output carries pattern, flags and positions
#[test]
fn json_output() {
    let project = Project::empty();
    project.file("app.js", "const a = /ab*/g;\n");

    let value = json_stdout(project.cmd().args(["scan", "app.js", "-o", "json"]));

    assert_eq!(value["language"], "javascript");
    assert_eq!(value["dialect"], "default");
    assert_eq!(value["literals"][0]["pattern"], "ab*");
    assert_eq!(value["literals"][0]["flags"], "g");
    assert_eq!(value["literals"][0]["line"], 1);
    assert_eq!(value["literals"][0]["column"], 11);
    assert_eq!(value["literals"][0]["end_column"], 17);
}

// =============================================================================
// ERRORS
// =============================================================================

/// > A missing file is an internal error (exit 3)
#[test]
fn missing_file_fails() {
    let project = Project::empty();

    project
        .cmd()
        .args(["scan", "nope.js"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("failed to read nope.js"));
}
