//! Behavioral specs for `rxpreview languages`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Built-in language tags are listed with their dialects
#[test]
fn lists_builtin_languages() {
    let project = Project::empty();

    project
        .cmd()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("javascript        default\n"))
        .stdout(predicates::str::contains("php               quoted-string\n"))
        .stdout(predicates::str::contains("haxe              prefix-sigil\n"));
}

/// > Configured dialects extend the list
#[test]
fn configured_languages_are_listed() {
    let project = Project::empty();
    project.config("version = 1\n\n[dialects]\nmarko = \"default\"\n");

    let value = json_stdout(project.cmd().args(["languages", "-o", "json"]));

    let languages = value["languages"].as_array().unwrap();
    assert_eq!(languages.len(), 9);
    assert_eq!(languages[8]["language"], "marko");
    assert_eq!(languages[8]["dialect"], "default");
}
