// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers shared by the command implementations.

use std::path::Path;

use anyhow::Context;
use termcolor::StandardStream;

use rxpreview::cli::{Cli, OutputArgs, OutputFormat};
use rxpreview::color;
use rxpreview::config::{self, Config};
use rxpreview::discovery;
use rxpreview::language::LanguageDetector;

/// Load the config named on the command line, or the discovered one.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        return Ok(config::load(path)?);
    }
    let cwd = std::env::current_dir()?;
    match discovery::find_config(&cwd) {
        Some(path) => {
            tracing::debug!("using config {}", path.display());
            Ok(config::load(&path)?)
        }
        None => Ok(Config::default()),
    }
}

/// Language tag for `file`: the explicit tag, else detection.
///
/// Falls back to `plaintext`, which no dialect supports.
pub fn language_for(file: &Path, explicit: Option<&str>, config: &Config) -> String {
    if let Some(tag) = explicit {
        return tag.to_string();
    }
    LanguageDetector::with_globs(&config.languages)
        .detect(file)
        .unwrap_or_else(|| "plaintext".to_string())
}

pub fn read_source(file: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

/// Stdout with colors resolved from the output options. JSON is never colored.
pub fn stdout(args: &OutputArgs) -> StandardStream {
    let choice = if args.output == OutputFormat::Json {
        termcolor::ColorChoice::Never
    } else {
        color::resolve(args.color, args.no_color)
    };
    StandardStream::stdout(choice)
}
