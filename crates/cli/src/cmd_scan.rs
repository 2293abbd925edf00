// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rxpreview scan` command implementation.

use std::io::Write;

use rxpreview::cli::{Cli, ScanArgs};
use rxpreview::error::ExitCode;
use rxpreview::host::{Host, Workspace};
use rxpreview::report::{self, ScanReport};
use rxpreview::tracker;

use crate::common;

/// List every literal in the file.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let config = common::load_config(cli)?;
    let languages = config.language_table();
    let language = common::language_for(&args.file, args.lang.as_deref(), &config);
    let text = common::read_source(&args.file)?;

    let mut workspace = Workspace::new();
    let id = workspace.add_document(&language, &text);
    let Some(document) = workspace.document(id) else {
        anyhow::bail!("document vanished from workspace");
    };

    let literals = tracker::enumerate(document, &languages);
    tracing::debug!("{} literals in {}", literals.len(), args.file.display());

    let report = ScanReport::new(args.file.display().to_string(), document, &languages, &literals);
    let mut out = common::stdout(&args.out);
    report::formatter(args.out.output).scan(&mut out, &report)?;
    out.flush()?;

    Ok(ExitCode::Success)
}
