// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rxpreview languages` command implementation.

use std::io::Write;

use rxpreview::cli::{Cli, OutputArgs};
use rxpreview::error::ExitCode;
use rxpreview::report::{self, LanguageEntry};

use crate::common;

pub fn run(cli: &Cli, args: &OutputArgs) -> anyhow::Result<ExitCode> {
    let config = common::load_config(cli)?;
    let entries = LanguageEntry::all(&config.language_table());

    let mut out = common::stdout(args);
    report::formatter(args.output).languages(&mut out, &entries)?;
    out.flush()?;

    Ok(ExitCode::Success)
}
