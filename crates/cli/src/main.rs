// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rxpreview::cli::{Cli, Command};
use rxpreview::config::defaults::{LOG_ENV, LOG_FILTER};
use rxpreview::error::ExitCode;

mod cmd_languages;
mod cmd_scan;
mod common;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Scan(args) => cmd_scan::run(&cli, args),
        Command::Test(args) => cmd_test::run(&cli, args),
        Command::Languages(args) => cmd_languages::run(&cli, args),
    };

    match result {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("rxpreview: {:#}", e);
            if e.downcast_ref::<rxpreview::config::ConfigError>().is_some() {
                ExitCode::ConfigError.into()
            } else {
                ExitCode::InternalError.into()
            }
        }
    }
}

/// Log to stderr, filtered by `RXPREVIEW_LOG` (or debug with `--verbose`).
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(LOG_FILTER))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
