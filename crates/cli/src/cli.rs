// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// Live preview of regex literals found in source code
#[derive(Parser)]
#[command(name = "rxpreview")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "RXPREVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the regex literals in a source file
    Scan(ScanArgs),
    /// Evaluate a literal against the sample text
    Test(TestArgs),
    /// List supported language tags and their dialects
    Languages(OutputArgs),
}

/// Output options shared by all commands.
#[derive(clap::Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Source file to scan
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Language tag (default: detected from the file name)
    #[arg(long, value_name = "TAG")]
    pub lang: Option<String>,

    #[command(flatten)]
    pub out: OutputArgs,
}

#[derive(clap::Args)]
pub struct TestArgs {
    /// Source file holding the literal
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Language tag (default: detected from the file name)
    #[arg(long, value_name = "TAG")]
    pub lang: Option<String>,

    /// Caret line (1-based)
    #[arg(long, requires = "column", conflicts_with = "index")]
    pub line: Option<usize>,

    /// Caret column (1-based, bytes)
    #[arg(long, requires = "line")]
    pub column: Option<usize>,

    /// Pick the N-th literal listed by `scan` (1-based)
    #[arg(long, value_name = "N", required_unless_present = "line")]
    pub index: Option<usize>,

    /// Sample text file (default: config, then built-in sample)
    #[arg(long, value_name = "FILE")]
    pub sample: Option<PathBuf>,

    /// Force global and multiline evaluation
    #[arg(long)]
    pub augment: bool,

    #[command(flatten)]
    pub out: OutputArgs,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
