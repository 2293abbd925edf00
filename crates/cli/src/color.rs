// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::{Color, ColorChoice, ColorSpec};

/// `--color` values.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the effective color choice for stdout.
///
/// `--no-color` and `NO_COLOR` win over everything else.
pub fn resolve(mode: ColorMode, no_color: bool) -> ColorChoice {
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

/// Color scheme for text output.
pub mod scheme {
    use super::*;

    /// Strong highlight for matched text.
    pub fn matched() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bg(Some(Color::Yellow))
            .set_fg(Some(Color::Black))
            .set_bold(true);
        spec
    }

    /// Weak highlight for the literal in its source line.
    pub fn origin() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_underline(true);
        spec
    }

    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    pub fn muted() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
