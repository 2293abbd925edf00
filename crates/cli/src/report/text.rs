// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output with terminal highlighting.

use std::io;
use std::ops::Range;

use termcolor::{ColorSpec, WriteColor};

use crate::color::scheme;

use super::{LanguageEntry, ReportFormatter, ScanReport, TestReport};

/// Text format formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn scan(&self, out: &mut dyn WriteColor, report: &ScanReport) -> io::Result<()> {
        write_colored(out, &scheme::path(), &report.file)?;
        match (&report.language, report.dialect) {
            (Some(language), Some(dialect)) => writeln!(out, " ({}, {})", language, dialect)?,
            _ => writeln!(out, " (unsupported language)")?,
        }

        if report.literals.is_empty() {
            writeln!(out, "no regex literals found")?;
            return Ok(());
        }

        for literal in &report.literals {
            write!(out, "{:>4}  ", literal.index)?;
            write_colored(
                out,
                &scheme::line_number(),
                &format!("{}:{}", literal.line, literal.column),
            )?;
            writeln!(out, "  {}", literal.text)?;
        }
        Ok(())
    }

    fn test(&self, out: &mut dyn WriteColor, report: &TestReport) -> io::Result<()> {
        let Some(literal) = &report.literal else {
            write_colored(out, &scheme::path(), &report.file)?;
            writeln!(out, ": no regex literal at the given position")?;
            return Ok(());
        };

        write_colored(out, &scheme::path(), &report.file)?;
        write!(out, ":")?;
        write_colored(
            out,
            &scheme::line_number(),
            &format!("{}:{}", literal.line, literal.column),
        )?;
        writeln!(out, " {}", literal.text)?;

        if let Some(line) = &report.source_line {
            write!(out, "  ")?;
            let origin = (literal.column - 1)..(literal.end_column - 1);
            write_highlighted(out, line, std::slice::from_ref(&origin), &scheme::origin())?;
            writeln!(out)?;
        }
        writeln!(out)?;

        let noun = if report.matches.len() == 1 { "match" } else { "matches" };
        let augment = if report.augment { " (global+multiline forced)" } else { "" };
        writeln!(out, "{} {}{}", report.matches.len(), noun, augment)?;
        for m in &report.matches {
            write!(out, "  ")?;
            write_colored(out, &scheme::line_number(), &format!("{}:{}", m.line, m.column))?;
            writeln!(out, "  {:?}", m.text)?;
        }

        if !report.matches.is_empty() {
            writeln!(out)?;
            let spans: Vec<Range<usize>> = report.matches.iter().map(|m| m.start..m.end).collect();
            write_highlighted(out, &report.sample, &spans, &scheme::matched())?;
            if !report.sample.ends_with('\n') {
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn languages(&self, out: &mut dyn WriteColor, entries: &[LanguageEntry]) -> io::Result<()> {
        for entry in entries {
            writeln!(out, "{:<18}{}", entry.language, entry.dialect)?;
        }
        Ok(())
    }
}

fn write_colored(out: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{}", text)?;
    out.reset()
}

/// Write `text` with the given ordered, non-overlapping byte ranges colored.
///
/// Empty ranges have nothing to color and are skipped.
fn write_highlighted(
    out: &mut dyn WriteColor,
    text: &str,
    spans: &[Range<usize>],
    spec: &ColorSpec,
) -> io::Result<()> {
    let mut pos = 0;
    for span in spans {
        if span.is_empty() || span.start < pos || span.end > text.len() {
            continue;
        }
        write!(out, "{}", &text[pos..span.start])?;
        write_colored(out, spec, &text[span.clone()])?;
        pos = span.end;
    }
    write!(out, "{}", &text[pos..])
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
