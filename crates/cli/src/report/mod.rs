// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command output in text or JSON format.

mod json;
mod text;

use std::io;

use serde::Serialize;
use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::dialect::{Dialect, LanguageTable};
use crate::document::{Span, TextDocument};
use crate::literal::RegexLiteral;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// A literal as listed to the user. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiteralEntry {
    pub index: usize,
    pub line: usize,
    pub column: usize,
    pub end_column: usize,
    pub pattern: String,
    pub flags: String,
    /// Delimiter-to-flags text as written.
    pub text: String,
}

impl LiteralEntry {
    pub fn new(index: usize, literal: &RegexLiteral, document: &TextDocument) -> Self {
        let span = literal.span.to_span(document);
        Self {
            index,
            line: literal.span.line + 1,
            column: literal.span.start + 1,
            end_column: literal.span.end + 1,
            pattern: literal.pattern.clone(),
            flags: literal.flags.clone(),
            text: document.text()[span.range()].to_string(),
        }
    }
}

/// Output of `rxpreview scan`.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub file: String,
    pub language: Option<String>,
    pub dialect: Option<Dialect>,
    pub literals: Vec<LiteralEntry>,
}

impl ScanReport {
    pub fn new(
        file: String,
        document: &TextDocument,
        languages: &LanguageTable,
        literals: &[RegexLiteral],
    ) -> Self {
        let dialect = languages.dialect_for(document.language());
        Self {
            file,
            language: dialect.map(|_| document.language().to_string()),
            dialect,
            literals: literals
                .iter()
                .enumerate()
                .map(|(i, literal)| LiteralEntry::new(i + 1, literal, document))
                .collect(),
        }
    }
}

/// One match in the sample text. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEntry {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
    pub text: String,
}

impl MatchEntry {
    pub fn new(span: Span, sample: &TextDocument) -> Self {
        let position = sample.position_at(span.start);
        Self {
            start: span.start,
            end: span.end,
            line: position.line + 1,
            column: position.column + 1,
            text: sample.text()[span.range()].to_string(),
        }
    }
}

/// Output of `rxpreview test`.
#[derive(Debug, Clone, Serialize)]
pub struct TestReport {
    pub file: String,
    /// The previewed literal, `None` when nothing was under the caret.
    pub literal: Option<LiteralEntry>,
    pub augment: bool,
    pub matches: Vec<MatchEntry>,
    /// Full sample text, for highlighted text output.
    #[serde(skip)]
    pub sample: String,
    /// Source line holding the literal.
    #[serde(skip)]
    pub source_line: Option<String>,
}

impl TestReport {
    /// Spans are the match and origin layers as rendered by the session.
    pub fn new(
        file: String,
        literal: Option<(&RegexLiteral, &TextDocument)>,
        sample: &TextDocument,
        matches: &[Span],
        augment: bool,
    ) -> Self {
        Self {
            file,
            literal: literal.map(|(lit, doc)| LiteralEntry::new(1, lit, doc)),
            augment,
            matches: matches.iter().map(|s| MatchEntry::new(*s, sample)).collect(),
            sample: sample.text().to_string(),
            source_line: literal
                .and_then(|(lit, doc)| doc.line(lit.span.line).map(str::to_string)),
        }
    }
}

/// One row of `rxpreview languages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    pub language: String,
    pub dialect: Dialect,
}

impl LanguageEntry {
    pub fn all(languages: &LanguageTable) -> Vec<Self> {
        languages
            .entries()
            .into_iter()
            .map(|(language, dialect)| Self { language, dialect })
            .collect()
    }
}

/// Renders reports in one output format.
pub trait ReportFormatter {
    fn scan(&self, out: &mut dyn WriteColor, report: &ScanReport) -> io::Result<()>;

    fn test(&self, out: &mut dyn WriteColor, report: &TestReport) -> io::Result<()>;

    fn languages(&self, out: &mut dyn WriteColor, entries: &[LanguageEntry]) -> io::Result<()>;
}

/// Formatter for an output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
