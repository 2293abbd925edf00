// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text documents with offset and line/column conversion.
//!
//! Offsets and columns are byte based. Lines end at `\n`; a trailing
//! `\r` is not part of the line text.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// Stable identity of a document within a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DocumentId(pub u32);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

/// Zero-based line and byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Half-open byte range in a document's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// An open document: identity, language tag and current text.
#[derive(Debug, Clone)]
pub struct TextDocument {
    id: DocumentId,
    language: String,
    text: String,
    line_starts: Vec<usize>,
}

impl TextDocument {
    pub fn new(id: DocumentId, language: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = line_starts(&text);
        Self {
            id,
            language: language.into(),
            text,
            line_starts,
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.line_starts = line_starts(&self.text);
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a line without its terminator.
    pub fn line(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(self.text.len(), |next| next - 1);
        let text = &self.text[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        (0..self.line_count()).filter_map(|n| self.line(n).map(|text| (n, text)))
    }

    /// Offset of a position, clamped to the line end and the text end.
    pub fn offset_at(&self, position: Position) -> usize {
        let Some(&start) = self.line_starts.get(position.line) else {
            return self.text.len();
        };
        let line_len = self.line(position.line).map_or(0, str::len);
        start + position.column.min(line_len)
    }

    /// Position of an offset, clamped to the text end.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        Position::new(line, offset - self.line_starts[line])
    }
}

fn line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend(memchr::memchr_iter(b'\n', text.as_bytes()).map(|idx| idx + 1));
    starts
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
