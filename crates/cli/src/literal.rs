// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regex literals located in documents, and the active one being previewed.

use serde::Serialize;

use crate::document::{DocumentId, Position, Span, TextDocument};
use crate::pattern::{self, CompiledMatcher};
use crate::scanner::LiteralCandidate;

/// Location of a literal: one line, byte columns `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceSpan {
    pub document: DocumentId,
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub fn start_position(&self) -> Position {
        Position::new(self.line, self.start)
    }

    pub fn end_position(&self) -> Position {
        Position::new(self.line, self.end)
    }

    /// Byte range in the whole document text.
    pub fn to_span(&self, document: &TextDocument) -> Span {
        Span::new(
            document.offset_at(self.start_position()),
            document.offset_at(self.end_position()),
        )
    }
}

/// A regex literal written in a source document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RegexLiteral {
    pub document: DocumentId,
    pub pattern: String,
    pub flags: String,
    pub span: SourceSpan,
}

impl RegexLiteral {
    pub fn from_candidate(document: DocumentId, line: usize, candidate: LiteralCandidate) -> Self {
        Self {
            document,
            pattern: candidate.pattern,
            flags: candidate.flags,
            span: SourceSpan {
                document,
                line,
                start: candidate.span.start,
                end: candidate.span.end,
            },
        }
    }

    /// Compile this literal, `None` when the engine rejects it.
    pub fn compile(&self) -> Option<CompiledMatcher> {
        pattern::compile(&self.pattern, &self.flags).ok()
    }
}

/// The literal currently previewed, with its compiled matcher.
///
/// Only constructible from a literal that compiled.
#[derive(Debug, PartialEq, Eq)]
pub struct ActiveRegex {
    literal: RegexLiteral,
    matcher: CompiledMatcher,
}

impl ActiveRegex {
    /// Compile `literal`; `None` when it does not compile.
    pub fn new(literal: RegexLiteral) -> Option<Self> {
        let matcher = literal.compile()?;
        Some(Self { literal, matcher })
    }

    pub fn literal(&self) -> &RegexLiteral {
        &self.literal
    }

    pub fn matcher(&self) -> &CompiledMatcher {
        &self.matcher
    }

    pub fn document(&self) -> DocumentId {
        self.literal.document
    }
}
