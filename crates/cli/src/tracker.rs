// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Active-literal tracking: which literal sits under the caret.

use crate::dialect::{Dialect, LanguageTable, Wrap};
use crate::document::{Position, TextDocument};
use crate::literal::{ActiveRegex, RegexLiteral};
use crate::scanner::{LiteralCandidate, scan_line};

/// The literal on `line` whose span contains `caret` (a byte column).
///
/// Candidates are visited left to right and the scan stops at the first
/// one ending at or after the caret. That candidate is returned only if
/// it also starts at or before the caret, so a caret between two literals
/// selects nothing and, for touching literals, the left one wins. In the
/// quoted dialect the opening quote counts as part of the literal.
pub fn find_at_caret(line: &str, caret: usize, dialect: Dialect) -> Option<LiteralCandidate> {
    let candidate = scan_line(line, dialect)
        .into_iter()
        .find(|c| c.span.end >= caret)?;
    let opening = match dialect.grammar().wrap {
        Wrap::Quoted => candidate.span.start.saturating_sub(1),
        Wrap::Bare | Wrap::Sigil(_) => candidate.span.start,
    };
    (opening <= caret).then_some(candidate)
}

/// The literal under `position` in `document`, if it compiles.
pub fn active_at(
    document: &TextDocument,
    position: Position,
    languages: &LanguageTable,
) -> Option<ActiveRegex> {
    let dialect = languages.dialect_for(document.language())?;
    let line = document.line(position.line)?;
    let candidate = find_at_caret(line, position.column, dialect)?;
    ActiveRegex::new(RegexLiteral::from_candidate(
        document.id(),
        position.line,
        candidate,
    ))
}

/// Every compiling literal in `document`, in source order.
///
/// These back the per-literal "test this regex" affordance.
pub fn enumerate(document: &TextDocument, languages: &LanguageTable) -> Vec<RegexLiteral> {
    let Some(dialect) = languages.dialect_for(document.language()) else {
        return Vec::new();
    };

    document
        .lines()
        .flat_map(|(n, line)| {
            scan_line(line, dialect)
                .into_iter()
                .map(move |c| RegexLiteral::from_candidate(document.id(), n, c))
        })
        .filter(|literal| literal.compile().is_some())
        .collect()
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
