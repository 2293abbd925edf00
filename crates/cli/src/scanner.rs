// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Literal scanner: finds regex literals on a single line of source.

use std::ops::Range;

use crate::dialect::{Dialect, Wrap};

/// Only this many characters of a line are scanned.
pub const MAX_SCAN_CHARS: usize = 1000;

/// A literal found on a line, before document identity is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralCandidate {
    /// Pattern text between the delimiters, exactly as written.
    pub pattern: String,
    /// Flag letters after the closing delimiter, exactly as written.
    pub flags: String,
    /// Byte range of the delimiter-to-flags text (sigil included) within the line.
    pub span: Range<usize>,
}

/// Scan one line for literals of the given dialect.
///
/// Candidates are reported left to right and never overlap. A trailing
/// boundary character consumed by one candidate cannot open the next.
pub fn scan_line(line: &str, dialect: Dialect) -> Vec<LiteralCandidate> {
    let text = truncate_chars(line, MAX_SCAN_CHARS);
    let quoted = dialect.grammar().wrap == Wrap::Quoted;

    dialect
        .scanner()
        .captures_iter(text)
        .filter_map(|cap| {
            let literal = cap.get(2)?;
            let pattern = cap.get(3)?;
            let flags = cap.get(4)?;
            if quoted && !quotes_balanced(text, literal.range()) {
                return None;
            }
            Some(LiteralCandidate {
                pattern: pattern.as_str().to_string(),
                flags: flags.as_str().to_string(),
                span: literal.range(),
            })
        })
        .collect()
}

/// Longest prefix of `line` holding at most `max` characters.
fn truncate_chars(line: &str, max: usize) -> &str {
    match line.char_indices().nth(max) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

/// The quote before the literal must be the same character as the one after it.
fn quotes_balanced(text: &str, span: Range<usize>) -> bool {
    let bytes = text.as_bytes();
    span.start > 0 && span.end < bytes.len() && bytes[span.start - 1] == bytes[span.end]
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
