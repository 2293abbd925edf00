// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match evaluator.

use crate::document::Span;

use super::matcher::CompiledMatcher;

/// Find the matches of `matcher` in `text`, left to right, non-overlapping.
///
/// With `augment`, a matcher missing global or multiline mode is replaced
/// by a derived one with both on. Non-global matchers stop after the first
/// match; sticky matchers stop at the first position that does not match.
/// An empty match moves the search one character past its start.
pub fn evaluate(matcher: &CompiledMatcher, text: &str, augment: bool) -> Vec<Span> {
    let derived;
    let matcher = if augment && !(matcher.is_global() && matcher.is_multiline()) {
        match matcher.augmented() {
            Ok(m) => {
                derived = m;
                &derived
            }
            Err(_) => matcher,
        }
    } else {
        matcher
    };

    let mut spans = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let found = match matcher.regex().find_from_pos(text, pos) {
            Ok(Some(m)) => m,
            Ok(None) => break,
            Err(e) => {
                // Backtrack limit or similar: keep what was found so far.
                tracing::trace!("evaluation of {} stopped: {}", matcher, e);
                break;
            }
        };

        if matcher.is_sticky() && found.start() != pos {
            break;
        }

        spans.push(Span::new(found.start(), found.end()));

        if !matcher.is_global() {
            break;
        }

        pos = if found.end() > found.start() {
            found.end()
        } else {
            next_char(text, found.start())
        };
    }

    spans
}

/// Offset one character past `offset`, or one byte past the end of `text`.
fn next_char(text: &str, offset: usize) -> usize {
    offset + text[offset..].chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod tests;
