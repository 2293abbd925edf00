// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compiler.
//!
//! Literal flags map onto the backtracking engine as inline modifiers
//! (`i`, `m`, `s`); `g` and `y` only change how the evaluator iterates.
//! Unicode mode (`u`) is always on in the engine.

use std::fmt;

use fancy_regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Backtracking budget per search, bounds the cost of pathological patterns.
pub const BACKTRACK_LIMIT: usize = 100_000;

/// Why a (pattern, flags) pair could not be compiled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("invalid pattern /{pattern}/: {message}")]
    Syntax { pattern: String, message: String },

    #[error("unknown flag '{0}'")]
    UnknownFlag(char),

    #[error("duplicate flag '{0}'")]
    DuplicateFlag(char),
}

/// Parsed flag letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub global: bool,
    pub ignore_case: bool,
    pub multiline: bool,
    pub dot_all: bool,
    pub unicode: bool,
    pub sticky: bool,
}

impl Flags {
    /// Parse flag letters, rejecting unknown and repeated ones.
    pub fn parse(flags: &str) -> Result<Self, PatternError> {
        let mut parsed = Flags::default();
        for c in flags.chars() {
            let slot = match c {
                'g' => &mut parsed.global,
                'i' => &mut parsed.ignore_case,
                'm' => &mut parsed.multiline,
                's' => &mut parsed.dot_all,
                'u' => &mut parsed.unicode,
                'y' => &mut parsed.sticky,
                other => return Err(PatternError::UnknownFlag(other)),
            };
            if *slot {
                return Err(PatternError::DuplicateFlag(c));
            }
            *slot = true;
        }
        Ok(parsed)
    }

    /// Inline modifier group for the engine, empty when none apply.
    fn inline_modifiers(&self) -> String {
        let mut letters = String::new();
        if self.ignore_case {
            letters.push('i');
        }
        if self.multiline {
            letters.push('m');
        }
        if self.dot_all {
            letters.push('s');
        }
        if letters.is_empty() { letters } else { format!("(?{letters})") }
    }
}

/// An executable matcher derived from a literal's pattern and flags.
///
/// Two matchers built from the same (pattern, flags) are interchangeable.
pub struct CompiledMatcher {
    pattern: String,
    flags: String,
    parsed: Flags,
    regex: Regex,
}

impl CompiledMatcher {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn parsed_flags(&self) -> Flags {
        self.parsed
    }

    pub fn is_global(&self) -> bool {
        self.parsed.global
    }

    pub fn is_multiline(&self) -> bool {
        self.parsed.multiline
    }

    pub fn is_sticky(&self) -> bool {
        self.parsed.sticky
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    /// A new matcher with global and multiline forced on.
    ///
    /// `self` is left untouched.
    pub fn augmented(&self) -> Result<CompiledMatcher, PatternError> {
        let mut flags = self.flags.clone();
        if !self.parsed.global {
            flags.push('g');
        }
        if !self.parsed.multiline {
            flags.push('m');
        }
        compile(&self.pattern, &flags)
    }
}

impl PartialEq for CompiledMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.flags == other.flags
    }
}

impl Eq for CompiledMatcher {}

impl fmt::Debug for CompiledMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledMatcher")
            .field("pattern", &self.pattern)
            .field("flags", &self.flags)
            .finish()
    }
}

impl fmt::Display for CompiledMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.pattern, self.flags)
    }
}

/// Compile a pattern with its flags.
///
/// Pure: the same inputs always give an equal matcher or the same error.
pub fn compile(pattern: &str, flags: &str) -> Result<CompiledMatcher, PatternError> {
    let parsed = Flags::parse(flags)?;
    let source = format!("{}{}", parsed.inline_modifiers(), unescape_delimiter(pattern));
    let regex = RegexBuilder::new(&source)
        .backtrack_limit(BACKTRACK_LIMIT)
        .build()
        .map_err(|e| PatternError::Syntax {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

    Ok(CompiledMatcher {
        pattern: pattern.to_string(),
        flags: flags.to_string(),
        parsed,
        regex,
    })
}

/// Drop the backslash from `\/` escapes. The delimiter escape only exists
/// for the literal syntax and `/` is not special to the engine.
fn unescape_delimiter(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('/') => out.push('/'),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
