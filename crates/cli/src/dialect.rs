// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lexical grammars for regex literals.
//!
//! Each dialect is a grammar descriptor, not a parser: a literal is
//! `boundary, delimiter, body, delimiter, flags, boundary`, optionally
//! wrapped in quotes or preceded by a sigil. The descriptor is turned
//! into a single scanning regex per dialect.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Closed set of built-in literal grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// `/pattern/flags` as written in C-family and script sources.
    Default,
    /// `'/pattern/flags'` or `"/pattern/flags"`.
    QuotedString,
    /// `~/pattern/flags`.
    PrefixSigil,
}

/// How the delimited literal is wrapped in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Bare,
    Quoted,
    Sigil(char),
}

/// Grammar descriptor for one dialect.
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    pub delimiter: char,
    /// Accepted flag letters.
    pub flags: &'static str,
    /// Characters allowed on both sides of a literal besides whitespace
    /// and the line ends.
    pub boundary: &'static str,
    /// Extra characters allowed after a literal only.
    pub trailing: &'static str,
    pub wrap: Wrap,
}

const BOUNDARY: &str = "(){}=,:?;";

const DEFAULT_GRAMMAR: Grammar = Grammar {
    delimiter: '/',
    flags: "gimuy",
    boundary: BOUNDARY,
    trailing: "",
    wrap: Wrap::Bare,
};

const QUOTED_GRAMMAR: Grammar = Grammar {
    delimiter: '/',
    flags: "gimuy",
    boundary: BOUNDARY,
    trailing: "",
    wrap: Wrap::Quoted,
};

const SIGIL_GRAMMAR: Grammar = Grammar {
    delimiter: '/',
    flags: "gimsu",
    boundary: BOUNDARY,
    trailing: ".",
    wrap: Wrap::Sigil('~'),
};

impl Grammar {
    /// Build the scanning regex source.
    ///
    /// Capture groups: 1 leading boundary, 2 literal (delimiter to flags,
    /// sigil included), 3 pattern body, 4 flags, 5 trailing boundary.
    pub fn regex_source(&self) -> String {
        let delim = regex::escape(&self.delimiter.to_string());
        let body = format!(r"(?:\\{delim}|\[[^\]]*\]|[^{delim}])+");
        let flags = class(self.flags);
        let literal = format!("{delim}({body}){delim}([{flags}]*)");
        let lead = format!(r"(^|\s|[{}])", class(self.boundary));
        let trail = format!(r"(\s|[{}{}]|$)", class(self.trailing), class(self.boundary));

        match self.wrap {
            Wrap::Bare => format!("{lead}({literal}){trail}"),
            Wrap::Quoted => format!(r#"{lead}['"]({literal})['"]{trail}"#),
            Wrap::Sigil(sigil) => {
                let sigil = regex::escape(&sigil.to_string());
                format!("{lead}({sigil}{literal}){trail}")
            }
        }
    }
}

/// Escape every character for use inside a bracketed class.
fn class(chars: &str) -> String {
    chars.chars().map(|c| regex::escape(&c.to_string())).collect()
}

#[allow(clippy::expect_used)]
static DEFAULT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&DEFAULT_GRAMMAR.regex_source()).expect("valid regex pattern")
});

#[allow(clippy::expect_used)]
static QUOTED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&QUOTED_GRAMMAR.regex_source()).expect("valid regex pattern")
});

#[allow(clippy::expect_used)]
static SIGIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&SIGIL_GRAMMAR.regex_source()).expect("valid regex pattern")
});

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Default, Dialect::QuotedString, Dialect::PrefixSigil];

    pub fn grammar(self) -> &'static Grammar {
        match self {
            Dialect::Default => &DEFAULT_GRAMMAR,
            Dialect::QuotedString => &QUOTED_GRAMMAR,
            Dialect::PrefixSigil => &SIGIL_GRAMMAR,
        }
    }

    /// Compiled scanning regex for this dialect.
    pub(crate) fn scanner(self) -> &'static Regex {
        match self {
            Dialect::Default => &DEFAULT_REGEX,
            Dialect::QuotedString => &QUOTED_REGEX,
            Dialect::PrefixSigil => &SIGIL_REGEX,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Default => "default",
            Dialect::QuotedString => "quoted-string",
            Dialect::PrefixSigil => "prefix-sigil",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Dialect::Default),
            "quoted-string" => Ok(Dialect::QuotedString),
            "prefix-sigil" => Ok(Dialect::PrefixSigil),
            other => Err(format!("unknown dialect: {other}")),
        }
    }
}

/// Built-in language tags and the dialect each one uses.
pub const BUILTIN_LANGUAGES: &[(&str, Dialect)] = &[
    ("javascript", Dialect::Default),
    ("javascriptreact", Dialect::Default),
    ("typescript", Dialect::Default),
    ("typescriptreact", Dialect::Default),
    ("vue", Dialect::Default),
    ("svelte", Dialect::Default),
    ("php", Dialect::QuotedString),
    ("haxe", Dialect::PrefixSigil),
];

/// Language tag to dialect lookup.
///
/// Starts from [`BUILTIN_LANGUAGES`]; configuration may add tags or
/// remap existing ones.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    extra: HashMap<String, Dialect>,
}

impl LanguageTable {
    pub fn new() -> Self {
        Self {
            extra: HashMap::new(),
        }
    }

    /// Register (or override) a language tag.
    pub fn insert(&mut self, language: impl Into<String>, dialect: Dialect) {
        self.extra.insert(language.into(), dialect);
    }

    /// Dialect for a language tag, `None` when the language is unsupported.
    pub fn dialect_for(&self, language: &str) -> Option<Dialect> {
        if let Some(dialect) = self.extra.get(language) {
            return Some(*dialect);
        }
        BUILTIN_LANGUAGES
            .iter()
            .find(|(tag, _)| *tag == language)
            .map(|(_, dialect)| *dialect)
    }

    pub fn is_supported(&self, language: &str) -> bool {
        self.dialect_for(language).is_some()
    }

    /// All known tags, built-ins first, then configured extras sorted by name.
    pub fn entries(&self) -> Vec<(String, Dialect)> {
        let mut entries: Vec<(String, Dialect)> = BUILTIN_LANGUAGES
            .iter()
            .map(|(tag, _)| (tag.to_string(), self.dialect_for(tag).unwrap_or(Dialect::Default)))
            .collect();
        let mut extra: Vec<_> = self
            .extra
            .iter()
            .filter(|(tag, _)| !BUILTIN_LANGUAGES.iter().any(|(b, _)| *b == tag.as_str()))
            .map(|(tag, dialect)| (tag.clone(), *dialect))
            .collect();
        extra.sort();
        entries.extend(extra);
        entries
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "dialect_tests.rs"]
mod tests;
