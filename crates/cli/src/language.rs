// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Language tag detection for source files.
//!
//! Configured globs are tried first, then the built-in extension table.

use std::collections::BTreeMap;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::defaults::extensions;

/// Maps file paths to language tags.
pub struct LanguageDetector {
    globs: GlobSet,
    tags: Vec<String>,
}

impl LanguageDetector {
    /// Detector with no configured globs.
    pub fn new() -> Self {
        Self {
            globs: GlobSet::empty(),
            tags: Vec::new(),
        }
    }

    /// Detector using `glob -> language` mappings from config.
    ///
    /// Invalid globs are skipped with a warning.
    pub fn with_globs(mappings: &BTreeMap<String, String>) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut tags = Vec::new();
        for (pattern, language) in mappings {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                    tags.push(language.clone());
                }
                Err(e) => tracing::warn!("invalid glob pattern {}: {}", pattern, e),
            }
        }
        match builder.build() {
            Ok(globs) => Self { globs, tags },
            Err(e) => {
                tracing::warn!("failed to build language globs: {}", e);
                Self::new()
            }
        }
    }

    /// Language tag for `path`, `None` when nothing matches.
    ///
    /// When several globs match, the first in sorted pattern order wins.
    pub fn detect(&self, path: &Path) -> Option<String> {
        if let Some(&idx) = self.globs.matches(path).first() {
            return self.tags.get(idx).cloned();
        }
        let ext = path.extension()?.to_str()?.to_lowercase();
        extensions::TABLE
            .iter()
            .find(|(e, _)| *e == ext)
            .map(|(_, tag)| tag.to_string())
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "language_tests.rs"]
mod tests;
