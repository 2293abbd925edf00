// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing for `rxpreview.toml`.

pub mod defaults;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::dialect::{Dialect, LanguageTable};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{path}: unsupported config version {version} (expected {expected})")]
    UnsupportedVersion {
        path: PathBuf,
        version: u32,
        expected: u32,
    },

    #[error("{path}: language `{language}` maps to unknown dialect `{dialect}`")]
    UnknownDialect {
        path: PathBuf,
        language: String,
        dialect: String,
    },
}

/// Root configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config format version.
    #[serde(default = "Config::default_version")]
    pub version: u32,

    /// Preview behavior.
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Extra file globs mapped to language tags, e.g. `"**/*.mjs" = "javascript"`.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,

    /// Extra language tags mapped to dialects, e.g. `marko = "default"`.
    #[serde(default)]
    pub dialects: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            preview: PreviewConfig::default(),
            languages: BTreeMap::new(),
            dialects: BTreeMap::new(),
        }
    }
}

impl Config {
    fn default_version() -> u32 {
        defaults::VERSION
    }

    /// Built-in language table extended with the `[dialects]` entries.
    pub fn language_table(&self) -> LanguageTable {
        let mut table = LanguageTable::new();
        for (language, dialect) in &self.dialects {
            match dialect.parse::<Dialect>() {
                Ok(dialect) => table.insert(language.clone(), dialect),
                Err(e) => tracing::warn!("ignoring dialect for {}: {}", language, e),
            }
        }
        table
    }
}

/// `[preview]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreviewConfig {
    /// Force global and multiline evaluation.
    #[serde(default)]
    pub augment: bool,

    /// Sample text file, relative to the config file (None = built-in sample).
    #[serde(default)]
    pub sample: Option<PathBuf>,
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config = parse(&content, path)?;

    // Resolve the sample path against the config file's directory.
    if let Some(sample) = config.preview.sample.take() {
        let resolved = match path.parent() {
            Some(dir) if sample.is_relative() => dir.join(sample),
            _ => sample,
        };
        config.preview.sample = Some(resolved);
    }

    Ok(config)
}

/// Parse config content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if config.version != defaults::VERSION {
        return Err(ConfigError::UnsupportedVersion {
            path: path.to_path_buf(),
            version: config.version,
            expected: defaults::VERSION,
        });
    }

    for (language, dialect) in &config.dialects {
        if dialect.parse::<Dialect>().is_err() {
            return Err(ConfigError::UnknownDialect {
                path: path.to_path_buf(),
                language: language.clone(),
                dialect: dialect.clone(),
            });
        }
    }

    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
