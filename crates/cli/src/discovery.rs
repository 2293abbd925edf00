// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! The nearest `rxpreview.toml` between a start directory and its
//! enclosing git root applies.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE_NAME;

/// Nearest config file at or above `start_dir`, not crossing the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if is_git_root(dir) {
            tracing::debug!("no {} below git root {}", CONFIG_FILE_NAME, dir.display());
            break;
        }
    }
    None
}

fn is_git_root(dir: &Path) -> bool {
    dir.join(".git").exists()
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
