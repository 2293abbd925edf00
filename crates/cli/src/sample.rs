// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scratch file holding the sample text literals are previewed against.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Built-in sample text.
pub const SAMPLE_TEXT: &str = "\
Edit this text to try out the regex under the cursor.
Matches are highlighted as you type.

The quick brown fox jumps over the lazy dog.
THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG.
0123456789 +1 (555) 010-4477 3.14159 -42
alice@example.com bob.smith@mail.example.org
https://example.com/path?query=value#fragment
2026-10-19T08:30:00Z 19/10/2026 #ff8800 rgb(255, 136, 0)
";

/// The sample text written to disk for one preview activation.
///
/// The file is removed when this value is dropped.
#[derive(Debug)]
pub struct SampleFile {
    path: PathBuf,
}

impl SampleFile {
    /// Write [`SAMPLE_TEXT`] to `dir/name`, replacing any existing file.
    pub fn create(dir: &Path, name: &str) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(name);
        fs::write(&path, SAMPLE_TEXT)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

impl Drop for SampleFile {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::debug!("failed to remove {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
#[path = "sample_tests.rs"]
mod tests;
