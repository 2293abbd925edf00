//! Shared unit test utilities.
//!
//! Directory trees and a ready-made workspace for preview tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use crate::document::DocumentId;
use crate::host::Workspace;
use crate::view::ViewId;

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// A workspace with one visible JavaScript source view and a
/// (not yet visible) plaintext sample document.
pub struct Fixture {
    pub workspace: Workspace,
    pub source: DocumentId,
    pub sample: DocumentId,
    pub source_view: ViewId,
}

pub fn js_fixture(source: &str, sample: &str) -> Fixture {
    let mut workspace = Workspace::new();
    let source = workspace.add_document("javascript", source);
    let sample = workspace.add_document("plaintext", sample);
    let source_view = workspace.open(source);
    Fixture {
        workspace,
        source,
        sample,
        source_view,
    }
}
