// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host collaborator: the editor surface the preview engine drives.
//!
//! [`Workspace`] is an in-memory host used by the command line front end
//! and by tests.

use std::collections::HashMap;

use crate::document::{DocumentId, Span, TextDocument};
use crate::view::{HighlightStyle, ViewId, VisibleView};

/// What the preview engine needs from its host.
pub trait Host {
    /// Views currently on screen, in display order.
    fn visible_views(&self) -> Vec<VisibleView>;

    fn document(&self, id: DocumentId) -> Option<&TextDocument>;

    /// Replace the spans of one highlight layer in one view.
    fn render(&mut self, view: ViewId, style: HighlightStyle, spans: &[Span]);

    /// Open `document` in a new view beside the current ones.
    fn open_beside(&mut self, document: DocumentId) -> ViewId;

    /// Document shown by a visible view.
    fn view_document(&self, view: ViewId) -> Option<DocumentId> {
        self.visible_views()
            .into_iter()
            .find(|v| v.id == view)
            .map(|v| v.document)
    }
}

/// In-memory host: documents, open views and rendered highlights.
#[derive(Debug, Default)]
pub struct Workspace {
    documents: Vec<TextDocument>,
    views: Vec<VisibleView>,
    next_view: u32,
    highlights: HashMap<(ViewId, HighlightStyle), Vec<Span>>,
    render_calls: usize,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(&mut self, language: &str, text: &str) -> DocumentId {
        let id = DocumentId(self.documents.len() as u32);
        self.documents.push(TextDocument::new(id, language, text));
        id
    }

    /// Replace a document's text. Returns `false` for an unknown document.
    pub fn set_text(&mut self, id: DocumentId, text: &str) -> bool {
        match self.documents.iter_mut().find(|d| d.id() == id) {
            Some(document) => {
                document.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Open a view on `document` at the end of the visible set.
    pub fn open(&mut self, document: DocumentId) -> ViewId {
        let id = ViewId(self.next_view);
        self.next_view += 1;
        self.views.push(VisibleView { id, document });
        id
    }

    /// Close a view. Highlights drawn in it are discarded.
    pub fn close(&mut self, view: ViewId) {
        self.views.retain(|v| v.id != view);
        self.highlights.retain(|(v, _), _| *v != view);
    }

    /// Spans last rendered for a view and layer.
    pub fn highlights(&self, view: ViewId, style: HighlightStyle) -> &[Span] {
        self.highlights.get(&(view, style)).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of `render` calls received so far.
    pub fn render_calls(&self) -> usize {
        self.render_calls
    }
}

impl Host for Workspace {
    fn visible_views(&self) -> Vec<VisibleView> {
        self.views.clone()
    }

    fn document(&self, id: DocumentId) -> Option<&TextDocument> {
        self.documents.iter().find(|d| d.id() == id)
    }

    fn render(&mut self, view: ViewId, style: HighlightStyle, spans: &[Span]) {
        self.render_calls += 1;
        if spans.is_empty() {
            self.highlights.remove(&(view, style));
        } else {
            self.highlights.insert((view, style), spans.to_vec());
        }
    }

    fn open_beside(&mut self, document: DocumentId) -> ViewId {
        self.open(document)
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
