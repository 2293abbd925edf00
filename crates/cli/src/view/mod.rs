// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Views, their roles, and the highlight layers drawn in them.

mod sync;

pub use sync::ViewSynchronizer;

use std::fmt;

use serde::Serialize;

use crate::document::{DocumentId, Span};

/// Stable identity of an open view (an editor pane showing a document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ViewId(pub u32);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// A visible view and the document it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleView {
    pub id: ViewId,
    pub document: DocumentId,
}

/// What a view is for in the current preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRole {
    /// Shows the document holding the active literal.
    Source,
    /// The preview view the active literal is evaluated against.
    Target,
    Irrelevant,
}

/// Highlight layers a view can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    /// Weak highlight on the literal itself.
    Origin,
    /// Strong highlight on matched text.
    Match,
}

impl HighlightStyle {
    pub const ALL: [HighlightStyle; 2] = [HighlightStyle::Origin, HighlightStyle::Match];
}

/// Spans currently drawn in one view, per layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationState {
    pub origin: Vec<Span>,
    pub matches: Vec<Span>,
}

impl DecorationState {
    pub fn layer(&self, style: HighlightStyle) -> &[Span] {
        match style {
            HighlightStyle::Origin => &self.origin,
            HighlightStyle::Match => &self.matches,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.origin.is_empty() && self.matches.is_empty()
    }
}
