// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Preview session: the single owner of all preview state.
//!
//! The host feeds [`PreviewEvent`]s to [`PreviewSession::handle`]; every
//! event runs to completion and ends with a full resync of the views.

use crate::dialect::LanguageTable;
use crate::document::{DocumentId, Position};
use crate::host::Host;
use crate::literal::{ActiveRegex, RegexLiteral};
use crate::tracker;
use crate::view::{DecorationState, ViewId, ViewSynchronizer};

/// Notifications the host delivers to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewEvent {
    /// The caret moved in a view.
    SelectionChanged { view: ViewId, caret: Position },
    /// A document's text was edited.
    TextChanged { document: DocumentId },
    /// Views were opened, closed or rearranged.
    VisibleViewsChanged,
    /// Flip forced global+multiline evaluation.
    AugmentToggled,
    /// Turn the preview on or off.
    PreviewToggled,
    /// Preview a specific literal, as picked from the enumerated list.
    TestLiteral(RegexLiteral),
}

/// Where the active literal was picked from, re-resolved after edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Anchor {
    document: DocumentId,
    position: Position,
}

/// Session state: toggles, the active literal and the view synchronizer.
#[derive(Debug)]
pub struct PreviewSession {
    languages: LanguageTable,
    sample: DocumentId,
    enabled: bool,
    augment: bool,
    active: Option<ActiveRegex>,
    anchor: Option<Anchor>,
    target: Option<ViewId>,
    sync: ViewSynchronizer,
}

impl PreviewSession {
    /// A disabled session previewing against the `sample` document.
    pub fn new(languages: LanguageTable, sample: DocumentId, augment: bool) -> Self {
        Self {
            languages,
            sample,
            enabled: false,
            augment,
            active: None,
            anchor: None,
            target: None,
            sync: ViewSynchronizer::new(),
        }
    }

    pub fn handle<H: Host + ?Sized>(&mut self, host: &mut H, event: PreviewEvent) {
        match event {
            PreviewEvent::PreviewToggled => {
                if self.enabled {
                    tracing::debug!("preview disabled");
                    self.enabled = false;
                    self.set_active(None);
                } else {
                    tracing::debug!("preview enabled");
                    self.enabled = true;
                    self.ensure_target(host);
                    self.refresh_active(host);
                }
            }
            PreviewEvent::AugmentToggled => {
                self.augment = !self.augment;
                tracing::debug!("augment {}", if self.augment { "on" } else { "off" });
            }
            PreviewEvent::SelectionChanged { view, caret } => {
                self.select(host, view, caret);
            }
            PreviewEvent::TextChanged { document } => {
                if self.anchor.is_some_and(|a| a.document == document) {
                    self.refresh_active(host);
                }
            }
            PreviewEvent::VisibleViewsChanged => {}
            PreviewEvent::TestLiteral(literal) => {
                let anchor = Anchor {
                    document: literal.document,
                    position: literal.span.start_position(),
                };
                if let Some(active) = ActiveRegex::new(literal) {
                    self.anchor = Some(anchor);
                    self.enabled = true;
                    self.ensure_target(host);
                    self.set_active(Some(active));
                }
            }
        }

        self.sync
            .resync(host, self.active.as_ref(), self.target, self.augment);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn augment(&self) -> bool {
        self.augment
    }

    pub fn active(&self) -> Option<&ActiveRegex> {
        self.active.as_ref()
    }

    /// The preview view, once the preview has been enabled.
    pub fn target(&self) -> Option<ViewId> {
        self.target
    }

    pub fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    /// Decorations currently drawn into `view`.
    pub fn decorations(&self, view: ViewId) -> Option<&DecorationState> {
        self.sync.state(view)
    }

    /// Literals in `document` offered for explicit testing.
    pub fn literals<H: Host + ?Sized>(&self, host: &H, document: DocumentId) -> Vec<RegexLiteral> {
        host.document(document)
            .map(|doc| tracker::enumerate(doc, &self.languages))
            .unwrap_or_default()
    }

    fn select<H: Host + ?Sized>(&mut self, host: &H, view: ViewId, caret: Position) {
        if self.target == Some(view) {
            return;
        }
        let Some(document) = host.view_document(view).and_then(|id| host.document(id)) else {
            return;
        };
        if !self.languages.is_supported(document.language()) {
            return;
        }
        self.anchor = Some(Anchor {
            document: document.id(),
            position: caret,
        });
        if self.enabled {
            let active = tracker::active_at(document, caret, &self.languages);
            self.set_active(active);
        }
    }

    /// Re-resolve the literal at the anchor against current text.
    fn refresh_active<H: Host + ?Sized>(&mut self, host: &H) {
        if !self.enabled {
            return;
        }
        let active = self.anchor.and_then(|anchor| {
            let document = host.document(anchor.document)?;
            tracker::active_at(document, anchor.position, &self.languages)
        });
        self.set_active(active);
    }

    fn set_active(&mut self, active: Option<ActiveRegex>) {
        if self.active.as_ref().map(ActiveRegex::literal) != active.as_ref().map(ActiveRegex::literal)
        {
            match &active {
                Some(a) => tracing::debug!("active regex {} at {:?}", a.matcher(), a.literal().span),
                None => tracing::debug!("no active regex"),
            }
        }
        self.active = active;
    }

    /// Open the sample document beside the current views unless the
    /// preview view is still visible.
    fn ensure_target<H: Host + ?Sized>(&mut self, host: &mut H) {
        let visible = host.visible_views();
        if self
            .target
            .is_some_and(|target| visible.iter().any(|v| v.id == target))
        {
            return;
        }
        self.target = Some(host.open_beside(self.sample));
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
