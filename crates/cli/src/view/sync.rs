// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! View synchronizer: keeps both highlight layers of every view in line
//! with the active literal.
//!
//! Decorations are derived from scratch on every resync and compared with
//! what was last drawn; only layers that differ are sent to the host.

use std::collections::HashMap;

use crate::host::Host;
use crate::literal::ActiveRegex;
use crate::pattern::evaluate;

use super::{DecorationState, HighlightStyle, ViewId, ViewRole, VisibleView};

/// Owns the decoration state of every view it has drawn into.
#[derive(Debug, Default)]
pub struct ViewSynchronizer {
    tracked: HashMap<ViewId, DecorationState>,
}

impl ViewSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Role of `view` given the active literal and the preview view.
    ///
    /// The preview view is a target even when it also shows the literal's
    /// own document; matches win over the origin highlight there.
    pub fn classify(
        view: &VisibleView,
        active: Option<&ActiveRegex>,
        target: Option<ViewId>,
    ) -> ViewRole {
        let Some(active) = active else {
            return ViewRole::Irrelevant;
        };
        if target == Some(view.id) {
            ViewRole::Target
        } else if view.document == active.document() {
            ViewRole::Source
        } else {
            ViewRole::Irrelevant
        }
    }

    /// Recompute roles and decorations for every visible view.
    ///
    /// Views tracked earlier but no longer visible are cleared and
    /// forgotten. Calling this twice with the same inputs leaves the
    /// state unchanged and renders nothing the second time.
    pub fn resync<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        active: Option<&ActiveRegex>,
        target: Option<ViewId>,
        augment: bool,
    ) {
        let visible = host.visible_views();

        let retired: Vec<ViewId> = self
            .tracked
            .keys()
            .filter(|id| !visible.iter().any(|v| v.id == **id))
            .copied()
            .collect();
        for id in retired {
            if let Some(previous) = self.tracked.remove(&id) {
                tracing::debug!("retiring {}", id);
                apply(host, id, &previous, &DecorationState::default());
            }
        }

        for view in &visible {
            let role = Self::classify(view, active, target);
            let desired = match (role, active) {
                (ViewRole::Target, Some(active)) => DecorationState {
                    origin: Vec::new(),
                    matches: host
                        .document(view.document)
                        .map(|doc| evaluate(active.matcher(), doc.text(), augment))
                        .unwrap_or_default(),
                },
                (ViewRole::Source, Some(active)) => DecorationState {
                    origin: host
                        .document(view.document)
                        .map(|doc| vec![active.literal().span.to_span(doc)])
                        .unwrap_or_default(),
                    matches: Vec::new(),
                },
                _ => DecorationState::default(),
            };

            let previous = self.tracked.remove(&view.id).unwrap_or_default();
            tracing::trace!(
                "{} as {:?}: {} origin, {} match spans",
                view.id,
                role,
                desired.origin.len(),
                desired.matches.len()
            );
            apply(host, view.id, &previous, &desired);

            if role != ViewRole::Irrelevant {
                self.tracked.insert(view.id, desired);
            }
        }
    }

    /// Decorations last drawn into `view`, `None` when it is not tracked.
    pub fn state(&self, view: ViewId) -> Option<&DecorationState> {
        self.tracked.get(&view)
    }

    pub fn tracked_views(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.tracked.keys().copied()
    }
}

/// Push each layer that changed between `previous` and `desired`.
fn apply<H: Host + ?Sized>(
    host: &mut H,
    view: ViewId,
    previous: &DecorationState,
    desired: &DecorationState,
) {
    for style in HighlightStyle::ALL {
        if previous.layer(style) != desired.layer(style) {
            host.render(view, style, desired.layer(style));
        }
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
