// Copyright 2026 the Swish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Swish splits platform-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Scroll-signal source** — Produces [`ScrollTick`] values via a platform
//!   mechanism (e.g. a DOM `scroll` event listener). This is backend-specific
//!   and not abstracted by a trait because subscription setup and lifecycle
//!   differ fundamentally across hosts.
//!
//! - **Presenter** — Implements the [`Presenter`] trait to mirror tree and
//!   marker changes onto platform-native elements (e.g. DOM `classList`
//!   mutations).
//!
//! # Crate boundaries
//!
//! `swish_core` owns the data model, evaluation, the sweep, and this
//! contract module. Backend crates depend on `swish_core` and provide
//! platform glue. Application code depends on both and wires them together
//! in a scroll loop.
//!
//! [`ScrollTick`]: crate::viewport::ScrollTick

use crate::node::{NodeStore, TreeChanges};
use crate::reveal::RevealChanges;

/// Mirrors evaluated tree changes and reveal markers onto a platform-native
/// element tree.
///
/// Both DOM-based presenters and test doubles implement this trait, enabling
/// generic scroll loops.
///
/// # Scroll loop pseudocode
///
/// A typical scroll callback wires the pieces together like this:
///
/// ```rust,ignore
/// fn on_scroll(tick: ScrollTick) {
///     // Evaluate: drain dirty channels, recompute document origins
///     let changes = store.evaluate();
///     presenter.apply(&store, &changes);
///
///     // Sweep: mark nodes entering the viewport, fresh scan per tick
///     let revealed = store.sweep(&tick.viewport);
///     presenter.reveal(&store, &revealed);
/// }
/// ```
pub trait Presenter {
    /// Applies the given [`TreeChanges`] to the backing element tree,
    /// reading current property values from `store` as needed.
    fn apply(&mut self, store: &NodeStore, changes: &TreeChanges);

    /// Applies the reveal marker for each entry in [`RevealChanges`].
    ///
    /// Implementations add the marker and never remove it — the transition
    /// is one-way by contract.
    fn reveal(&mut self, store: &NodeStore, changes: &RevealChanges);
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Vec2;

    use super::*;
    use crate::node::NodeFlags;
    use crate::viewport::Viewport;

    /// Test double that records the marker mutations it is asked to apply.
    #[derive(Default)]
    struct RecordingPresenter {
        applied: Vec<u32>,
        revealed: Vec<u32>,
    }

    impl Presenter for RecordingPresenter {
        fn apply(&mut self, _store: &NodeStore, changes: &TreeChanges) {
            self.applied.extend_from_slice(&changes.added);
        }

        fn reveal(&mut self, _store: &NodeStore, changes: &RevealChanges) {
            self.revealed.extend_from_slice(&changes.revealed);
        }
    }

    #[test]
    fn scroll_loop_drives_presenter() {
        let mut store = NodeStore::new();
        let id = store.create_node();
        store.set_offset(id, Vec2::new(0.0, 500.0));
        store.set_flags(id, NodeFlags { revealable: true });

        let mut presenter = RecordingPresenter::default();

        let changes = store.evaluate();
        presenter.apply(&store, &changes);
        let revealed = store.sweep(&Viewport::new(0.0, 800.0));
        presenter.reveal(&store, &revealed);

        assert_eq!(presenter.applied, &[id.index()]);
        assert_eq!(presenter.revealed, &[id.index()]);

        // Second tick with unchanged geometry: nothing new reaches the
        // presenter.
        let changes = store.evaluate();
        presenter.apply(&store, &changes);
        let revealed = store.sweep(&Viewport::new(0.0, 800.0));
        presenter.reveal(&store, &revealed);
        assert_eq!(presenter.revealed.len(), 1);
    }
}
