// Copyright 2026 the Swish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reveal sweep.
//!
//! A sweep is the core operation of the crate: given a fresh [`Viewport`]
//! snapshot, scan every live node and mark the ones whose top edge has
//! entered the viewport. The scan is:
//!
//! - **Fresh** — the set of revealable nodes is not cached between sweeps;
//!   every call walks the current slots and checks the revealable flag.
//! - **Idempotent** — a second sweep with unchanged geometry produces no new
//!   changes; the resulting marker set is identical.
//! - **Monotonic** — revealed is a one-way transition. No geometry change
//!   (e.g. scrolling back up) ever clears it, and no API in this crate can.
//! - **Independent** — each node's outcome depends only on its own document
//!   origin and the viewport, never on other nodes.
//!
//! A sweep cannot fail: an empty store, or a store with no revealable nodes,
//! is a no-op that returns empty changes.
//!
//! [`RevealChanges`] uses raw slot indices like
//! [`TreeChanges`](crate::node::TreeChanges), so backends apply marker
//! mutations through the `*_at()` accessors without generation checks.

use alloc::vec::Vec;

use crate::node::NodeStore;
use crate::viewport::Viewport;

/// The set of nodes newly revealed by a single [`NodeStore::sweep`] call.
#[derive(Clone, Debug, Default)]
pub struct RevealChanges {
    /// Raw slot indices of nodes that transitioned to revealed this sweep.
    ///
    /// Nodes that were already revealed never reappear here.
    pub revealed: Vec<u32>,
}

impl RevealChanges {
    /// Clears the change list.
    pub fn clear(&mut self) {
        self.revealed.clear();
    }

    /// Returns whether this sweep revealed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

impl NodeStore {
    /// Sweeps the tree against a viewport snapshot, marking every revealable
    /// node whose top edge has entered the viewport.
    ///
    /// Document origins must be current — call
    /// [`evaluate`](Self::evaluate) first if geometry or topology changed.
    /// Returns the nodes that transitioned this sweep; already-revealed
    /// nodes are skipped, so redundant sweeps return empty changes.
    pub fn sweep(&mut self, viewport: &Viewport) -> RevealChanges {
        let mut changes = RevealChanges::default();
        self.sweep_into(viewport, &mut changes);
        changes
    }

    /// Like [`sweep`](Self::sweep), but reuses a caller-provided buffer to
    /// avoid allocation.
    pub fn sweep_into(&mut self, viewport: &Viewport, changes: &mut RevealChanges) {
        changes.clear();

        // Fresh scan: walk the current slots, no cached revealable list.
        for idx in 0..self.len {
            if !self.flags[idx as usize].revealable
                || self.revealed[idx as usize]
                || self.free_list.contains(&idx)
            {
                continue;
            }
            if viewport.reveals(self.document_origin[idx as usize].y) {
                self.revealed[idx as usize] = true;
                changes.revealed.push(idx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;
    use crate::node::{NodeFlags, NodeId};

    fn revealable_at(store: &mut NodeStore, top: f64) -> NodeId {
        let id = store.create_node();
        store.set_offset(id, Vec2::new(0.0, top));
        store.set_flags(id, NodeFlags { revealable: true });
        id
    }

    #[test]
    fn reveals_node_within_viewport_height() {
        let mut store = NodeStore::new();
        let id = revealable_at(&mut store, 500.0);
        let _ = store.evaluate();

        let changes = store.sweep(&Viewport::new(0.0, 800.0));
        assert_eq!(changes.revealed, &[id.index()]);
        assert!(store.revealed(id));
    }

    #[test]
    fn leaves_node_below_reveal_boundary() {
        let mut store = NodeStore::new();
        let id = revealable_at(&mut store, 1200.0);
        let _ = store.evaluate();

        let changes = store.sweep(&Viewport::new(0.0, 800.0));
        assert!(changes.is_empty());
        assert!(!store.revealed(id));
    }

    #[test]
    fn reveals_after_scrolling_down() {
        let mut store = NodeStore::new();
        let id = revealable_at(&mut store, 1200.0);
        let _ = store.evaluate();

        let _ = store.sweep(&Viewport::new(0.0, 800.0));
        assert!(!store.revealed(id));

        // Scroll down 500: relative top becomes 700, 700 - 800 <= 0.
        let changes = store.sweep(&Viewport::new(500.0, 800.0));
        assert_eq!(changes.revealed, &[id.index()]);
    }

    #[test]
    fn sweep_is_idempotent() {
        let mut store = NodeStore::new();
        let id = revealable_at(&mut store, 500.0);
        let _ = store.evaluate();

        let vp = Viewport::new(0.0, 800.0);
        let first = store.sweep(&vp);
        assert_eq!(first.revealed, &[id.index()]);

        let second = store.sweep(&vp);
        assert!(second.is_empty(), "repeat sweep must not re-report");
        assert!(store.revealed(id));
    }

    #[test]
    fn revealed_is_monotonic_across_scroll_back() {
        let mut store = NodeStore::new();
        let id = revealable_at(&mut store, 1200.0);
        let _ = store.evaluate();

        let _ = store.sweep(&Viewport::new(500.0, 800.0));
        assert!(store.revealed(id));

        // Scrolling back to the top does not un-reveal.
        let changes = store.sweep(&Viewport::new(0.0, 800.0));
        assert!(changes.is_empty());
        assert!(store.revealed(id));
    }

    #[test]
    fn empty_store_sweep_is_a_noop() {
        let mut store = NodeStore::new();
        let changes = store.sweep(&Viewport::new(0.0, 800.0));
        assert!(changes.is_empty());
    }

    #[test]
    fn non_revealable_nodes_are_skipped() {
        let mut store = NodeStore::new();
        let plain = store.create_node();
        store.set_offset(plain, Vec2::new(0.0, 100.0));
        let _ = store.evaluate();

        let changes = store.sweep(&Viewport::new(0.0, 800.0));
        assert!(changes.is_empty());
        assert!(!store.revealed(plain));
    }

    #[test]
    fn outcomes_are_independent_per_node() {
        let mut store = NodeStore::new();
        let near = revealable_at(&mut store, 300.0);
        let far = revealable_at(&mut store, 5000.0);
        let _ = store.evaluate();

        let changes = store.sweep(&Viewport::new(0.0, 800.0));
        assert_eq!(changes.revealed, &[near.index()]);
        assert!(store.revealed(near));
        assert!(!store.revealed(far), "neighbor state must not leak");
    }

    #[test]
    fn destroyed_nodes_are_not_swept() {
        let mut store = NodeStore::new();
        let keep = revealable_at(&mut store, 100.0);
        let gone = revealable_at(&mut store, 200.0);
        store.destroy_node(gone);
        let _ = store.evaluate();

        let changes = store.sweep(&Viewport::new(0.0, 800.0));
        assert_eq!(changes.revealed, &[keep.index()]);
    }

    #[test]
    fn nested_node_uses_document_origin() {
        let mut store = NodeStore::new();
        let section = store.create_node();
        store.set_offset(section, Vec2::new(0.0, 1000.0));
        let child = store.create_node();
        store.set_offset(child, Vec2::new(0.0, 100.0));
        store.set_flags(child, NodeFlags { revealable: true });
        store.add_child(section, child);
        let _ = store.evaluate();

        // Document top is 1100, not 100: a height-800 viewport at the top
        // must not reveal it.
        let changes = store.sweep(&Viewport::new(0.0, 800.0));
        assert!(changes.is_empty());

        let changes = store.sweep(&Viewport::new(400.0, 800.0));
        assert_eq!(changes.revealed, &[child.index()]);
    }

    #[test]
    fn sweep_into_reuses_buffer() {
        let mut store = NodeStore::new();
        let a = revealable_at(&mut store, 100.0);
        let b = revealable_at(&mut store, 2000.0);
        let _ = store.evaluate();

        let mut changes = RevealChanges::default();
        store.sweep_into(&Viewport::new(0.0, 800.0), &mut changes);
        assert_eq!(changes.revealed, &[a.index()]);

        store.sweep_into(&Viewport::new(1500.0, 800.0), &mut changes);
        assert_eq!(
            changes.revealed,
            &[b.index()],
            "buffer is cleared between sweeps"
        );
    }
}
