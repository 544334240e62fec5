// Copyright 2026 the Swish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree evaluation and change tracking.
//!
//! Each evaluation drains the dirty channels in a fixed order:
//!
//! 1. **GEOMETRY** — Drain dirty indices, recompute each node's
//!    `document_origin` as `parent_origin + local_offset`.
//! 2. **MARKER** — Drain dirty indices (no recomputation; backends read the
//!    current flags directly from the store).
//! 3. **TOPOLOGY** — Drain and discard (the traversal order was already
//!    rebuilt at the start of evaluation if needed).
//!
//! [`TreeChanges`] carries raw slot indices (`u32`) instead of [`NodeId`]
//! handles. Backends feed them straight into the `*_at()` accessors (for
//! example [`document_origin_at`](super::NodeStore::document_origin_at)),
//! skipping the generation check a handle lookup would pay on every access.
//!
//! [`NodeId`]: super::NodeId

use alloc::vec::Vec;

use kurbo::Point;

use super::id::INVALID;
use super::store::NodeStore;
use crate::dirty;

/// The set of changes produced by a single [`NodeStore::evaluate`] call.
///
/// Each field holds the raw slot indices that changed in that category;
/// backends walk them to apply incremental updates.
#[derive(Clone, Debug, Default)]
pub struct TreeChanges {
    /// Nodes whose document origin or size was recomputed.
    pub origins: Vec<u32>,
    /// Nodes whose marker flags changed.
    pub markers: Vec<u32>,
    /// Nodes added since the last evaluate.
    pub added: Vec<u32>,
    /// Nodes removed since the last evaluate.
    pub removed: Vec<u32>,
    /// Whether the tree topology changed (traversal order was rebuilt).
    pub topology_changed: bool,
}

impl TreeChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.origins.clear();
        self.markers.clear();
        self.added.clear();
        self.removed.clear();
        self.topology_changed = false;
    }
}

impl NodeStore {
    /// Evaluates the node tree, recomputing dirty document origins and
    /// returning the set of changes.
    ///
    /// This rebuilds the traversal order if topology changed, then drains
    /// each dirty channel and recomputes document origins in
    /// parent-before-child order.
    pub fn evaluate(&mut self) -> TreeChanges {
        let mut changes = TreeChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Allocation-free variant of [`evaluate`](Self::evaluate) writing into
    /// a caller-owned buffer.
    pub fn evaluate_into(&mut self, changes: &mut TreeChanges) {
        changes.clear();

        // Topology changes invalidate the cached traversal.
        if self.traversal_dirty {
            self.rebuild_traversal_order();
            changes.topology_changed = true;
            self.traversal_dirty = false;
        }

        // Drain GEOMETRY channel — collect dirty indices, then recompute.
        let dirty_origins: Vec<u32> = self
            .dirty
            .drain(dirty::GEOMETRY)
            .affected()
            .deterministic()
            .run()
            .collect();
        for &idx in &dirty_origins {
            let parent_idx = self.parent[idx as usize];
            let parent_origin = if parent_idx != INVALID {
                self.document_origin[parent_idx as usize]
            } else {
                Point::ZERO
            };
            self.document_origin[idx as usize] = parent_origin + self.local_offset[idx as usize];
        }
        changes.origins = dirty_origins;

        // Drain MARKER channel — no recomputation, just collect.
        changes.markers = self
            .dirty
            .drain(dirty::MARKER)
            .deterministic()
            .run()
            .collect();

        // TOPOLOGY entries carry no per-node payload; drain and discard.
        let _: Vec<u32> = self
            .dirty
            .drain(dirty::TOPOLOGY)
            .deterministic()
            .run()
            .collect();

        // Hand the lifecycle lists to the caller, leaving empty ones behind.
        core::mem::swap(&mut self.pending_added, &mut changes.added);
        core::mem::swap(&mut self.pending_removed, &mut changes.removed);
    }

    /// Returns the current traversal order (depth-first pre-order).
    ///
    /// Stale until [`evaluate`](Self::evaluate) has run after the most
    /// recent topology change.
    #[must_use]
    pub fn traversal_order(&self) -> &[u32] {
        &self.traversal_order
    }

    /// Rebuilds the depth-first pre-order traversal of all live nodes.
    fn rebuild_traversal_order(&mut self) {
        self.traversal_order.clear();
        // Start from roots.
        for idx in 0..self.len {
            if self.parent[idx as usize] == INVALID && !self.free_list.contains(&idx) {
                self.dfs_collect(idx);
            }
        }
    }

    /// Pushes `idx` and its subtree in pre-order.
    fn dfs_collect(&mut self, idx: u32) {
        self.traversal_order.push(idx);
        let mut child = self.first_child[idx as usize];
        while child != INVALID {
            self.dfs_collect(child);
            child = self.next_sibling[child as usize];
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;

    #[test]
    fn evaluate_computes_document_origins() {
        let mut store = NodeStore::new();
        let parent = store.create_node();
        let child = store.create_node();

        store.set_offset(parent, Vec2::new(0.0, 100.0));
        store.set_offset(child, Vec2::new(10.0, 40.0));
        store.add_child(parent, child);

        let _changes = store.evaluate();

        assert_eq!(store.document_origin(parent), Point::new(0.0, 100.0));
        assert_eq!(store.document_origin(child), Point::new(10.0, 140.0));
    }

    #[test]
    fn no_change_evaluate_returns_empty() {
        let mut store = NodeStore::new();
        let _root = store.create_node();

        // Consume the creation events.
        let _ = store.evaluate();

        // Nothing changed since, so the next evaluate is empty.
        let changes = store.evaluate();
        assert!(changes.origins.is_empty());
        assert!(changes.markers.is_empty());
        assert!(changes.added.is_empty());
        assert!(changes.removed.is_empty());
        assert!(!changes.topology_changed);
    }

    #[test]
    fn traversal_order_is_depth_first() {
        let mut store = NodeStore::new();
        let a = store.create_node();
        let b = store.create_node();
        let c = store.create_node();
        let d = store.create_node();

        // Tree: a -> [b -> [d], c]
        store.add_child(a, b);
        store.add_child(a, c);
        store.add_child(b, d);

        let _ = store.evaluate();

        let order = store.traversal_order();
        assert_eq!(order, &[a.idx, b.idx, d.idx, c.idx]);
    }

    #[test]
    fn evaluate_multiple_roots() {
        let mut store = NodeStore::new();
        let root_a = store.create_node();
        let child_a = store.create_node();
        let root_b = store.create_node();

        store.add_child(root_a, child_a);

        store.set_offset(root_a, Vec2::new(0.0, 50.0));
        store.set_offset(child_a, Vec2::new(0.0, 25.0));
        store.set_offset(root_b, Vec2::new(0.0, 300.0));

        let _ = store.evaluate();

        assert_eq!(store.document_origin(root_a), Point::new(0.0, 50.0));
        assert_eq!(store.document_origin(child_a), Point::new(0.0, 75.0));
        assert_eq!(store.document_origin(root_b), Point::new(0.0, 300.0));
    }

    #[test]
    fn evaluate_propagates_origins_to_descendants() {
        let mut store = NodeStore::new();
        let grandparent = store.create_node();
        let parent = store.create_node();
        let child = store.create_node();

        store.add_child(grandparent, parent);
        store.add_child(parent, child);

        store.set_offset(grandparent, Vec2::new(0.0, 100.0));
        store.set_offset(parent, Vec2::new(0.0, 10.0));
        store.set_offset(child, Vec2::new(0.0, 5.0));
        let _ = store.evaluate();

        // Moving the grandparent shifts the whole subtree.
        store.set_offset(grandparent, Vec2::new(0.0, 200.0));
        let changes = store.evaluate();

        assert!(changes.origins.contains(&parent.idx));
        assert!(changes.origins.contains(&child.idx));
        assert_eq!(store.document_origin(child), Point::new(0.0, 215.0));
    }

    #[test]
    fn evaluate_added_and_removed_lifecycle() {
        let mut store = NodeStore::new();
        let id = store.create_node();

        // First evaluate: node should appear in `added`.
        let changes = store.evaluate();
        assert!(changes.added.contains(&id.idx));
        assert!(changes.removed.is_empty());

        // Second evaluate: no lifecycle events.
        let changes = store.evaluate();
        assert!(changes.added.is_empty());
        assert!(changes.removed.is_empty());

        // Destroy: should appear in `removed` on next evaluate.
        store.destroy_node(id);
        let changes = store.evaluate();
        assert!(changes.removed.contains(&id.idx));
        assert!(changes.added.is_empty());
    }

    #[test]
    fn topology_add_child_recomputes_origins_for_subtree() {
        let mut store = NodeStore::new();
        let parent = store.create_node();
        let child = store.create_node();
        let grandchild = store.create_node();
        store.add_child(child, grandchild);
        let _ = store.evaluate();

        store.set_offset(parent, Vec2::new(0.0, 400.0));
        let _ = store.evaluate();

        store.add_child(parent, child);
        let changes = store.evaluate();

        assert!(changes.origins.contains(&child.idx));
        assert!(changes.origins.contains(&grandchild.idx));
        assert_eq!(store.document_origin(child), Point::new(0.0, 400.0));
        assert_eq!(store.document_origin(grandchild), Point::new(0.0, 400.0));
    }

    #[test]
    fn topology_remove_from_parent_recomputes_origins_for_subtree() {
        let mut store = NodeStore::new();
        let parent = store.create_node();
        let child = store.create_node();
        let grandchild = store.create_node();

        store.add_child(parent, child);
        store.add_child(child, grandchild);

        store.set_offset(parent, Vec2::new(0.0, 400.0));
        let _ = store.evaluate();
        assert_eq!(store.document_origin(grandchild), Point::new(0.0, 400.0));

        store.remove_from_parent(child);
        let changes = store.evaluate();

        assert!(changes.origins.contains(&child.idx));
        assert!(changes.origins.contains(&grandchild.idx));
        assert_eq!(store.document_origin(child), Point::ZERO);
        assert_eq!(store.document_origin(grandchild), Point::ZERO);
    }

    #[test]
    fn topology_reparent_recomputes_origins_for_subtree() {
        let mut store = NodeStore::new();
        let old_parent = store.create_node();
        let new_parent = store.create_node();
        let child = store.create_node();

        store.add_child(old_parent, child);
        store.set_offset(old_parent, Vec2::new(0.0, 100.0));
        store.set_offset(new_parent, Vec2::new(0.0, 900.0));
        let _ = store.evaluate();
        assert_eq!(store.document_origin(child), Point::new(0.0, 100.0));

        store.reparent(child, new_parent);
        let changes = store.evaluate();

        assert!(changes.origins.contains(&child.idx));
        assert_eq!(store.document_origin(child), Point::new(0.0, 900.0));
    }

    #[test]
    fn evaluate_into_reuses_buffer() {
        let mut store = NodeStore::new();
        let a = store.create_node();
        let b = store.create_node();

        let mut changes = TreeChanges::default();

        // First evaluate: both nodes added.
        store.evaluate_into(&mut changes);
        assert_eq!(changes.added.len(), 2);

        // Mutate one node.
        store.set_offset(a, Vec2::new(0.0, 7.0));
        store.evaluate_into(&mut changes);

        // Buffer should be cleared and refilled (not accumulating).
        assert!(changes.added.is_empty(), "added should be cleared");
        assert!(
            changes.origins.contains(&a.idx),
            "origin change should be present"
        );
        assert!(
            !changes.origins.contains(&b.idx),
            "unchanged node should not appear"
        );
    }
}
