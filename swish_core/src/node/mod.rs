// Copyright 2026 the Swish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node tree data model.
//!
//! A *node* is an element in a document tree. Each node has:
//!
//! - An identity ([`NodeId`]) — a generational handle that becomes stale when
//!   the node is destroyed, preventing use-after-free bugs at the API level.
//! - Topology — parent, first-child, and sibling links forming an ordered tree.
//! - **Local properties** set by the caller:
//!   [`offset`](NodeStore::set_offset) (position relative to the parent's
//!   document origin), [`size`](NodeStore::set_size), and
//!   [`flags`](NodeStore::set_flags) (the revealable marker).
//! - **Computed properties** produced by [`evaluate`](NodeStore::evaluate):
//!   `document_origin` (sum of ancestor offsets — the node's position in
//!   document space).
//! - **Reveal state** written only by [`sweep`](NodeStore::sweep): a boolean
//!   that transitions from `false` to `true` exactly once and never back.
//!
//! Nodes are stored in struct-of-arrays layout with index-based handles for
//! cache-friendly traversal.
//!
//! # Dirty tracking
//!
//! Property mutations automatically mark the corresponding dirty channel
//! (see [`dirty`](crate::dirty)):
//!
//! - **GEOMETRY** — propagates to all descendants, since document origins
//!   are inherited.
//! - **MARKER** — local-only; only the modified node is marked.
//! - **TOPOLOGY** — structural changes (add/remove child, create/destroy
//!   node) that trigger a traversal-order rebuild.

mod evaluate;
mod id;
mod store;
mod traverse;

pub use evaluate::TreeChanges;
pub use id::{INVALID, NodeId};
pub use store::{NodeFlags, NodeStore};
pub use traverse::Children;
