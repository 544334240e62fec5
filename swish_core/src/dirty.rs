// Copyright 2026 the Swish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Swish uses multi-channel dirty tracking (via [`understory_dirty`]) to
//! propagate invalidation through the node tree. Each channel represents an
//! independent category of change.
//!
//! # Propagation semantics
//!
//! - **Propagating** — [`GEOMETRY`] uses
//!   [`EagerPolicy`](understory_dirty::EagerPolicy) and has dependency edges
//!   from child to parent. Marking a parent dirty automatically marks all
//!   descendants, because document-space origins are inherited (a node's
//!   origin is the sum of its ancestors' local offsets).
//!
//! - **Local-only** — [`MARKER`] is marked with the default policy. Only the
//!   explicitly marked node appears in the drain output, since the
//!   revealable marker is a per-node property.
//!
//! - **Structural** — [`TOPOLOGY`] is marked on topology mutations
//!   (add/remove child, create/destroy node). It triggers a traversal-order
//!   rebuild during evaluation but does not propagate to descendants.
//!
//! # Consumption
//!
//! Callers never need to query dirty state directly. Each
//! [`NodeStore::evaluate`](crate::node::NodeStore::evaluate) call drains all
//! channels and surfaces the results as
//! [`TreeChanges`](crate::node::TreeChanges), which backends
//! [consume](crate::backend::Presenter::apply) to apply incremental updates.
//! Reveal-marker transitions are reported separately by
//! [`sweep`](crate::node::NodeStore::sweep), not through a dirty channel,
//! because they are one-way and computed rather than set by callers.

use understory_dirty::Channel;

/// Offset or size changed — requires document-origin recomputation for
/// descendants.
pub const GEOMETRY: Channel = Channel::new(0);

/// Revealable marker changed — no propagation needed.
pub const MARKER: Channel = Channel::new(1);

/// Tree topology changed — triggers traversal order rebuild.
pub const TOPOLOGY: Channel = Channel::new(2);
