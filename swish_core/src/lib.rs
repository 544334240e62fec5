// Copyright 2026 the Swish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core node tree and viewport reveal sweep for scroll-driven reveal effects.
//!
//! `swish_core` provides the data model for marking elements "revealed" as a
//! viewport scrolls over them. It is `no_std` compatible (with `alloc`) and
//! uses array-based struct-of-arrays storage with index handles for
//! cache-friendly traversal.
//!
//! # Architecture
//!
//! The crate is organized around a scroll loop that turns host scroll signals
//! into incremental marker updates:
//!
//! ```text
//!   Backend (scroll-signal source)
//!       │
//!       ▼
//!   ScrollTick ──► NodeStore::evaluate() ──► TreeChanges ──► Presenter::apply()
//!                       │
//!                       ▼
//!   NodeStore::sweep(&Viewport) ──► RevealChanges ──► Presenter::reveal()
//! ```
//!
//! **[`node`]** — Struct-of-arrays node tree with generational handles.
//! Local offsets, sizes, and the revealable marker are set by the caller;
//! document-space origins are computed by evaluation.
//!
//! **[`dirty`]** — Multi-channel dirty tracking via `understory_dirty`.
//! GEOMETRY propagates to descendants; MARKER is local-only; TOPOLOGY
//! triggers a traversal rebuild.
//!
//! **[`viewport`]** — The viewport snapshot, the reveal predicate, and the
//! [`ScrollTick`](viewport::ScrollTick) signal backends deliver per scroll
//! event.
//!
//! **[`reveal`]** — The sweep itself: a fresh scan over all live nodes that
//! marks entering nodes revealed. The revealed state is monotonic; nothing
//! in this crate ever clears it.
//!
//! **[`backend`]** — The [`Presenter`](backend::Presenter) trait that
//! platform backends implement to mirror tree and marker changes onto
//! native elements.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! scroll-loop instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod dirty;
pub mod node;
pub mod reveal;
pub mod trace;
pub mod viewport;
