// Copyright 2026 the Swish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the scroll loop.
//!
//! Instrumented scroll loops report their progress through the [`TraceSink`]
//! trait, one method per event. Every method defaults to a no-op, so a sink
//! only implements the events it wants.
//!
//! [`Tracer`] carries an optional `&mut dyn TraceSink` through the loop.
//! Without the `trace` feature its methods compile away entirely; with it,
//! each call is an `Option` check followed by a dynamic dispatch.
//!
//! # Crate features
//!
//! - `trace` — compiles in the `Tracer` method bodies.

use crate::reveal::RevealChanges;
use crate::viewport::ScrollTick;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the backend delivers a scroll signal.
#[derive(Clone, Copy, Debug)]
pub struct ScrollSignalEvent {
    /// Monotonic scroll-event counter.
    pub tick_index: u64,
    /// Document-space offset of the viewport top at the time of the event.
    pub scroll_y: f64,
    /// Viewport height at the time of the event.
    pub viewport_height: f64,
}

impl From<&ScrollTick> for ScrollSignalEvent {
    fn from(tick: &ScrollTick) -> Self {
        Self {
            tick_index: tick.tick_index,
            scroll_y: tick.viewport.scroll_y,
            viewport_height: tick.viewport.height,
        }
    }
}

/// Emitted after a sweep completes.
#[derive(Clone, Copy, Debug)]
pub struct SweepSummary {
    /// Scroll-event counter of the tick that triggered the sweep.
    pub tick_index: u64,
    /// Live nodes scanned during the sweep.
    pub scanned: u32,
    /// Nodes that transitioned to revealed during the sweep.
    pub newly_revealed: u32,
}

impl SweepSummary {
    /// Builds a summary from a sweep's changes plus the scan size.
    ///
    /// # Panics
    ///
    /// Panics if the sweep revealed more than `u32::MAX` nodes, which cannot
    /// happen for a store of raw `u32` slots.
    #[must_use]
    pub fn new(tick_index: u64, scanned: u32, changes: &RevealChanges) -> Self {
        Self {
            tick_index,
            scanned,
            newly_revealed: u32::try_from(changes.revealed.len())
                .expect("slot count exceeds u32"),
        }
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the scroll loop.
///
/// Every method has a no-op default body; override only the events of
/// interest.
pub trait TraceSink {
    /// Called when a scroll signal is received.
    fn on_scroll_signal(&mut self, e: &ScrollSignalEvent) {
        _ = e;
    }

    /// Called after a sweep completes.
    fn on_sweep_summary(&mut self, s: &SweepSummary) {
        _ = s;
    }
}

/// A [`TraceSink`] that drops every event on the floor.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Wraps an optional [`TraceSink`] behind the `trace` feature gate.
///
/// With the feature off every method is an empty body; with it on, each
/// method takes one `Option` branch before dispatching.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that forwards events to `sink`.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer with no sink attached.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ScrollSignalEvent`].
    #[inline]
    pub fn scroll_signal(&mut self, e: &ScrollSignalEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scroll_signal(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SweepSummary`].
    #[inline]
    pub fn sweep_summary(&mut self, s: &SweepSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_sweep_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
