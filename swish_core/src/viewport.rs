// Copyright 2026 the Swish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport geometry and the scroll signal.
//!
//! A [`Viewport`] is a read-only snapshot of the visible region of the
//! document: the vertical scroll offset and the viewport height. Backends
//! capture a fresh snapshot for every scroll event — neither value is cached
//! between invocations — and deliver it to the scroll loop as a
//! [`ScrollTick`].
//!
//! The reveal predicate lives here: a node reveals once its top edge has
//! risen to within one viewport-height of the viewport top, i.e. once the
//! top edge is at or above the bottom edge of the viewport.

use core::fmt;

/// A snapshot of the visible region of the document.
///
/// `scroll_y` is the document-space offset of the viewport top; `height` is
/// the viewport height. Both are read from the host per scroll signal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Document-space offset of the viewport's top edge.
    pub scroll_y: f64,
    /// Height of the visible region.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport snapshot.
    #[inline]
    #[must_use]
    pub const fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }

    /// Returns the position of a document-space top edge relative to the
    /// viewport top.
    ///
    /// Zero means the edge aligns with the viewport top; positive values are
    /// below it, negative above.
    #[inline]
    #[must_use]
    pub fn top_relative(&self, document_top: f64) -> f64 {
        document_top - self.scroll_y
    }

    /// The reveal predicate: whether a node whose top edge sits at
    /// `document_top` has entered the viewport from below.
    ///
    /// True once `top_relative(document_top) - height <= 0` — the top edge
    /// is at or above the viewport's bottom edge. Equality reveals.
    #[inline]
    #[must_use]
    pub fn reveals(&self, document_top: f64) -> bool {
        self.top_relative(document_top) - self.height <= 0.0
    }
}

/// A scroll signal as delivered by a backend.
///
/// Backends emit one tick per host scroll event, unthrottled, each carrying
/// a freshly read [`Viewport`]. The counter increases monotonically for the
/// lifetime of the listener.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTick {
    /// Monotonic scroll-event counter.
    pub tick_index: u64,
    /// Viewport snapshot at the time of the event.
    pub viewport: Viewport,
}

impl fmt::Display for ScrollTick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {} (scroll_y {}, height {})",
            self.tick_index, self.viewport.scroll_y, self.viewport.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_relative_subtracts_scroll_offset() {
        let vp = Viewport::new(300.0, 800.0);
        assert_eq!(vp.top_relative(500.0), 200.0);
        assert_eq!(vp.top_relative(100.0), -200.0);
    }

    #[test]
    fn reveals_when_top_within_one_viewport_height() {
        let vp = Viewport::new(0.0, 800.0);
        // top offset 500, height 800: 500 - 800 = -300 <= 0 → revealed.
        assert!(vp.reveals(500.0));
        // top offset 1200, height 800: 1200 - 800 = 400 > 0 → not revealed.
        assert!(!vp.reveals(1200.0));
    }

    #[test]
    fn boundary_equality_reveals() {
        let vp = Viewport::new(0.0, 800.0);
        assert!(vp.reveals(800.0), "top exactly at viewport bottom reveals");
        assert!(!vp.reveals(800.0 + f64::EPSILON * 1024.0));
    }

    #[test]
    fn nodes_above_viewport_reveal() {
        // Already scrolled past: negative relative top still satisfies the
        // predicate.
        let vp = Viewport::new(2000.0, 800.0);
        assert!(vp.reveals(100.0));
    }

    #[test]
    fn scrolling_moves_the_reveal_boundary() {
        // top offset 1200, height 800 → not revealed; after scrolling down
        // 500 the relative top is 700 → 700 - 800 = -100 <= 0 → revealed.
        let before = Viewport::new(0.0, 800.0);
        assert!(!before.reveals(1200.0));
        let after = Viewport::new(500.0, 800.0);
        assert!(after.reveals(1200.0));
    }
}
