// Copyright 2026 the Swish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for swish.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`ScrollListener`]: window `scroll` event source
//! - [`DomPresenter`]: store-driven DOM element management
//! - [`DomRevealer`]: direct selector-query sweep over live DOM geometry

#![no_std]

extern crate alloc;

mod dom;
mod scroll;

pub use dom::{DomPresenter, DomRevealer, RevealClasses};
pub use scroll::ScrollListener;
pub use swish_core::backend::Presenter;

use swish_core::viewport::Viewport;

/// Reads a fresh [`Viewport`] snapshot from a window.
///
/// Both values are queried per call — nothing is cached — matching the
/// per-signal read the sweep expects.
#[must_use]
pub fn current_viewport(window: &web_sys::Window) -> Viewport {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(scroll_y, height)
}
