// Copyright 2026 the Swish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window `scroll` event source.
//!
//! [`ScrollListener`] subscribes once to the window's `scroll` event and
//! invokes a user callback with a [`ScrollTick`] per event. The viewport
//! snapshot is read fresh inside each callback — scroll offset and height
//! are never cached between events. Delivery is unthrottled: one tick per
//! host signal, by design.
//!
//! The subscription is held for the lifetime of the listener (typically the
//! document lifetime); [`stop`](ScrollListener::stop) and `Drop` remove it.
//!
//! [`ScrollTick`]: swish_core::viewport::ScrollTick

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;

use swish_core::viewport::ScrollTick;

use crate::current_viewport;

type ScrollClosure = Closure<dyn FnMut()>;

/// A window `scroll` subscription that emits [`ScrollTick`] events.
///
/// Create with [`ScrollListener::new`], then call [`start`](Self::start) to
/// begin receiving callbacks. The subscription stays registered until
/// [`stop`](Self::stop) is called or the `ScrollListener` is dropped.
///
/// [`ScrollTick`]: swish_core::viewport::ScrollTick
pub struct ScrollListener {
    inner: Rc<ScrollInner>,
}

struct ScrollInner {
    /// The JS closure registered as the `scroll` event handler.
    ///
    /// Lives in a separate `RefCell` from `callback`: `start()` writes it
    /// once, and `stop()` only needs it for `removeEventListener`.
    closure: RefCell<Option<ScrollClosure>>,

    /// The user-supplied callback that receives [`ScrollTick`] events.
    ///
    /// [`ScrollTick`]: swish_core::viewport::ScrollTick
    callback: RefCell<Box<dyn FnMut(ScrollTick)>>,

    /// Monotonically increasing event counter (becomes
    /// `ScrollTick::tick_index`).
    tick_counter: Cell<u64>,

    /// The window whose scroll signal is being observed.
    window: web_sys::Window,

    /// Whether the subscription is currently registered.
    running: Cell<bool>,
}

impl ScrollListener {
    /// Creates a new `ScrollListener` that is **not yet subscribed**.
    ///
    /// `callback` will receive a [`ScrollTick`] on each scroll event once
    /// [`start`](Self::start) is called.
    ///
    /// [`ScrollTick`]: swish_core::viewport::ScrollTick
    pub fn new(window: web_sys::Window, callback: impl FnMut(ScrollTick) + 'static) -> Self {
        Self {
            inner: Rc::new(ScrollInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                tick_counter: Cell::new(0),
                window,
                running: Cell::new(false),
            }),
        }
    }

    /// Subscribes to the window's `scroll` event.
    ///
    /// If already subscribed, this is a no-op. The handler is registered
    /// exactly once; every scroll event produces one tick.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move || {
            if !inner.running.get() {
                return;
            }

            // Fresh snapshot per event; the host owns the geometry.
            let viewport = current_viewport(&inner.window);

            let tick_index = inner.tick_counter.get();
            inner.tick_counter.set(tick_index + 1);

            let tick = ScrollTick {
                tick_index,
                viewport,
            };

            // The callback borrow ends before this closure returns, so it
            // never overlaps a `closure` borrow in start/stop.
            inner.callback.borrow_mut()(tick);
        }) as Box<dyn FnMut()>);

        let _ = self
            .inner
            .window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    /// Unsubscribes from the window's `scroll` event.
    ///
    /// Can be re-subscribed by calling [`start`](Self::start) again.
    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        if let Some(ref closure) = *self.inner.closure.borrow() {
            let _ = self
                .inner
                .window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
    }

    /// Returns `true` if the subscription is currently registered.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        self.stop();
        // Release the JS closure; the handler was already deregistered.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for ScrollListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollListener")
            .field("running", &self.inner.running.get())
            .field("tick_counter", &self.inner.tick_counter.get())
            .finish()
    }
}
