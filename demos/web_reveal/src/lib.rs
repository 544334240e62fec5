// Copyright 2026 the Swish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: scroll-revealed text blocks driven by `swish_backend_web`.
//!
//! Builds a tall page of paragraph blocks carrying the base marker class,
//! subscribes a [`ScrollListener`], and runs a [`DomRevealer`] sweep per
//! scroll tick. A fixed HUD shows sweep metrics from [`RevealTracker`].
//!
//! Build with: `wasm-pack build --target web demos/web_reveal`
//!
//! Then serve `demos/web_reveal/` and open `index.html` in a browser.
//!
//! [`ScrollListener`]: swish_backend_web::ScrollListener
//! [`DomRevealer`]: swish_backend_web::DomRevealer
//! [`RevealTracker`]: swish_harness::RevealTracker

// Browser-only crate; keep native `cargo check` runs free of dead-code
// warnings.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "only the wasm build runs this code")
)]

extern crate alloc;

use alloc::format;
use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use swish_backend_web::{DomRevealer, RevealClasses, ScrollListener, current_viewport};
use swish_core::viewport::Viewport;
use swish_harness::{RevealTracker, SweepSample};

const NUM_BLOCKS: u32 = 24;
const BLOCK_GAP_PX: f64 = 320.0;

const PAGE_CSS: &str = "
body { background: #1e1e2e; color: #cdd6f4; font-family: sans-serif; margin: 0; }
.swish {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.8s ease, transform 0.8s ease;
    max-width: 32rem;
    margin: 0 auto;
    padding: 1rem;
}
.swish.swish-in { opacity: 1; transform: none; }
#hud {
    position: fixed;
    top: 8px;
    right: 8px;
    font: 12px monospace;
    background: rgba(0, 0, 0, 0.6);
    padding: 6px 10px;
    border-radius: 6px;
    white-space: pre;
}
";

struct DemoState {
    revealer: DomRevealer,
    tracker: RevealTracker<32>,
    hud: HtmlElement,
}

/// Demo entry point, invoked by the module loader via `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");
    let body = document.body().expect("no body");

    install_page_css(&document)?;

    // Tall column of revealable blocks.
    for i in 0..NUM_BLOCKS {
        let block: HtmlElement = document.create_element("p")?.unchecked_into();
        block.set_class_name("swish");
        block.set_text_content(Some(&format!(
            "Block {} of {NUM_BLOCKS} — scrolls into view and fades in.",
            i + 1
        )));
        let _ = block
            .style()
            .set_property("margin-bottom", &format!("{BLOCK_GAP_PX}px"));
        body.append_child(&block)?;
    }

    let hud: HtmlElement = document.create_element("div")?.unchecked_into();
    hud.set_id("hud");
    body.append_child(&hud)?;

    let state = Rc::new(RefCell::new(DemoState {
        revealer: DomRevealer::new(document, RevealClasses::default()),
        tracker: RevealTracker::new(),
        hud,
    }));

    // Reveal whatever is already inside the first viewport before the user
    // ever scrolls.
    let initial_viewport: Viewport = current_viewport(&window);
    {
        let s = state.borrow();
        let _ = s.revealer.sweep(&initial_viewport);
    }

    let state_cb = Rc::clone(&state);
    let perf_window = window.clone();
    let listener = ScrollListener::new(window, move |tick| {
        let mut s = state_cb.borrow_mut();

        let t0 = perf_now(&perf_window);
        let newly_revealed = s.revealer.sweep(&tick.viewport);
        let sweep_ms = perf_now(&perf_window) - t0;

        let report = s.tracker.observe(SweepSample {
            scanned: NUM_BLOCKS,
            newly_revealed,
            sweep_ms,
        });
        let sparkline = s.tracker.sparkline_ascii(0.0, 2.0);
        s.hud.set_text_content(Some(&format!(
            "{}\nsweeps {}  revealed {}  coverage {:.0}%",
            sparkline,
            report.total_sweeps,
            report.total_revealed,
            report.coverage * 100.0
        )));
    });
    listener.start();

    // Keep the listener alive — there is no graceful shutdown on the web.
    core::mem::forget(listener);

    Ok(())
}

fn install_page_css(document: &Document) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(PAGE_CSS));
    document
        .head()
        .expect("no document head")
        .append_child(&style)?;
    Ok(())
}

fn perf_now(window: &web_sys::Window) -> f64 {
    window.performance().map_or(0.0, |p| p.now())
}
