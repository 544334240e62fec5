// Copyright 2026 the Swish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element management.
//!
//! Two integration styles are provided:
//!
//! - [`DomPresenter`] mirrors a [`NodeStore`] into positioned `<div>`
//!   elements and applies incremental [`TreeChanges`] / [`RevealChanges`]
//!   as class-list mutations. The store is the source of truth.
//! - [`DomRevealer`] works against an existing page: it queries the base
//!   marker class fresh on every sweep, reads live DOM geometry, and adds
//!   the reveal class in place. The document is the source of truth.
//!
//! Both add the reveal marker and never remove it.
//!
//! [`NodeStore`]: swish_core::node::NodeStore
//! [`TreeChanges`]: swish_core::node::TreeChanges
//! [`RevealChanges`]: swish_core::reveal::RevealChanges

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, HtmlElement};

use swish_core::backend::Presenter;
use swish_core::node::{NodeStore, TreeChanges};
use swish_core::reveal::RevealChanges;
use swish_core::viewport::Viewport;

/// The pair of marker class names driving the effect.
///
/// `base` tags an element as revealable; `reveal` is added once the element
/// enters the viewport. Styling rules outside this crate interpret the
/// reveal class to run the visual transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealClasses {
    /// The base marker class identifying revealable elements.
    pub base: String,
    /// The class added on reveal.
    pub reveal: String,
}

impl Default for RevealClasses {
    fn default() -> Self {
        Self {
            base: String::from("swish"),
            reveal: String::from("swish-in"),
        }
    }
}

impl RevealClasses {
    /// Returns the CSS selector matching elements carrying the base class.
    #[must_use]
    pub fn selector(&self) -> String {
        format!(".{}", self.base)
    }
}

/// Maps a [`NodeStore`] to live DOM elements, applying incremental updates
/// from [`TreeChanges`] and [`RevealChanges`].
///
/// The presenter owns a container `HtmlElement` to which child `<div>`
/// elements are added and removed. Call [`apply`](Presenter::apply) after
/// each evaluate and [`reveal`](Presenter::reveal) after each sweep.
///
/// [`NodeStore`]: swish_core::node::NodeStore
/// [`TreeChanges`]: swish_core::node::TreeChanges
/// [`RevealChanges`]: swish_core::reveal::RevealChanges
pub struct DomPresenter {
    container: HtmlElement,
    classes: RevealClasses,
    elements: Vec<Option<HtmlElement>>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("container", &"HtmlElement")
            .field("classes", &self.classes)
            .field("elements_len", &self.elements.len())
            .finish()
    }
}

impl DomPresenter {
    /// Creates a presenter that owns the child elements of `container`.
    #[must_use]
    pub fn new(container: HtmlElement, classes: RevealClasses) -> Self {
        Self {
            container,
            classes,
            elements: Vec::new(),
        }
    }

    /// The container element whose children this presenter manages.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// Looks up the DOM element backing slot `idx`, if one exists.
    #[must_use]
    pub fn get_element(&self, idx: u32) -> Option<&HtmlElement> {
        self.elements
            .get(idx as usize)
            .and_then(|slot| slot.as_ref())
    }

    /// Removes and returns the element at slot `idx`.
    fn take_element(&mut self, idx: u32) -> Option<HtmlElement> {
        self.elements.get_mut(idx as usize)?.take()
    }

    /// Records `el` as the element for slot `idx`, growing the map if needed.
    fn put_element(&mut self, idx: u32, el: HtmlElement) {
        let slot = idx as usize;
        if self.elements.len() <= slot {
            self.elements.resize_with(slot + 1, || None);
        }
        self.elements[slot] = Some(el);
    }

    /// Writes position and size styles from the store's computed geometry.
    fn apply_geometry(&self, el: &HtmlElement, store: &NodeStore, idx: u32) {
        let origin = store.document_origin_at(idx);
        let size = store.size_at(idx);
        let s = el.style();
        let _ = s.set_property("left", &format!("{}px", origin.x));
        let _ = s.set_property("top", &format!("{}px", origin.y));
        let _ = s.set_property("width", &format!("{}px", size.width));
        let _ = s.set_property("height", &format!("{}px", size.height));
    }

    /// Syncs the base marker class with the node's revealable flag.
    fn apply_marker(&self, el: &HtmlElement, store: &NodeStore, idx: u32) {
        let list = el.class_list();
        if store.flags_at(idx).revealable {
            let _ = list.add_1(&self.classes.base);
        } else {
            let _ = list.remove_1(&self.classes.base);
        }
    }
}

impl Presenter for DomPresenter {
    /// Applies incremental changes from a [`TreeChanges`] to the DOM.
    ///
    /// [`TreeChanges`]: swish_core::node::TreeChanges
    fn apply(&mut self, store: &NodeStore, changes: &TreeChanges) {
        // 1. Removals
        for &idx in &changes.removed {
            if let Some(el) = self.take_element(idx) {
                el.remove();
            }
        }

        // 2. Additions
        for &idx in &changes.added {
            let doc = self.container.owner_document().expect("no owner document");
            let el: HtmlElement = doc
                .create_element("div")
                .expect("create_element failed")
                .unchecked_into();
            let _ = el.style().set_property("position", "absolute");
            self.apply_geometry(&el, store, idx);
            self.apply_marker(&el, store, idx);
            let _ = self.container.append_child(&el);
            self.put_element(idx, el);
        }

        // 3. Geometry
        for &idx in &changes.origins {
            if let Some(el) = self.get_element(idx) {
                self.apply_geometry(el, store, idx);
            }
        }

        // 4. Markers
        for &idx in &changes.markers {
            if let Some(el) = self.get_element(idx) {
                self.apply_marker(el, store, idx);
            }
        }

        // 5. Topology reorder
        if changes.topology_changed {
            for &idx in store.traversal_order() {
                if let Some(el) = self.get_element(idx) {
                    // appendChild on an existing child moves it to the end.
                    let _ = self.container.append_child(el);
                }
            }
        }
    }

    /// Adds the reveal class for each newly revealed node. Never removes it.
    fn reveal(&mut self, _store: &NodeStore, changes: &RevealChanges) {
        for &idx in &changes.revealed {
            if let Some(el) = self.get_element(idx) {
                let _ = el.class_list().add_1(&self.classes.reveal);
            }
        }
    }
}

/// Sweeps live DOM elements directly, without a store.
///
/// Each [`sweep`](Self::sweep) queries the document for the base marker
/// class **fresh** — there is no cached element list, so elements added or
/// removed between sweeps are picked up automatically — reads each match's
/// bounding rectangle, and adds the reveal class once the top edge has
/// entered the viewport. A selector that matches nothing is a no-op.
pub struct DomRevealer {
    document: Document,
    classes: RevealClasses,
}

impl core::fmt::Debug for DomRevealer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomRevealer")
            .field("classes", &self.classes)
            .finish()
    }
}

impl DomRevealer {
    /// Creates a revealer that sweeps `document` for `classes.base`.
    #[must_use]
    pub fn new(document: Document, classes: RevealClasses) -> Self {
        Self { document, classes }
    }

    /// Sweeps the document once against a viewport snapshot.
    ///
    /// Returns the number of elements newly marked this sweep. Elements
    /// already carrying the reveal class are left untouched, so the sweep is
    /// idempotent and the marker monotonic.
    pub fn sweep(&self, viewport: &Viewport) -> u32 {
        let Ok(list) = self.document.query_selector_all(&self.classes.selector()) else {
            return 0;
        };

        let mut newly_revealed = 0;
        for i in 0..list.length() {
            let Some(node) = list.item(i) else { continue };
            let Ok(el) = node.dyn_into::<Element>() else {
                continue;
            };
            if el.class_list().contains(&self.classes.reveal) {
                continue;
            }

            // getBoundingClientRect().top is already viewport-relative;
            // translate to document space so the shared predicate applies.
            let document_top = viewport.scroll_y + el.get_bounding_client_rect().top();
            if viewport.reveals(document_top) {
                let _ = el.class_list().add_1(&self.classes.reveal);
                newly_revealed += 1;
            }
        }
        newly_revealed
    }
}
