//! Passive scroll listener driving the sticky header and active nav link.
//!
//! On every scroll event the current offset is compared against the live
//! section offsets and the derived `ScrollState` is written into the
//! provided signal, but only when it actually changed so components are not
//! re-rendered per scrolled pixel. The listener is registered passive so it
//! can never block rendering.

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, Document, HtmlElement, Window};

    use crate::state::scroll::ScrollState;

    /// Owns the live listener; detach on component teardown.
    pub struct ScrollListener {
        callback: Closure<dyn FnMut()>,
    }

    impl ScrollListener {
        /// Remove the listener from the window.
        pub fn detach(&self) {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    self.callback.as_ref().unchecked_ref(),
                );
            }
        }
    }

    /// Attach the scroll handler and run it once so the initial state
    /// (top of page, first section active) is published before any scrolling.
    ///
    /// # Errors
    ///
    /// Returns `Err` outside a browser context or if registration fails.
    pub fn attach(state: RwSignal<ScrollState>) -> Result<ScrollListener, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        recompute(&window, &document, state);

        let handler_window = window.clone();
        let callback: Closure<dyn FnMut()> = Closure::new(move || {
            if let Some(document) = handler_window.document() {
                recompute(&handler_window, &document, state);
            }
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(ScrollListener { callback })
    }

    fn recompute(window: &Window, document: &Document, state: RwSignal<ScrollState>) {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let sections = section_offsets(document);
        let next = ScrollState::recompute(scroll_y, &sections);
        if state.with_untracked(|current| *current != next) {
            state.set(next);
        }
    }

    /// `(id, top)` pairs for every `<section>` in document order.
    fn section_offsets(document: &Document) -> Vec<(String, f64)> {
        let Ok(list) = document.query_selector_all("section") else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|el| (el.id(), f64::from(el.offset_top())))
            .collect()
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{ScrollListener, attach};
