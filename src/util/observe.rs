//! Reveal-on-scroll wiring via `IntersectionObserver`.
//!
//! Two element populations are tracked with the same 10% visibility
//! threshold but different timing: general `.reveal` elements gain the
//! `visible` class the moment they cross it, while `.project-card` elements
//! are staggered by 300 ms per card in document order for a cascading
//! effect. Every element is unobserved as soon as its reveal is scheduled,
//! so it can never re-trigger. `RevealObservers::disconnect` releases the
//! watch lists on teardown.

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit,
    };

    use crate::state::reveal::{REVEAL_RATIO, RevealTracker};
    use crate::state::scroll::stagger_delay_ms;

    /// CSS class applied to a revealed element.
    const VISIBLE_CLASS: &str = "visible";

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Owns the live observers; disconnect on component teardown.
    pub struct RevealObservers {
        observers: Vec<IntersectionObserver>,
        _callbacks: Vec<ObserverCallback>,
    }

    impl RevealObservers {
        /// Release both watch lists. Already-scheduled stagger timers keep
        /// running; they are one-shot and harmless for the session lifetime.
        pub fn disconnect(&self) {
            for observer in &self.observers {
                observer.disconnect();
            }
        }
    }

    /// Observe both reveal populations under `document`.
    ///
    /// Empty populations are skipped entirely, so a page without reveal
    /// elements sets up nothing.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser rejects the observer configuration.
    pub fn observe_reveals(document: &Document) -> Result<RevealObservers, JsValue> {
        let mut observers = Vec::new();
        let mut callbacks = Vec::new();

        let general = query_elements(document, ".reveal:not(.project-card)");
        if !general.is_empty() {
            let (observer, callback) = observe_population(&general, false)?;
            observers.push(observer);
            callbacks.push(callback);
        }

        let cards = query_elements(document, ".project-card");
        if !cards.is_empty() {
            let (observer, callback) = observe_population(&cards, true)?;
            observers.push(observer);
            callbacks.push(callback);
        }

        Ok(RevealObservers {
            observers,
            _callbacks: callbacks,
        })
    }

    fn query_elements(document: &Document, selector: &str) -> Vec<Element> {
        let Ok(list) = document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn observe_population(
        elements: &[Element],
        staggered: bool,
    ) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
        let population = elements.to_vec();
        let mut tracker = RevealTracker::new(population.len());

        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(index) = population.iter().position(|el| *el == target) else {
                        continue;
                    };
                    if !tracker.mark(index) {
                        continue;
                    }
                    observer.unobserve(&target);
                    if staggered {
                        let delay = stagger_delay_ms(index);
                        Timeout::new(delay, move || {
                            let _ = target.class_list().add_1(VISIBLE_CLASS);
                        })
                        .forget();
                    } else {
                        let _ = target.class_list().add_1(VISIBLE_CLASS);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_RATIO));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        for el in elements {
            observer.observe(el);
        }
        Ok((observer, callback))
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{RevealObservers, observe_reveals};
