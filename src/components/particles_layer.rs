//! Bridge component between the Leptos UI and the imperative `particles`
//! engine.
//!
//! Mounts a full-viewport `<canvas>` and, on the browser side, creates the
//! engine exactly once per process, drives it with `requestAnimationFrame`,
//! forwards pointer events, and re-applies a freshly derived configuration
//! whenever the theme changes. If the engine cannot start (no 2D context),
//! the canvas stays inert and the rest of the page is unaffected.

use leptos::html;
use leptos::prelude::*;

/// Decorative particle background layer.
#[component]
pub fn ParticlesLayer() -> impl IntoView {
    let canvas_ref: NodeRef<html::Canvas> = NodeRef::new();

    #[cfg(feature = "hydrate")]
    browser::wire(canvas_ref);

    view! { <canvas class="particles-layer" id="particles" node_ref=canvas_ref></canvas> }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::html;
    use leptos::prelude::*;
    use particles::config::ParticleConfig;
    use particles::engine::{Engine, js_random};
    use particles::field::Point;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use crate::state::theme::Theme;

    type SharedEngine = Rc<RefCell<Engine>>;
    type FrameCallback = Closure<dyn FnMut(f64)>;

    thread_local! {
        // Lazy, at-most-once engine initialization for the process lifetime.
        static ENGINE: RefCell<Option<SharedEngine>> = const { RefCell::new(None) };
    }

    /// Hook the canvas up once it is mounted, and keep the engine config in
    /// sync with the theme.
    pub fn wire(canvas_ref: NodeRef<html::Canvas>) {
        let theme = expect_context::<RwSignal<Theme>>();

        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            ENGINE.with(|slot| {
                if slot.borrow().is_some() {
                    return;
                }
                match init(canvas.into(), theme.get_untracked()) {
                    Ok(engine) => {
                        attach_pointer_listeners(&engine);
                        start_frame_loop(Rc::clone(&engine));
                        *slot.borrow_mut() = Some(engine);
                    }
                    Err(err) => log::warn!("particle layer disabled: {err:?}"),
                }
            });
        });

        Effect::new(move || {
            let config = ParticleConfig::with_color(theme.get().particle_color());
            ENGINE.with(|slot| {
                if let Some(engine) = slot.borrow().as_ref() {
                    engine.borrow_mut().apply_config(config);
                }
            });
        });
    }

    fn init(canvas: web_sys::HtmlCanvasElement, theme: Theme) -> Result<SharedEngine, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        let dpr = window.device_pixel_ratio();

        let config = ParticleConfig::with_color(theme.particle_color());
        let mut engine = Engine::new(canvas, config)?;
        engine.resize(width, height, dpr, &mut js_random);
        Ok(Rc::new(RefCell::new(engine)))
    }

    /// Drive the simulation from `requestAnimationFrame`, feeding the engine
    /// wall-clock deltas. A failed frame stops the loop and logs once.
    fn start_frame_loop(engine: SharedEngine) {
        let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let next = Rc::clone(&holder);
        let mut last_ts: Option<f64> = None;

        *holder.borrow_mut() = Some(Closure::new(move |ts: f64| {
            // Clamp so a backgrounded tab doesn't produce a huge jump.
            let dt = last_ts.map_or(0.0, |prev| ((ts - prev) / 1000.0).clamp(0.0, 0.1));
            last_ts = Some(ts);
            if let Err(err) = engine.borrow_mut().frame(dt) {
                log::warn!("particle frame failed, stopping loop: {err:?}");
                return;
            }
            request_frame(&next);
        }));
        request_frame(&holder);
    }

    fn request_frame(holder: &Rc<RefCell<Option<FrameCallback>>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(callback) = holder.borrow().as_ref() {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }

    /// Hover repulsion, click spawning, and pointer-leave. These listeners
    /// live for the whole session, so they are intentionally leaked.
    fn attach_pointer_listeners(engine: &SharedEngine) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let hover_engine = Rc::clone(engine);
        let on_move: Closure<dyn FnMut(web_sys::MouseEvent)> =
            Closure::new(move |event: web_sys::MouseEvent| {
                let point = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
                hover_engine.borrow_mut().hover(point);
            });
        let _ = window
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        on_move.forget();

        let click_engine = Rc::clone(engine);
        let on_click: Closure<dyn FnMut(web_sys::MouseEvent)> =
            Closure::new(move |event: web_sys::MouseEvent| {
                let point = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
                click_engine.borrow_mut().push(point, &mut js_random);
            });
        let _ =
            window.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();

        if let Some(document) = window.document() {
            let leave_engine = Rc::clone(engine);
            let on_leave: Closure<dyn FnMut(web_sys::MouseEvent)> =
                Closure::new(move |_event: web_sys::MouseEvent| {
                    leave_engine.borrow_mut().pointer_left();
                });
            let _ = document
                .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
            on_leave.forget();
        }
    }
}
