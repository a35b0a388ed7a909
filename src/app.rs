//! Root application component: state contexts, theme persistence, and the
//! scroll/reveal wiring, composing all page sections.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::particles_layer::ParticlesLayer;
use crate::components::profiles::Profiles;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::state::menu::MenuState;
use crate::state::scroll::ScrollState;
use crate::util::theme_storage;

/// Root application component.
///
/// Provides one `RwSignal` context per state domain, keeps the persisted
/// theme and the `<body>` style flag in sync with the in-memory value, and
/// registers the scroll listener and reveal observers with teardown tied to
/// this component's lifetime.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(theme_storage::read_preference());
    let menu = RwSignal::new(MenuState::default());
    let scroll = RwSignal::new(ScrollState::default());

    provide_context(theme);
    provide_context(menu);
    provide_context(scroll);

    // Invariant: storage and the body class always follow the signal.
    Effect::new(move || {
        let current = theme.get();
        theme_storage::apply(current);
        theme_storage::store(current);
    });

    #[cfg(feature = "hydrate")]
    wire_choreography(scroll);

    view! {
        <Stylesheet id="portfolio" href="/pkg/portfolio.css"/>
        <Title text="Saicharan Maddimsetti | Portfolio"/>

        <ParticlesLayer/>
        <Header/>
        <main>
            <Hero/>
            <About/>
            <Profiles/>
            <Skills/>
            <Projects/>
            <Contact/>
        </main>
        <Footer/>
    }
}

/// Attach the scroll listener and reveal observers once the page is
/// rendered, and release both on unmount.
#[cfg(feature = "hydrate")]
fn wire_choreography(scroll: RwSignal<ScrollState>) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::util::observe::{RevealObservers, observe_reveals};
    use crate::util::scroll_listener::{ScrollListener, attach};

    let listener: Rc<RefCell<Option<ScrollListener>>> = Rc::new(RefCell::new(None));
    let observers: Rc<RefCell<Option<RevealObservers>>> = Rc::new(RefCell::new(None));

    let effect_listener = Rc::clone(&listener);
    let effect_observers = Rc::clone(&observers);
    Effect::new(move || {
        // Effects run after the section tree is in the DOM.
        if effect_listener.borrow().is_none() {
            match attach(scroll) {
                Ok(guard) => *effect_listener.borrow_mut() = Some(guard),
                Err(err) => log::warn!("scroll listener unavailable: {err:?}"),
            }
        }
        if effect_observers.borrow().is_none() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                match observe_reveals(&document) {
                    Ok(guards) => *effect_observers.borrow_mut() = Some(guards),
                    Err(err) => log::warn!("reveal observers unavailable: {err:?}"),
                }
            }
        }
    });

    on_cleanup(move || {
        if let Some(guard) = listener.borrow_mut().take() {
            guard.detach();
        }
        if let Some(guards) = observers.borrow_mut().take() {
            guards.disconnect();
        }
    });
}
