//! Home section: intro, typewriter line, social links, portrait.

use leptos::html;
use leptos::prelude::*;

use crate::content::{PORTRAIT_URL, RESUME_URL, SOCIAL_LINKS};

/// Hero section with the cycling typewriter line.
///
/// The typewriter animation is owned by this component: it starts once the
/// target span is mounted and its pending timer is cancelled on unmount.
#[component]
pub fn Hero() -> impl IntoView {
    let typed_ref: NodeRef<html::Span> = NodeRef::new();

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::content::TYPED_STRINGS;
        use crate::util::typewriter::Typewriter;

        let animation: Rc<RefCell<Option<Typewriter>>> = Rc::new(RefCell::new(None));
        let on_mount = Rc::clone(&animation);
        Effect::new(move || {
            if let Some(span) = typed_ref.get() {
                let mut slot = on_mount.borrow_mut();
                if slot.is_none() {
                    let el: web_sys::HtmlElement = span.into();
                    *slot = Some(Typewriter::start(el, TYPED_STRINGS));
                }
            }
        });
        on_cleanup(move || {
            if let Some(animation) = animation.borrow_mut().take() {
                animation.stop();
            }
        });
    }

    view! {
        <section class="home" id="home">
            <div class="home-content reveal">
                <h3>"Full-Stack Developer"</h3>
                <h1>"Saicharan Maddimsetti"</h1>
                <div class="typing-container">
                    <span class="typing-text" node_ref=typed_ref></span>
                </div>
                <p>
                    "I build elegant and efficient digital solutions, transforming complex \
                     problems into seamless user experiences with a strong foundation in \
                     modern web technologies and a passion for competitive programming."
                </p>
                <div class="social-media">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href
                                    target="_blank"
                                    rel="noreferrer"
                                    aria-label=social.label
                                >
                                    <i class=social.icon></i>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <a href=RESUME_URL target="_blank" rel="noreferrer" class="btn btn-secondary">
                    <i class="fas fa-download"></i>
                    " Resume"
                </a>
            </div>
            <div class="home-img reveal">
                <img src=PORTRAIT_URL alt="Saicharan Maddimsetti"/>
            </div>
        </section>
    }
}
