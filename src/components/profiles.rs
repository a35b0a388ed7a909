//! Coding-profiles section: one glass card per platform.

use leptos::prelude::*;

use crate::content::PROFILES;

#[component]
pub fn Profiles() -> impl IntoView {
    view! {
        <section class="coding-profiles" id="coding-profiles">
            <h2 class="heading reveal">"Coding Profiles"</h2>
            <div class="profiles-container">
                {PROFILES
                    .iter()
                    .map(|profile| {
                        view! {
                            <a
                                href=profile.href
                                class="glass-card profile-card reveal"
                                target="_blank"
                                rel="noreferrer"
                                title=profile.title
                            >
                                <img
                                    src=profile.logo
                                    alt=profile.logo_alt
                                    class=profile.logo_class
                                />
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
