//! Projects section: showcase cards with demo and code links.
//!
//! Cards carry the `project-card` class, which puts them in the staggered
//! reveal population instead of the general one.

use leptos::prelude::*;

use crate::content::PROJECTS;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="projects" id="projects">
            <h2 class="heading reveal">"My Projects"</h2>
            <div class="projects-container">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <div class="glass-card project-card reveal">
                                <img src=project.image alt=project.image_alt/>
                                <div class="project-content">
                                    <h4>{project.title}</h4>
                                    <p>{project.description}</p>
                                    <div class="project-links">
                                        <a
                                            href=project.demo_url
                                            target="_blank"
                                            rel="noreferrer"
                                            class="btn"
                                        >
                                            <i class="fas fa-external-link-alt"></i>
                                            " Demo"
                                        </a>
                                        <a
                                            href=project.code_url
                                            target="_blank"
                                            rel="noreferrer"
                                            class="btn btn-secondary"
                                        >
                                            <i class="fab fa-github"></i>
                                            " Code"
                                        </a>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
