//! About section.

use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about" id="about">
            <div class="about-text reveal">
                <h2 class="heading">
                    "About "<span>"Me"</span>
                </h2>
                <h3>"Architecting the Web, One Line of Code at a Time"</h3>
                <p>
                    "As a developer, I am driven by a deep passion for both the logical \
                     challenges of backend architecture and the creative process of \
                     crafting intuitive user interfaces."
                </p>
                <p>
                    "My philosophy is centered on writing clean, scalable, and maintainable \
                     code. I thrive in collaborative environments where I can contribute to \
                     meaningful projects and continuously learn from my peers."
                </p>
                <a href="#contact" class="btn">
                    "Let's Talk"
                </a>
            </div>
        </section>
    }
}
