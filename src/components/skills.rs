//! Skills section: categorized grid of skill cards.

use leptos::prelude::*;

use crate::content::SKILL_CATEGORIES;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section class="skills" id="skills">
            <h2 class="heading reveal">"My Skills"</h2>
            {SKILL_CATEGORIES
                .iter()
                .map(|category| {
                    view! {
                        <div class="skill-category reveal">
                            <h3 class="skill-category-heading">{category.heading}</h3>
                            <div class="skills-container">
                                {category
                                    .skills
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <div class="glass-card skill-card reveal">
                                                <i class=skill.icon></i>
                                                <p>{skill.name}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}
