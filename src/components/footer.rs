//! Footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-text">
                <p>"\u{a9} 2025 Saicharan Maddimsetti | All Rights Reserved."</p>
            </div>
        </footer>
    }
}
