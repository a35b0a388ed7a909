//! Contact section: structural form only, no submission endpoint is wired.

use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section class="contact" id="contact">
            <h2 class="heading reveal">"Let's Build Something Together"</h2>
            <form action="#" class="reveal">
                <div class="input-group">
                    <label for="full-name">"Full Name"</label>
                    <input
                        type="text"
                        id="full-name"
                        name="name"
                        placeholder="Your Name"
                        required
                    />
                </div>
                <div class="input-group">
                    <label for="email">"Email Address"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        placeholder="Your Email"
                        required
                    />
                </div>
                <div class="input-group">
                    <label for="message">"Your Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="7"
                        placeholder="Hi Saicharan, I'd like to connect about..."
                        required
                    ></textarea>
                </div>
                <input type="submit" value="Send Message" class="btn"/>
            </form>
        </section>
    }
}
