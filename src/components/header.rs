//! Site header: logo, mobile menu control, nav links, and theme toggle.

use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::state::menu::MenuState;
use crate::state::scroll::ScrollState;
use crate::state::theme::Theme;

/// Sticky-capable header with active-link highlighting.
///
/// The stuck style and the active link both derive from the shared
/// `ScrollState` signal, which the scroll listener keeps current. Activating
/// any nav link closes the mobile menu if it is open.
#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let scroll = expect_context::<RwSignal<ScrollState>>();

    let header_class = move || {
        if scroll.get().sticky {
            "header sticky"
        } else {
            "header"
        }
    };
    let menu_icon_class = move || {
        if menu.get().open {
            "fas fa-bars fa-times"
        } else {
            "fas fa-bars"
        }
    };
    let navbar_class = move || if menu.get().open { "navbar active" } else { "navbar" };

    let on_menu = move |_| menu.update(MenuState::toggle);
    let on_theme = move |_| theme.update(|t| *t = t.toggled());

    view! {
        <header class=header_class>
            <a href="#home" class="logo">
                "Saicharan"<span>"."</span>
            </a>
            <i class=menu_icon_class id="menu-icon" on:click=on_menu></i>
            <nav class=navbar_class>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        let section = link.section_id();
                        let is_active =
                            move || scroll.get().active.as_deref() == Some(section);
                        view! {
                            <a
                                href=link.href
                                class:active=is_active
                                on:click=move |_| menu.update(MenuState::close_if_open)
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <i
                    class=move || theme.get().icon_class()
                    id="theme-toggle-icon"
                    on:click=on_theme
                ></i>
            </nav>
        </header>
    }
}
