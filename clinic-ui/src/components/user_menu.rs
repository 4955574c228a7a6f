//! Top Bar
//!
//! Sidebar toggle and the user menu dropdown.
//!
//! The dropdown has no click handler of its own. A single window listener
//! classifies every click against `#userMenuToggle` and `#userMenu` and
//! hands it to the shell once, so the click that opens the dropdown is
//! never also treated as an outside click.

use leptos::*;
use wasm_bindgen::JsCast;

use clinic::ClickTarget;

use crate::state::use_shell;

/// Header bar component
#[component]
pub fn TopBar() -> impl IntoView {
    let shell = use_shell();

    let handle = window_event_listener(ev::click, move |ev| {
        shell.click(classify_click(&ev));
    });
    on_cleanup(move || handle.remove());

    let menu_link = move |target: &'static str| {
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            shell.navigate(target);
        }
    };

    view! {
        <header class="topbar">
            <button
                id="menuToggle"
                type="button"
                class="menu-toggle"
                on:click=move |_| shell.toggle_sidebar()
            >
                "☰"
            </button>

            <div id="userMenu" class="user-menu">
                <button id="userMenuToggle" type="button" class="user-menu-toggle">
                    <span class="avatar">"👤"</span>
                    <span>"My account"</span>
                </button>

                <div
                    id="userDropdown"
                    class="user-dropdown"
                    class:hidden=move || shell.signals.dropdown_hidden.get()
                >
                    <a href="#" data-page="profile" on:click=menu_link("profile")>"Profile"</a>
                    <a href="#" data-page="logout" on:click=menu_link("logout")>"Log out"</a>
                </div>
            </div>
        </header>
    }
}

fn classify_click(ev: &web_sys::MouseEvent) -> ClickTarget {
    let target = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok());
    classify_element(target.as_ref())
}

/// Trigger wins over the surrounding menu; anything else is outside
fn classify_element(target: Option<&web_sys::Element>) -> ClickTarget {
    let within = |selector: &str| {
        target
            .and_then(|element| element.closest(selector).ok().flatten())
            .is_some()
    };

    if within("#userMenuToggle") {
        ClickTarget::UserMenuTrigger
    } else if within("#userMenu") {
        ClickTarget::InsideUserMenu
    } else {
        ClickTarget::Outside
    }
}
