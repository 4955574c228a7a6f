//! Page Panel
//!
//! Wrapper for one `page-content` region; hidden unless it is the shell's
//! current page.

use leptos::*;

use crate::state::use_shell;

#[component]
pub fn Panel(id: &'static str, children: Children) -> impl IntoView {
    let shell = use_shell();

    view! {
        <section
            id=id
            class="page-content"
            class:hidden=move || shell.signals.is_panel_hidden(id)
        >
            {children()}
        </section>
    }
}
