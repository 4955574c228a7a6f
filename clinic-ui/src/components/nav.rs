//! Sidebar Navigation
//!
//! The sidebar link set. Each link declares its target page in `data-page`;
//! the shell marks the one matching the current page as `active`.

use leptos::*;

use crate::state::use_shell;

/// One sidebar entry
pub struct SidebarLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub target: &'static str,
}

/// Sidebar links in document order
pub const SIDEBAR_LINKS: &[SidebarLink] = &[
    SidebarLink {
        label: "Dashboard",
        icon: "🏠",
        target: "dashboard",
    },
    SidebarLink {
        label: "Sessions",
        icon: "📅",
        target: "sessions",
    },
    SidebarLink {
        label: "Payments",
        icon: "💳",
        target: "payments",
    },
    SidebarLink {
        label: "Patients",
        icon: "👥",
        target: "patients",
    },
    SidebarLink {
        label: "Profile",
        icon: "⚙",
        target: "profile",
    },
    SidebarLink {
        label: "Log out",
        icon: "⎋",
        target: "logout",
    },
];

/// Sidebar component
#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = use_shell();

    view! {
        <aside
            id="sidebar"
            class="sidebar"
            class:collapsed=move || shell.signals.sidebar_collapsed.get()
        >
            <div class="sidebar-brand">
                <span class="text-2xl">"🩺"</span>
                <span class="nav-label">"Clinic"</span>
            </div>

            <nav class="sidebar-links">
                {SIDEBAR_LINKS
                    .iter()
                    .enumerate()
                    .map(|(index, link)| view! { <NavLink index=index link=link /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn NavLink(index: usize, link: &'static SidebarLink) -> impl IntoView {
    let shell = use_shell();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        shell.navigate(link.target);
    };

    view! {
        <a
            href="#"
            data-page=link.target
            class="nav-link"
            class:active=move || shell.signals.is_link_active(index)
            on:click=on_click
        >
            <span class="nav-icon">{link.icon}</span>
            <span class="nav-label">{link.label}</span>
        </a>
    }
}
