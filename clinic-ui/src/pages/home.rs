//! Home Page
//!
//! The dashboard shell: sidebar, top bar and every content panel. The
//! shell is created and initialized here, which routes to the home page or
//! the login panel depending on the stored access token.

use leptos::*;

use clinic::ClientConfig;

use super::dashboard::DashboardPanel;
use super::patients::PatientsPanel;
use super::payments::PaymentsPanel;
use super::profile::ProfilePanel;
use super::sessions::SessionsPanel;
use crate::components::{LoginForm, Panel, Sidebar, TopBar};
use crate::state::provide_shell;

#[component]
pub fn Home() -> impl IntoView {
    let config = use_context::<ClientConfig>().expect("ClientConfig not found");
    let shell = provide_shell(&config.navigation);

    let on_login = Callback::new(move |_| shell.on_login());

    view! {
        <div class="app-layout">
            <Sidebar />

            <div
                id="mainContent"
                class="main-content"
                class:collapsed=move || shell.signals.sidebar_collapsed.get()
            >
                <TopBar />

                <main class="content">
                    <DashboardPanel />
                    <SessionsPanel />
                    <PaymentsPanel />
                    <PatientsPanel />
                    <ProfilePanel />

                    <Panel id="login">
                        <div class="login-card">
                            <LoginForm on_login=on_login />
                        </div>
                    </Panel>
                </main>
            </div>
        </div>
    }
}
