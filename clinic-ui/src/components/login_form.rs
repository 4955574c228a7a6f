//! Login Form Component
//!
//! Credential form driven by the core [`LoginController`]. The form is
//! `novalidate`: values go to the server exactly as typed.

use leptos::*;
use std::rc::Rc;

use clinic::{ClientConfig, Credentials, LoginController, LoginOutcome, LoginView};

use crate::api::GlooAuthClient;
use crate::state::LocalStorageTokenStore;

/// Signals behind the error region and the submit button
#[derive(Clone, Copy)]
struct LoginFormView {
    error: RwSignal<String>,
    error_visible: RwSignal<bool>,
    submitting: RwSignal<bool>,
}

impl LoginView for LoginFormView {
    fn show_error(&mut self, message: &str) {
        self.error.set(message.to_string());
        self.error_visible.set(true);
    }

    fn hide_error(&mut self) {
        self.error_visible.set(false);
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.submitting.set(submitting);
    }

    fn navigate(&mut self, href: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            tracing::error!(href, error = ?e, "Post-login navigation failed");
        }
    }
}

/// Login form
#[component]
pub fn LoginForm(
    /// Called after tokens are stored, before the page unloads
    #[prop(optional)]
    on_login: Option<Callback<()>>,
) -> impl IntoView {
    let config = use_context::<ClientConfig>().expect("ClientConfig not found");

    let controller = Rc::new(LoginController::new(
        GlooAuthClient::new(&config.api),
        LocalStorageTokenStore,
        config.navigation.post_login_href.clone(),
    ));

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let form = LoginFormView {
        error: create_rw_signal(String::new()),
        error_visible: create_rw_signal(false),
        submitting: create_rw_signal(false),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        let controller = Rc::clone(&controller);
        let mut view = form;
        let on_login = on_login.clone();

        spawn_local(async move {
            let outcome = controller.submit(credentials, &mut view).await;
            if let (LoginOutcome::LoggedIn(_), Some(on_login)) = (outcome, on_login) {
                on_login.call(());
            }
        });
    };

    view! {
        <form id="loginForm" class="login-form" novalidate=true on:submit=on_submit>
            <h1 class="text-2xl font-bold">"Sign in"</h1>

            <label for="email">"Email"</label>
            <input
                id="email"
                name="email"
                type="email"
                autocomplete="username"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />

            <label for="password">"Password"</label>
            <input
                id="password"
                name="password"
                type="password"
                autocomplete="current-password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />

            <p
                id="loginError"
                class="login-error"
                style:display=move || if form.error_visible.get() { "block" } else { "none" }
            >
                {move || form.error.get()}
            </p>

            <button type="submit" class="btn btn-primary" disabled=move || form.submitting.get()>
                {move || if form.submitting.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}
