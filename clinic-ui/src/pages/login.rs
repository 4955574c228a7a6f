//! Login Page
//!
//! Standalone sign-in screen. A successful login navigates to the
//! configured post-login page.

use leptos::*;

use crate::components::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-screen">
            <div class="login-card">
                <div class="text-center mb-6">
                    <span class="text-4xl">"🩺"</span>
                    <p class="text-gray-400 mt-2">"Clinic management"</p>
                </div>
                <LoginForm />
            </div>
        </div>
    }
}
