//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use clinic::ClientConfig;

use crate::pages::{Home, LoginPage};

/// Root application component
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // Provide configuration to all components
    provide_context(config);

    view! {
        <Router>
            <Routes>
                <Route path="/" view=LoginPage />
                <Route path="/home" view=Home />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn btn-primary">
                "Go to sign in"
            </A>
        </div>
    }
}
