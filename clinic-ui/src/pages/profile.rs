//! Profile Panel
//!
//! Account details and password change.

use leptos::*;

use crate::components::Panel;

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let on_submit = |form: &'static str| {
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            tracing::info!(form, "Record form submitted");
        }
    };

    view! {
        <Panel id="profile">
            <div class="panel-header">
                <h1 class="text-3xl font-bold">"Profile"</h1>
            </div>

            <section class="card">
                <h2 class="text-xl font-semibold mb-4">"Account"</h2>
                <form id="profileForm" class="crud-form" on:submit=on_submit("profileForm")>
                    <label for="profileName">"Name"</label>
                    <input id="profileName" name="name" type="text" />

                    <label for="profileEmail">"Email"</label>
                    <input id="profileEmail" name="email" type="email" />

                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary">"Save"</button>
                    </div>
                </form>
            </section>

            <section class="card">
                <h2 class="text-xl font-semibold mb-4">"Password"</h2>
                <form id="passwordForm" class="crud-form" on:submit=on_submit("passwordForm")>
                    <label for="currentPassword">"Current password"</label>
                    <input id="currentPassword" name="current_password" type="password" />

                    <label for="newPassword">"New password"</label>
                    <input id="newPassword" name="new_password" type="password" />

                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary">"Change password"</button>
                    </div>
                </form>
            </section>
        </Panel>
    }
}
