//! Patients Panel

use leptos::*;

use crate::components::Panel;

#[component]
pub fn PatientsPanel() -> impl IntoView {
    let on_submit = |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        tracing::info!(form = "patientForm", "Record form submitted");
    };

    view! {
        <Panel id="patients">
            <div class="panel-header">
                <h1 class="text-3xl font-bold">"Patients"</h1>
            </div>

            <form id="patientForm" class="crud-form" on:submit=on_submit>
                <label for="patientName">"Full name"</label>
                <input id="patientName" name="name" type="text" />

                <label for="patientEmail">"Email"</label>
                <input id="patientEmail" name="email" type="email" />

                <label for="patientPhone">"Phone"</label>
                <input id="patientPhone" name="phone" type="tel" />

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">"Add patient"</button>
                </div>
            </form>
        </Panel>
    }
}
