//! Sessions Panel

use leptos::*;

use clinic::FormKind;

use crate::components::{CrudForm, NewRecordButton, Panel};

#[component]
pub fn SessionsPanel() -> impl IntoView {
    view! {
        <Panel id="sessions">
            <div class="panel-header">
                <h1 class="text-3xl font-bold">"Sessions"</h1>
                <NewRecordButton kind=FormKind::Session id="newSessionBtn" label="New session" />
            </div>

            <CrudForm kind=FormKind::Session cancel_id="cancelSessionBtn">
                <label for="sessionPatient">"Patient"</label>
                <input id="sessionPatient" name="patient" type="text" />

                <label for="sessionDate">"Date"</label>
                <input id="sessionDate" name="date" type="datetime-local" />

                <label for="sessionNotes">"Notes"</label>
                <textarea id="sessionNotes" name="notes" rows="3"></textarea>
            </CrudForm>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Patient"</th>
                        <th>"Date"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td colspan="3" class="text-gray-400">"No sessions yet."</td>
                    </tr>
                </tbody>
            </table>
        </Panel>
    }
}
