//! Payments Panel

use leptos::*;

use clinic::FormKind;

use crate::components::{CrudForm, NewRecordButton, Panel};

#[component]
pub fn PaymentsPanel() -> impl IntoView {
    view! {
        <Panel id="payments">
            <div class="panel-header">
                <h1 class="text-3xl font-bold">"Payments"</h1>
                <NewRecordButton kind=FormKind::Payment id="newPaymentBtn" label="New payment" />
            </div>

            <CrudForm kind=FormKind::Payment cancel_id="cancelPaymentBtn">
                <label for="paymentPatient">"Patient"</label>
                <input id="paymentPatient" name="patient" type="text" />

                <label for="paymentAmount">"Amount"</label>
                <input id="paymentAmount" name="amount" type="number" min="0" step="0.01" />

                <label for="paymentMethod">"Method"</label>
                <select id="paymentMethod" name="method">
                    <option value="cash">"Cash"</option>
                    <option value="card">"Card"</option>
                    <option value="transfer">"Transfer"</option>
                </select>
            </CrudForm>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Patient"</th>
                        <th>"Amount"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td colspan="3" class="text-gray-400">"No payments recorded."</td>
                    </tr>
                </tbody>
            </table>
        </Panel>
    }
}
