//! CRUD Form Component
//!
//! A record form shown by its "new" button and hidden by its cancel button
//! or by leaving the page.

use leptos::*;

use clinic::FormKind;

use crate::state::use_shell;

#[component]
pub fn CrudForm(
    kind: FormKind,
    /// Element id of the cancel button
    cancel_id: &'static str,
    children: Children,
) -> impl IntoView {
    let shell = use_shell();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        tracing::info!(form = kind.element_id(), "Record form submitted");
        shell.close_form(kind);
    };

    view! {
        <form
            id=kind.element_id()
            class="crud-form"
            class:hidden=move || shell.signals.is_form_hidden(kind)
            on:submit=on_submit
        >
            {children()}

            <div class="form-actions">
                <button type="submit" class="btn btn-primary">"Save"</button>
                <button
                    id=cancel_id
                    type="button"
                    class="btn"
                    on:click=move |_| shell.close_form(kind)
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

/// Button that opens a [`CrudForm`]
#[component]
pub fn NewRecordButton(
    kind: FormKind,
    id: &'static str,
    label: &'static str,
) -> impl IntoView {
    let shell = use_shell();

    view! {
        <button id=id type="button" class="btn btn-primary" on:click=move |_| shell.open_form(kind)>
            {label}
        </button>
    }
}
