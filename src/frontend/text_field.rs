//! This is the labelled input component for the entry page.

use crate::form::EntryForm;
use crate::record::Field;
use leptos::prelude::*;

/// ### TextField Component
/// One labelled input of the entry form: date, free text or number,
/// depending on `input_type`. Edits flow straight into the form controller,
/// which also clears the field's pending error.
///
/// ### Parameters
/// `field` which record field this input edits
/// `form` the page's form controller signal
#[component]
pub fn TextField(
    field: Field,
    form: RwSignal<EntryForm>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] min: Option<&'static str>,
) -> impl IntoView {
    let value = Signal::derive(move || form.with(|form| form.value(field).to_string()));
    let error = Signal::derive(move || form.with(|form| form.errors().message(field)));

    view! {
        <div class="form-group">
            <label for=field.key() class="form-label">{field.label()} " *"</label>
            <input
                type=input_type
                id=field.key()
                name=field.key()
                prop:value=value
                placeholder=placeholder
                min=min
                class=move || {
                    if error.get().is_some() { "form-input error" } else { "form-input" }
                }
                on:input=move |ev| form.write().update_field(field, event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <span class="error-message">{move || error.get()}</span>
            </Show>
        </div>
    }
}
