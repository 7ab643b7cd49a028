//! This is the labelled dropdown component for the entry page.

use crate::form::EntryForm;
use crate::record::Field;
use leptos::prelude::*;

/// ### SelectField Component
/// A labelled dropdown with a blank prompt option plus one option per code.
/// The prompt maps to the empty string, which validation treats as unset.
///
/// ### Parameters
/// `field` which record field this dropdown edits
/// `form` the page's form controller signal
/// `prompt` text of the blank option, e.g. "Select Shift"
/// `options` `(code, label)` pairs in display order
#[component]
pub fn SelectField(
    field: Field,
    form: RwSignal<EntryForm>,
    prompt: &'static str,
    options: Vec<(String, &'static str)>,
) -> impl IntoView {
    let value = Signal::derive(move || form.with(|form| form.value(field).to_string()));
    let error = Signal::derive(move || form.with(|form| form.errors().message(field)));

    view! {
        <div class="form-group">
            <label for=field.key() class="form-label">{field.label()} " *"</label>
            <select
                id=field.key()
                name=field.key()
                prop:value=value
                class=move || {
                    if error.get().is_some() { "form-select error" } else { "form-select" }
                }
                on:change=move |ev| form.write().update_field(field, event_target_value(&ev))
            >
                <option value="">{prompt}</option>
                {options
                    .into_iter()
                    .map(|(code, label)| view! { <option value=code>{label}</option> })
                    .collect_view()}
            </select>
            <Show when=move || error.get().is_some()>
                <span class="error-message">{move || error.get()}</span>
            </Show>
        </div>
    }
}
