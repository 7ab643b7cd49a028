//! This module contains the frontend components for the entry page.

use crate::form::EntryForm;
use crate::record::{ColorType, Field, Shift};
use crate::sink::{ConsoleSink, EntrySink};
use leptos::logging::warn;
use leptos::prelude::*;
use strum::IntoEnumIterator;

mod select_field;
mod text_field;

pub use select_field::SelectField;
pub use text_field::TextField;

/// Acknowledgement banner for the last submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Submitted,
    Rejected,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Submitted => "Production entry submitted successfully!",
            Notice::Rejected => "Please fix the validation errors before submitting.",
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            Notice::Submitted => "status success",
            Notice::Rejected => "status error",
        }
    }
}

/// ### EntryFormView Component
/// The whole entry page: heading, the field rows, submit/reset actions and
/// the status line. Submitted entries go to the console sink.
///
/// ### Parameters
/// `form` the page's form controller signal
/// `notice` acknowledgement from the last submit attempt
#[component]
pub fn EntryFormView(
    form: RwSignal<EntryForm>,
    notice: RwSignal<Option<Notice>>,
) -> impl IntoView {
    let sink = ConsoleSink;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submitted = form.write().submit();
        match submitted {
            Some(entry) => {
                if let Err(error) = sink.record(&entry) {
                    warn!("entry hand-off failed: {error}");
                }
                notice.set(Some(Notice::Submitted));
            }
            None => notice.set(Some(Notice::Rejected)),
        }
    };

    let on_reset = move |_| {
        form.write().reset();
        notice.set(None);
    };

    let shift_options = Shift::iter()
        .map(|shift| (shift.to_string(), shift.label()))
        .collect::<Vec<_>>();
    let color_options = ColorType::iter()
        .map(|color| (color.to_string(), color.label()))
        .collect::<Vec<_>>();

    view! {
        <div class="form-container">
            <h2 class="form-title">"Production Entry Form"</h2>
            <form class="form" on:submit=on_submit>
                <div class="form-row">
                    <TextField field=Field::Date form input_type="date" />
                    <SelectField field=Field::Shift form prompt="Select Shift" options=shift_options />
                </div>
                <div class="form-row">
                    <TextField field=Field::Operator form placeholder="Enter operator name" />
                    <TextField field=Field::Helper form placeholder="Enter helper name" />
                </div>
                <div class="form-row">
                    <TextField field=Field::DesignNo form placeholder="Enter design number" />
                    <TextField
                        field=Field::DesignStitch
                        form
                        input_type="number"
                        placeholder="Enter stitch count"
                        min="1"
                    />
                </div>
                <div class="form-row">
                    <SelectField field=Field::ColorType form prompt="Select Color Type" options=color_options />
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">"Submit Entry"</button>
                    <button type="button" class="btn btn-secondary" on:click=on_reset>
                        "Reset Form"
                    </button>
                </div>
            </form>
            <StatusLine notice />
        </div>
    }
}

/// Shows the acknowledgement from the last submit attempt, if any.
#[component]
pub fn StatusLine(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    view! {
        <Show when=move || notice.get().is_some()>
            <div class=move || notice.get().map(Notice::css_class).unwrap_or_default()>
                {move || notice.get().map(Notice::message)}
            </div>
        </Show>
    }
}
