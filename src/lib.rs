use leptos::prelude::*;

pub mod errors;
pub mod form;
pub mod frontend;
pub mod record;
pub mod sink;
pub mod validate;

/// Hold logical items of our page
#[derive(Debug)]
pub struct Website {
    // The entry being edited, plus its validation errors
    pub form: RwSignal<form::EntryForm>,
    // Acknowledgement from the last submit attempt
    pub notice: RwSignal<Option<frontend::Notice>>,
}

impl Default for Website {
    fn default() -> Self {
        Website {
            form: RwSignal::new(form::EntryForm::default()),
            notice: RwSignal::new(None),
        }
    }
}

impl Website {
    pub fn app() -> impl IntoView {
        let website = Website::default();
        let form = website.form;
        let notice = website.notice;

        view! { <frontend::EntryFormView form notice /> }
    }
}
