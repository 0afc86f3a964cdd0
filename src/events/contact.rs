use crate::alert;
use crate::constants::{
    CONTACT_FORM_ID, CONTACT_SUBMIT_ID, CONTACT_SUBMIT_LABEL_ID, FORM_FIELD_NAMES,
};
use crate::dom;
use crate::frame::SharedContactForm;
use crate::mailer::EmailJsMailer;
use portfolio_core::{ContactForm, Field, SubmitOutcome};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Read `(name, value)` from an input or textarea event target.
fn field_from_event(ev: &web::Event) -> Option<(String, String)> {
    let target = ev.target()?;
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    target
        .dyn_ref::<web::HtmlTextAreaElement>()
        .map(|ta| (ta.name(), ta.value()))
}

fn set_control_value(document: &web::Document, name: &str, value: &str) {
    let selector = format!("#{} [name=\"{}\"]", CONTACT_FORM_ID, name);
    let Ok(Some(el)) = document.query_selector(&selector) else {
        return;
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(ta) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        ta.set_value(value);
    }
}

pub fn wire_contact_form(document: &web::Document, form: SharedContactForm) {
    // input events bubble to the form element
    let form_input = form.clone();
    dom::add_listener(document, CONTACT_FORM_ID, "input", move |ev| {
        if let Some((name, value)) = field_from_event(&ev) {
            match Field::from_name(&name) {
                Some(field) => form_input.borrow_mut().set_field(field, &value),
                None => log::debug!("[contact] ignoring input from unknown field {:?}", name),
            }
        }
    });

    let form_submit = form.clone();
    let doc_submit = document.clone();
    dom::add_listener(document, CONTACT_FORM_ID, "submit", move |ev| {
        ev.prevent_default();
        let outcome = form_submit.borrow_mut().submit();
        if let SubmitOutcome::Recorded { dispatched } = outcome {
            log::info!("[contact] submission recorded (dispatched={})", dispatched);
        }
        sync_contact(&doc_submit, &form_submit.borrow());
    });

    sync_contact(document, &form.borrow());
}

/// Push controller state into the DOM: alert, button and field values.
pub fn sync_contact(document: &web::Document, form: &ContactForm<EmailJsMailer>) {
    alert::render(document, form.notification());
    dom::set_text(document, CONTACT_SUBMIT_LABEL_ID, form.submit_label());
    if let Some(btn) = document
        .get_element_by_id(CONTACT_SUBMIT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        btn.set_disabled(form.is_submitting());
    }
    let draft = form.draft();
    for (name, value) in FORM_FIELD_NAMES
        .iter()
        .zip([&draft.name, &draft.email, &draft.message])
    {
        set_control_value(document, name, value);
    }
}
