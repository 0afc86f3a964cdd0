// Host-side checks that the host page carries what the front end binds to.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use web_constants::*;

const PAGE: &str = include_str!("../index.html");

/// The opening tag of the form control with `name="<name>"`.
fn control_tag(name: &str) -> Option<&'static str> {
    let attr = format!("name=\"{}\"", name);
    let at = PAGE.find(&attr)?;
    let start = PAGE[..at].rfind('<')?;
    let end = at + PAGE[at..].find('>')?;
    Some(&PAGE[start..=end])
}

#[test]
fn every_contact_field_is_required() {
    for name in FORM_FIELD_NAMES {
        let tag = control_tag(name).unwrap_or_else(|| panic!("missing control {name}"));
        assert!(tag.contains(" required"), "{name} not required: {tag}");
    }
}

#[test]
fn page_exposes_bound_element_ids() {
    for id in [
        CANVAS_ID,
        COPY_BUTTON_ID,
        COPY_ICON_ID,
        COPY_TEXT_ID,
        CONTACT_FORM_ID,
        CONTACT_SUBMIT_ID,
        CONTACT_SUBMIT_LABEL_ID,
        ALERT_ID,
        ALERT_TEXT_ID,
    ] {
        assert!(PAGE.contains(&format!("id=\"{}\"", id)), "missing #{id}");
    }
}
