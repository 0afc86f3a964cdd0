use crate::constants::{ALERT_ID, ALERT_TEXT_ID};
use crate::dom;
use portfolio_core::{AlertKind, Notification};
use web_sys as web;

/// Mirror the controller's notification into the alert banner.
pub fn render(document: &web::Document, notification: &Notification) {
    if !notification.show {
        hide(document);
        return;
    }
    if let Some(el) = document.get_element_by_id(ALERT_ID) {
        let cl = el.class_list();
        for kind in [AlertKind::Success, AlertKind::Error] {
            _ = cl.remove_1(&class_for(kind));
        }
        _ = cl.add_1(&class_for(notification.kind));
    }
    dom::set_text(document, ALERT_TEXT_ID, &notification.text);
    dom::set_visible(document, ALERT_ID, true);
}

#[inline]
pub fn hide(document: &web::Document) {
    dom::set_visible(document, ALERT_ID, false);
}

#[inline]
fn class_for(kind: AlertKind) -> String {
    format!("alert-{}", kind.as_str())
}
