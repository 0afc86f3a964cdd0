use crate::clipboard::NavigatorClipboard;
use crate::constants::{COPY_BUTTON_ID, COPY_ICON_ID, COPY_TEXT_ID};
use crate::dom;
use crate::frame::SharedCopyButton;
use portfolio_core::CopyButton;
use web_sys as web;

pub fn wire_copy_button(document: &web::Document, copy: SharedCopyButton) {
    dom::set_text(document, COPY_TEXT_ID, copy.borrow().text());
    let copy_click = copy.clone();
    let doc_click = document.clone();
    dom::add_listener(document, COPY_BUTTON_ID, "click", move |_| {
        copy_click.borrow_mut().activate();
        sync_copy(&doc_click, &copy_click.borrow());
    });
    sync_copy(document, &copy.borrow());
}

#[inline]
pub fn sync_copy(document: &web::Document, copy: &CopyButton<NavigatorClipboard>) {
    if let Some(el) = document.get_element_by_id(COPY_ICON_ID) {
        _ = el.set_attribute("src", copy.icon());
    }
}
