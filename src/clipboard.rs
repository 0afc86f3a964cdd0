use portfolio_core::{ClipboardError, ClipboardSink};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `navigator.clipboard`; the write promise is not awaited.
pub struct NavigatorClipboard;

impl ClipboardSink for NavigatorClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[copy] clipboard write rejected: {:?}", e);
            }
        });
        Ok(())
    }
}
