use crate::constants::EMAILJS_SEND_URL;
use portfolio_core::{DeliveryError, DeliveryHook, DeliveryResult, EmailRequest, Mailer};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Sends contact messages to the EmailJS REST endpoint with `fetch`.
pub struct EmailJsMailer {
    endpoint: String,
}

impl Default for EmailJsMailer {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_SEND_URL.to_string(),
        }
    }
}

impl Mailer for EmailJsMailer {
    fn send(&self, request: EmailRequest, on_complete: Option<DeliveryHook>) {
        let endpoint = self.endpoint.clone();
        spawn_local(async move {
            let result = post_json(&endpoint, &request).await;
            if let Some(hook) = on_complete {
                hook(result);
            }
        });
    }
}

async fn post_json(url: &str, request: &EmailRequest) -> DeliveryResult {
    let body = request.to_json()?;
    let window = web::window().ok_or_else(|| DeliveryError::Transport("no window".into()))?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web::RequestMode::Cors);
    init.set_body(&JsValue::from_str(&body));
    let req = web::Request::new_with_str_and_init(url, &init).map_err(transport)?;
    req.headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;

    let resp: web::Response = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = match resp.text() {
        Ok(p) => JsFuture::from(p)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    Err(DeliveryError::Rejected { status, body })
}

fn transport(e: JsValue) -> DeliveryError {
    DeliveryError::Transport(format!("{:?}", e))
}
