#![cfg(target_arch = "wasm32")]
use instant::Instant;
use portfolio_core::{
    ContactForm, CopyButton, DeviceClass, GridConfig, HeroScene, ParticleField,
    ParticleFieldConfig, SiteConfig, UndulatingGrid, ENV_CONTACT_EMAIL, ENV_OWNER_EMAIL,
    ENV_OWNER_NAME, ENV_PUBLIC_KEY, ENV_SERVICE_ID, ENV_TEMPLATE_ID,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod alert;
mod clipboard;
mod constants;
mod dom;
mod events;
mod frame;
mod mailer;
mod render;
mod viewport;

use clipboard::NavigatorClipboard;
use mailer::EmailJsMailer;

// Values are baked in at build time, like the bundler env the page used before.
fn site_config() -> SiteConfig {
    SiteConfig::from_lookup(|key| {
        match key {
            ENV_SERVICE_ID => option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
            ENV_TEMPLATE_ID => option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
            ENV_PUBLIC_KEY => option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
            ENV_OWNER_NAME => option_env!("PORTFOLIO_OWNER_NAME"),
            ENV_OWNER_EMAIL => option_env!("PORTFOLIO_OWNER_EMAIL"),
            ENV_CONTACT_EMAIL => option_env!("PORTFOLIO_CONTACT_EMAIL"),
            _ => None,
        }
        .map(str::to_string)
    })
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, device_class: Rc<RefCell<DeviceClass>>) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        *device_class.borrow_mut() = viewport::current_device_class();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = site_config();

    // Form and copy widget work without the 3D canvas, so wire them first.
    let contact = Rc::new(RefCell::new(ContactForm::new(
        EmailJsMailer::default(),
        config.delivery.clone(),
        config.recipient.clone(),
    )));
    events::wire_contact_form(&document, contact.clone());
    let copy = Rc::new(RefCell::new(CopyButton::new(
        NavigatorClipboard,
        config.contact_email.clone(),
    )));
    events::wire_copy_button(&document, copy.clone());

    let hero = match build_hero_layer(&document).await {
        Ok(layer) => Some(layer),
        Err(e) => {
            log::error!("[hero] disabled: {:?}", e);
            None
        }
    };

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        hero,
        contact,
        copy,
        started: now,
        last_instant: now,
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}

async fn build_hero_layer(document: &web::Document) -> anyhow::Result<frame::HeroLayer<'static>> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let device_class = Rc::new(RefCell::new(viewport::current_device_class()));
    wire_canvas_resize(&canvas, device_class.clone());

    let hero = HeroScene::new(
        ParticleField::from_entropy(ParticleFieldConfig::hero()),
        UndulatingGrid::new(GridConfig::hero()),
        *device_class.borrow(),
    )?;
    let gpu = frame::init_gpu(&canvas, &hero).await;
    Ok(frame::HeroLayer {
        canvas,
        hero,
        gpu,
        device_class,
    })
}
