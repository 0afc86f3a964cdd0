use crate::clipboard::NavigatorClipboard;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::events;
use crate::mailer::EmailJsMailer;
use crate::render;
use instant::Instant;
use portfolio_core::{ContactForm, CopyButton, DeviceClass, HeroScene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedContactForm = Rc<RefCell<ContactForm<EmailJsMailer>>>;
pub type SharedCopyButton = Rc<RefCell<CopyButton<NavigatorClipboard>>>;

/// The landing-section canvas and everything drawn into it.
pub struct HeroLayer<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub hero: HeroScene,
    pub gpu: Option<render::GpuState<'a>>,
    pub device_class: Rc<RefCell<DeviceClass>>,
}

pub struct FrameContext<'a> {
    pub document: web::Document,
    pub hero: Option<HeroLayer<'a>>,

    pub contact: SharedContactForm,
    pub copy: SharedCopyButton,

    pub started: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let elapsed_sec = (now - self.started).as_secs_f32();

        // UI timers run on wall-clock frame time
        let contact_reset = self.contact.borrow_mut().tick(dt);
        if contact_reset {
            events::sync_contact(&self.document, &self.contact.borrow());
        }
        let copy_reset = self.copy.borrow_mut().tick(dt);
        if copy_reset {
            events::sync_copy(&self.document, &self.copy.borrow());
        }

        if let Some(layer) = &mut self.hero {
            layer.frame(dt.as_secs_f32(), elapsed_sec);
        }
    }
}

impl<'a> HeroLayer<'a> {
    fn frame(&mut self, dt_sec: f32, elapsed_sec: f32) {
        let class = *self.device_class.borrow();
        self.hero.relayout(class);
        self.hero.advance(dt_sec.min(MAX_FRAME_DT_SEC), elapsed_sec);

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            let (w, h) = g.size();
            self.hero.camera_mut().set_viewport(w, h);
            match g.render(&self.hero) {
                Ok(()) => {}
                // reconfigured on the next resize; skip this frame
                Err(wgpu::SurfaceError::Outdated) => {}
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    hero: &HeroScene,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, hero).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
