use penrose_core::Scheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Scheduler` on top of `window.requestAnimationFrame`.
pub struct RafScheduler {
    window: web::Window,
}

impl RafScheduler {
    pub fn new() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        Ok(Self { window })
    }
}

impl Scheduler for RafScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        let tick = Closure::once_into_js(move || callback());
        if let Err(e) = self.window.request_animation_frame(tick.unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
