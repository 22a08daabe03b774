#![cfg(target_arch = "wasm32")]
use penrose_core::{driver, Animation, Config};
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod options;

use canvas::CanvasSurface;
use frame::RafScheduler;

fn js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// Handle exported to JS:
///
/// ```js
/// const fig = new PenroseTriangle(canvas, { cubesPerTriangleEdge: 8 });
/// fig.start();
/// ```
#[wasm_bindgen]
pub struct PenroseTriangle {
    animation: Rc<RefCell<Animation<CanvasSurface>>>,
}

#[wasm_bindgen]
impl PenroseTriangle {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: web::HtmlCanvasElement,
        options: Option<js_sys::Object>,
    ) -> Result<PenroseTriangle, JsValue> {
        build(canvas, options.as_ref()).map_err(js_err)
    }

    /// Begin continuous animation on `requestAnimationFrame`.
    pub fn start(&self) -> Result<(), JsValue> {
        run(self.animation.clone()).map_err(js_err)
    }

    /// Draw exactly one frame and advance the counter.
    pub fn render(&self) {
        match self.animation.borrow_mut().render() {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }

    /// Frame the next `render` will draw.
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 {
        self.animation.borrow().frame()
    }

    #[wasm_bindgen(getter, js_name = loopFrames)]
    pub fn loop_frames(&self) -> u32 {
        self.animation.borrow().config().loop_frames()
    }
}

fn build(
    canvas: web::HtmlCanvasElement,
    options: Option<&js_sys::Object>,
) -> anyhow::Result<PenroseTriangle> {
    let opts = match options {
        Some(obj) => dom::options_from_object(obj)?,
        None => Default::default(),
    };
    let config = Config::from_options(opts)?;
    log::info!(
        "[penrose] edge={} cubes/edge={} loop={}",
        config.triangle_edge(),
        config.cubes_per_triangle_edge(),
        config.loop_frames()
    );
    let surface = CanvasSurface::new(canvas)?;
    Ok(PenroseTriangle {
        animation: Rc::new(RefCell::new(Animation::new(surface, config))),
    })
}

fn run(animation: Rc<RefCell<Animation<CanvasSurface>>>) -> anyhow::Result<()> {
    let scheduler = Rc::new(RafScheduler::new()?);
    driver::start(animation, scheduler, |e: Infallible| match e {});
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("penrose-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let doc = document.clone();
    dom::on_ready(&document, move || {
        if let Err(e) = init(&doc) {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Auto-start the figure on `#penrose-canvas`, configured from its `data-*`
/// attributes. Pages without that canvas drive `PenroseTriangle` themselves.
fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas) = dom::canvas_by_id(document, constants::CANVAS_ID)? else {
        log::info!("no #{} on page; waiting for JS host", constants::CANVAS_ID);
        return Ok(());
    };
    let opts = dom::options_from_attributes(&canvas)?;
    let config = Config::from_options(opts)?;
    let surface = CanvasSurface::new(canvas)?;
    run(Rc::new(RefCell::new(Animation::new(surface, config))))
}
