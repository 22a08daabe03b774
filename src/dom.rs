use crate::options::{options_from_lookup, KeyStyle, OptionValue};
use penrose_core::ConfigOptions;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<Option<web::HtmlCanvasElement>> {
    let Some(el) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    el.dyn_into::<web::HtmlCanvasElement>()
        .map(Some)
        .map_err(|_| anyhow::anyhow!("#{id} is not a <canvas>"))
}

/// Run `handler` once the DOM is parsed; immediately if it already is.
pub fn on_ready(document: &web::Document, handler: impl FnOnce() + 'static) {
    if document.ready_state() != crate::constants::READY_STATE_LOADING {
        handler();
        return;
    }
    let closure = Closure::once(handler);
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Options from `data-*` attributes on the canvas.
pub fn options_from_attributes(canvas: &web::HtmlCanvasElement) -> anyhow::Result<ConfigOptions> {
    options_from_lookup(
        |name| Ok(canvas.get_attribute(name).map(OptionValue::Text)),
        KeyStyle::Attribute,
    )
}

/// Options from a plain JS object. Arrays (plain or typed) are read item by
/// item so list entries such as `rgb(1,2,3)` stay whole.
pub fn options_from_object(obj: &js_sys::Object) -> anyhow::Result<ConfigOptions> {
    options_from_lookup(
        |name| {
            let v = js_sys::Reflect::get(obj, &JsValue::from_str(name))
                .map_err(|e| anyhow::anyhow!("reading {name}: {:?}", e))?;
            if v.is_undefined() || v.is_null() {
                return Ok(None);
            }
            js_to_option_value(&v)
                .map(Some)
                .ok_or_else(|| anyhow::anyhow!("{name}: unsupported value {:?}", v))
        },
        KeyStyle::Property,
    )
}

fn js_to_option_value(v: &JsValue) -> Option<OptionValue> {
    if let Some(s) = v.as_string() {
        return Some(OptionValue::Text(s));
    }
    if let Some(n) = v.as_f64() {
        return Some(OptionValue::Number(n));
    }
    if js_sys::Array::is_array(v) || js_sys::ArrayBuffer::is_view(v) {
        let items = js_sys::Array::from(v)
            .iter()
            .map(|item| js_to_option_value(&item))
            .collect::<Option<Vec<_>>>()?;
        return Some(OptionValue::List(items));
    }
    None
}
