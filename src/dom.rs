use crate::core::camera::backing_size;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn create_styled(
    document: &web::Document,
    tag: &str,
    style: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))?;
    _ = el.set_attribute("style", style);
    Ok(el)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn clear_children(el: &web::Element) {
    while let Some(child) = el.first_child() {
        _ = el.remove_child(&child);
    }
}

/// Content-box size of `el` in CSS pixels.
pub fn content_size(el: &web::Element) -> (u32, u32) {
    (el.client_width().max(0) as u32, el.client_height().max(0) as u32)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Size the canvas to `width` x `height` CSS pixels with a DPR-scaled backing store.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    let (backing_w, backing_h) = backing_size(width, height, device_pixel_ratio());
    canvas.set_width(backing_w);
    canvas.set_height(backing_h);
    _ = canvas.style().set_property("width", &format!("{}px", width));
    _ = canvas.style().set_property("height", &format!("{}px", height));
}

/// A DOM listener that is removed when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    /// Listen for `kind` events on `target`, delivering them as `E`.
    pub fn new<E, F>(target: &web::EventTarget, kind: &'static str, mut handler: F) -> Self
    where
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) -> EventListener {
    EventListener::new(target, "click", move |_: web::MouseEvent| handler())
}
