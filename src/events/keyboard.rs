use crate::dom::EventListener;
use crate::input::is_close_key;
use web_sys as web;

/// Call `on_close` whenever a close key is pressed anywhere on the page.
pub fn wire_close_key(
    document: &web::Document,
    mut on_close: impl FnMut() + 'static,
) -> EventListener {
    EventListener::new(document.as_ref(), "keydown", move |ev: web::KeyboardEvent| {
        if ev.repeat() {
            return;
        }
        if is_close_key(&ev.key()) {
            on_close();
        }
    })
}
