use crate::core::ViewerState;
use crate::dom::EventListener;
use crate::input::{self, DragTracker};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Drag-to-rotate on a viewer canvas. The listeners live as long as the returned vec.
pub fn wire_viewer_pointer(
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<ViewerState>>,
) -> Vec<EventListener> {
    let tracker = Rc::new(RefCell::new(DragTracker::default()));
    let target: &web::EventTarget = canvas.as_ref();

    let down = {
        let canvas = canvas.clone();
        let state = state.clone();
        let tracker = tracker.clone();
        EventListener::new(target, "pointerdown", move |ev: web::PointerEvent| {
            state.borrow_mut().pointer_down();
            if tracker
                .borrow_mut()
                .begin(ev.pointer_id(), input::pointer_client_pos(&ev))
            {
                _ = canvas.set_pointer_capture(ev.pointer_id());
                ev.prevent_default();
            }
        })
    };

    let moved = {
        let state = state.clone();
        let tracker = tracker.clone();
        EventListener::new(target, "pointermove", move |ev: web::PointerEvent| {
            let delta = tracker
                .borrow_mut()
                .move_to(ev.pointer_id(), input::pointer_client_pos(&ev));
            if let Some(d) = delta {
                state.borrow_mut().drag(d.x, d.y);
            }
        })
    };

    let release = |kind: &'static str| {
        let canvas = canvas.clone();
        let tracker = tracker.clone();
        EventListener::new(target, kind, move |ev: web::PointerEvent| {
            if tracker.borrow_mut().end(ev.pointer_id()) {
                _ = canvas.release_pointer_capture(ev.pointer_id());
            }
        })
    };

    vec![down, moved, release("pointerup"), release("pointercancel")]
}

/// Keep the canvas sized to its mount and the camera aspect in sync.
pub fn wire_resize(
    mount: &web::HtmlElement,
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<ViewerState>>,
) -> Option<EventListener> {
    let window = web::window()?;
    let mount = mount.clone();
    let canvas = canvas.clone();
    let state = state.clone();
    Some(EventListener::new(
        window.as_ref(),
        "resize",
        move |_: web::Event| {
            let (w, h) = crate::dom::content_size(&mount);
            crate::dom::size_canvas(&canvas, w, h);
            state.borrow_mut().resize(w, h);
        },
    ))
}
