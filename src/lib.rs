#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::viewer::keep_or_log;
use crate::core::{ModalConfig, ViewerConfig};
use crate::dom::EventListener;
use crate::modal::ViewerModal;
use crate::viewer::Viewer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod modal;
mod overlay;
mod render;
mod viewer;

/// Everything the host page keeps alive for its lifetime.
struct Page {
    _main: Option<Viewer>,
    _popcorn: Option<Viewer>,
    _modal: Rc<ViewerModal>,
    _listeners: Vec<EventListener>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("product-viewer starting");

    match init() {
        Ok(Some(page)) => PAGE.with(|p| *p.borrow_mut() = Some(page)),
        Ok(None) => log::info!("no #{} on this page; waiting for JS calls", MAIN_MOUNT_ID),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

fn mount_viewer(
    document: &web::Document,
    mount_id: &str,
    sink_id: Option<&str>,
    config: ViewerConfig,
) -> anyhow::Result<Option<Viewer>> {
    let Some(mount) = dom::html_element_by_id(document, mount_id) else {
        return Ok(None);
    };
    let sink = sink_id.and_then(|id| dom::html_element_by_id(document, id));
    let viewer = Viewer::create(document, &mount, sink, config)?;
    viewer.animate();
    Ok(Some(viewer))
}

fn init() -> anyhow::Result<Option<Page>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    if dom::html_element_by_id(&document, MAIN_MOUNT_ID).is_none() {
        return Ok(None);
    }
    let main = keep_or_log(
        "main viewer",
        mount_viewer(
            &document,
            MAIN_MOUNT_ID,
            Some(MAIN_SINK_ID),
            ViewerConfig::new(SMARTWATCH_ASSET),
        ),
    );
    let popcorn = keep_or_log(
        "popcorn viewer",
        mount_viewer(
            &document,
            POPCORN_MOUNT_ID,
            Some(POPCORN_SINK_ID),
            ViewerConfig::new(POPCORN_ASSET),
        ),
    );

    let modal = Rc::new(ViewerModal::build(ModalConfig {
        asset_path: SMARTWATCH_ASSET.to_string(),
        title: MODAL_TITLE.to_string(),
        subtitle: MODAL_SUBTITLE.to_string(),
    })?);

    let mut listeners = Vec::new();
    match document.query_selector(MODAL_TRIGGER_SELECTOR) {
        Ok(Some(trigger)) => {
            if let Some(el) = trigger.dyn_ref::<web::HtmlElement>() {
                dom::set_style(el, "cursor", TRIGGER_CURSOR);
            }
            let modal = modal.clone();
            listeners.push(dom::add_click_listener(trigger.as_ref(), move || modal.open()));
        }
        _ => log::warn!(
            "trigger {} not found; the modal can only be opened from JS",
            MODAL_TRIGGER_SELECTOR
        ),
    }

    Ok(Some(Page {
        _main: main,
        _popcorn: popcorn,
        _modal: modal,
        _listeners: listeners,
    }))
}

/// A running viewer created from JS.
#[wasm_bindgen]
pub struct ViewerHandle {
    viewer: Viewer,
}

#[wasm_bindgen]
impl ViewerHandle {
    /// Stop the render loop; the canvas keeps its last frame.
    pub fn stop(&self) {
        self.viewer.stop();
    }

    /// Restart a stopped render loop.
    pub fn animate(&self) {
        self.viewer.animate();
    }

    pub fn is_loaded(&self) -> bool {
        self.viewer.state().borrow().is_loaded()
    }

    /// Stop the loop and remove the canvas from its mount.
    pub fn dispose(self) {
        self.viewer.dispose();
    }
}

/// Mount a viewer in `#mount_id` and start its render loop.
#[wasm_bindgen]
pub fn create_viewer(
    mount_id: &str,
    sink_id: Option<String>,
    asset_path: String,
) -> Result<ViewerHandle, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let config = ViewerConfig::new(asset_path);
    match mount_viewer(&document, mount_id, sink_id.as_deref(), config) {
        Ok(Some(viewer)) => Ok(ViewerHandle { viewer }),
        Ok(None) => Err(JsValue::from_str(&format!("missing #{}", mount_id))),
        Err(e) => Err(JsValue::from_str(&format!("{:#}", e))),
    }
}
