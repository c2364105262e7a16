use crate::constants::*;
use crate::core::load::LOADING_TEXT;
use crate::core::{ModalConfig, ModalController, ModalHost, ModalTimer, ViewerConfig};
use crate::dom::{self, EventListener};
use crate::events;
use crate::overlay;
use crate::viewer::Viewer;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

type SharedController = Rc<RefCell<ModalController<DomModalHost>>>;

/// The modal's DOM plus a weak link back to its controller for timers.
pub struct DomModalHost {
    document: web::Document,
    overlay: web::HtmlElement,
    panel: web::HtmlElement,
    mount: web::HtmlElement,
    sink: Option<web::HtmlElement>,
    controller: Weak<RefCell<ModalController<DomModalHost>>>,
}

impl ModalHost for DomModalHost {
    type Viewer = Viewer;

    fn set_displayed(&mut self, displayed: bool) {
        if displayed {
            overlay::show(&self.overlay, &self.panel);
        } else {
            overlay::hide(&self.overlay, &self.panel);
        }
    }

    fn set_slid_in(&mut self, slid_in: bool) {
        overlay::slide(&self.overlay, &self.panel, slid_in);
    }

    fn reset_mount(&mut self) {
        dom::clear_children(&self.mount);
        self.sink = match dom::create_styled(&self.document, "div", SINK_STYLE) {
            Ok(el) => {
                el.set_text_content(Some(LOADING_TEXT));
                _ = self.mount.append_child(&el);
                Some(el)
            }
            Err(e) => {
                log::warn!("[modal] progress sink unavailable: {:?}", e);
                None
            }
        };
    }

    fn build_viewer(&mut self, asset_path: &str) -> anyhow::Result<Viewer> {
        let viewer = Viewer::create(
            &self.document,
            &self.mount,
            self.sink.clone(),
            ViewerConfig::new(asset_path),
        )?;
        viewer.animate();
        Ok(viewer)
    }

    fn dispose_viewer(&mut self, viewer: Viewer) {
        viewer.dispose();
    }

    fn show_status(&mut self, text: &str) {
        if let Some(sink) = &self.sink {
            sink.set_text_content(Some(text));
        }
    }

    fn schedule(&mut self, delay_ms: i32, timer: ModalTimer) {
        let Some(window) = web::window() else {
            return;
        };
        let controller = self.controller.clone();
        let callback = Closure::once_into_js(move || {
            if let Some(c) = controller.upgrade() {
                c.borrow_mut().fire(timer);
            }
        });
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        ) {
            log::error!("[modal] setTimeout failed: {:?}", e);
        }
    }
}

/// Slide-in panel hosting a second viewer.
#[wasm_bindgen]
pub struct ViewerModal {
    controller: SharedController,
    _listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl ViewerModal {
    #[wasm_bindgen(constructor)]
    pub fn new(asset_path: String, title: String, subtitle: String) -> Result<ViewerModal, JsValue> {
        Self::build(ModalConfig {
            asset_path,
            title,
            subtitle,
        })
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }

    pub fn open(&self) {
        self.controller.borrow_mut().open();
    }

    pub fn close(&self) {
        self.controller.borrow_mut().close();
    }

    pub fn is_open(&self) -> bool {
        self.controller.borrow().is_open()
    }
}

impl ViewerModal {
    /// Build the overlay/panel DOM, append it to `<body>` and wire the close paths.
    pub fn build(config: ModalConfig) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no <body>"))?;

        let overlay_el = dom::create_styled(&document, "div", OVERLAY_STYLE)?;
        let panel = dom::create_styled(&document, "div", PANEL_STYLE)?;
        let content = dom::create_styled(&document, "div", CONTENT_STYLE)?;
        let close_button = dom::create_styled(&document, "button", CLOSE_BUTTON_STYLE)?;
        close_button.set_inner_html(CLOSE_ICON_SVG);
        _ = close_button.set_attribute("aria-label", CLOSE_LABEL);
        let mount = dom::create_styled(&document, "div", MODEL_MOUNT_STYLE)?;
        let title = dom::create_styled(&document, "h2", TITLE_STYLE)?;
        title.set_text_content(Some(&config.title));
        let subtitle = dom::create_styled(&document, "p", SUBTITLE_STYLE)?;
        subtitle.set_text_content(Some(&config.subtitle));

        let append = |parent: &web::HtmlElement, child: &web::HtmlElement| {
            parent
                .append_child(child)
                .map(|_| ())
                .map_err(|e| anyhow::anyhow!("append modal node: {:?}", e))
        };
        append(&content, &close_button)?;
        append(&content, &mount)?;
        append(&content, &title)?;
        append(&content, &subtitle)?;
        append(&panel, &content)?;
        append(&body, &overlay_el)?;
        append(&body, &panel)?;

        let controller: SharedController = Rc::new_cyclic(|weak| {
            RefCell::new(ModalController::new(
                config,
                DomModalHost {
                    document: document.clone(),
                    overlay: overlay_el.clone(),
                    panel: panel.clone(),
                    mount,
                    sink: None,
                    controller: weak.clone(),
                },
            ))
        });

        let mut listeners = Vec::new();
        {
            let controller = controller.clone();
            listeners.push(dom::add_click_listener(close_button.as_ref(), move || {
                controller.borrow_mut().close();
            }));
        }
        {
            let controller = controller.clone();
            let backdrop: web::EventTarget = overlay_el.clone().into();
            listeners.push(EventListener::new(
                overlay_el.as_ref(),
                "click",
                move |ev: web::MouseEvent| {
                    // descendants bubble up here too; only the backdrop itself closes
                    if ev.target().as_ref() == Some(&backdrop) {
                        controller.borrow_mut().close();
                    }
                },
            ));
        }
        {
            let controller = controller.clone();
            listeners.push(events::wire_close_key(&document, move || {
                let mut c = controller.borrow_mut();
                if c.is_open() {
                    c.close();
                }
            }));
        }

        log::info!("[modal] ready for {}", controller.borrow().config.asset_path);
        Ok(Self {
            controller,
            _listeners: listeners,
        })
    }
}
