use crate::constants::CANVAS_STYLE;
use crate::core::load::LOADING_TEXT;
use crate::core::{LoadEvent, LoadProgress, SinkUpdate, ViewerConfig, ViewerState};
use crate::dom::{self, EventListener};
use crate::events;
use crate::frame::{FrameContext, FrameLoop};
use crate::loader::{self, ProgressFn};
use crate::overlay::sink;
use crate::render::GpuState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// One canvas, its scene state, its GPU surface and its listeners.
pub struct Viewer {
    state: Rc<RefCell<ViewerState>>,
    canvas: web::HtmlCanvasElement,
    gpu: Rc<RefCell<Option<GpuState>>>,
    frame_loop: RefCell<Option<FrameLoop>>,
    disposed: Rc<Cell<bool>>,
    _listeners: Vec<EventListener>,
}

impl Viewer {
    /// Append a canvas to `mount` and start loading `config.asset_path`.
    pub fn create(
        document: &web::Document,
        mount: &web::HtmlElement,
        sink_el: Option<web::HtmlElement>,
        config: ViewerConfig,
    ) -> anyhow::Result<Self> {
        let (width, height) = dom::content_size(mount);
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = canvas.set_attribute("style", CANVAS_STYLE);
        dom::size_canvas(&canvas, width, height);
        mount
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;

        let asset_path = config.asset_path.clone();
        let state = Rc::new(RefCell::new(ViewerState::new(config, width, height)));
        let gpu = Rc::new(RefCell::new(None));
        let disposed = Rc::new(Cell::new(false));

        if let Some(el) = &sink_el {
            sink::apply(el, &SinkUpdate::Text(LOADING_TEXT.to_string()));
        }

        {
            let canvas = canvas.clone();
            let gpu = gpu.clone();
            let disposed = disposed.clone();
            spawn_local(async move {
                match GpuState::new(&canvas).await {
                    Ok(g) if !disposed.get() => *gpu.borrow_mut() = Some(g),
                    Ok(_) => {}
                    Err(e) => log::error!("WebGPU init error: {:?}", e),
                }
            });
        }

        {
            let state = state.clone();
            let disposed = disposed.clone();
            spawn_local(async move {
                let on_progress: ProgressFn = {
                    let state = state.clone();
                    let sink_el = sink_el.clone();
                    let disposed = disposed.clone();
                    Rc::new(move |progress: LoadProgress| {
                        if disposed.get() {
                            return;
                        }
                        let update = state.borrow_mut().apply_load(LoadEvent::Progress(progress));
                        if let (Some(el), Some(update)) = (&sink_el, update) {
                            sink::apply(el, &update);
                        }
                    })
                };
                let event = match loader::load_model(&asset_path, on_progress).await {
                    Ok(model) => LoadEvent::Loaded(model),
                    Err(e) => LoadEvent::Failed(e),
                };
                if disposed.get() {
                    return;
                }
                let update = state.borrow_mut().apply_load(event);
                if let (Some(el), Some(update)) = (&sink_el, update) {
                    sink::apply(el, &update);
                }
            });
        }

        let mut listeners = events::wire_viewer_pointer(&canvas, &state);
        listeners.extend(events::wire_resize(mount, &canvas, &state));

        Ok(Self {
            state,
            canvas,
            gpu,
            frame_loop: RefCell::new(None),
            disposed,
            _listeners: listeners,
        })
    }

    /// Start the per-frame loop, or return the one already running.
    pub fn animate(&self) -> FrameLoop {
        if let Some(running) = self.frame_loop.borrow().as_ref().filter(|l| l.is_running()) {
            return running.clone();
        }
        let mut ctx = FrameContext {
            state: self.state.clone(),
            gpu: self.gpu.clone(),
            canvas: self.canvas.clone(),
        };
        let frame_loop = FrameLoop::start(move || ctx.frame());
        *self.frame_loop.borrow_mut() = Some(frame_loop.clone());
        frame_loop
    }

    pub fn stop(&self) {
        if let Some(l) = self.frame_loop.borrow().as_ref() {
            l.stop();
        }
    }

    pub fn state(&self) -> &Rc<RefCell<ViewerState>> {
        &self.state
    }

    /// Stop the loop, drop listeners and GPU resources, detach the canvas.
    pub fn dispose(self) {
        self.disposed.set(true);
        self.stop();
        self.gpu.borrow_mut().take();
        self.canvas.remove();
    }
}
