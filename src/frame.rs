use crate::core::ViewerState;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Everything one viewer's tick touches.
pub struct FrameContext {
    pub state: Rc<RefCell<ViewerState>>,
    pub gpu: Rc<RefCell<Option<render::GpuState>>>,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut state = self.state.borrow_mut();
        state.tick();

        let mut gpu_slot = self.gpu.borrow_mut();
        let Some(gpu) = gpu_slot.as_mut() else {
            return;
        };
        if !gpu.has_model() {
            if let Some(model) = state.model.as_ref() {
                gpu.upload_model(&model.asset);
            }
        }
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(&state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::warn!("[frame] render skipped: {:?}", e),
        }
    }
}

struct LoopInner {
    running: Cell<bool>,
    request_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopInner {
    fn request_next(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.request_id.set(Some(id)),
                Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }
}

/// Handle to a requestAnimationFrame loop. Clones share the same loop.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    /// Run `frame` once per animation frame until [`FrameLoop::stop`].
    pub fn start(mut frame: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            running: Cell::new(true),
            request_id: Cell::new(None),
            tick: RefCell::new(None),
        });
        // The closure owns a strong handle; stop() breaks the cycle.
        let inner_tick = inner.clone();
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            inner_tick.request_id.set(None);
            if !inner_tick.running.get() {
                return;
            }
            frame();
            if inner_tick.running.get() {
                inner_tick.request_next();
            }
        }) as Box<dyn FnMut()>));
        inner.request_next();
        Self { inner }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Cancel the pending frame and release the tick closure. Idempotent.
    pub fn stop(&self) {
        if !self.inner.running.replace(false) {
            return;
        }
        if let (Some(w), Some(id)) = (web::window(), self.inner.request_id.take()) {
            _ = w.cancel_animation_frame(id);
        }
        let tick = self.inner.tick.borrow_mut().take();
        // stop() may run inside the tick itself; free the closure afterwards
        spawn_local(async move {
            drop(tick);
        });
    }
}
