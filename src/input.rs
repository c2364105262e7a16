use glam::Vec2;
use web_sys as web;

/// Tracks one pointer between down and up, reporting per-move deltas.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragTracker {
    pub pointer_id: Option<i32>,
    pub last: Vec2,
}

impl DragTracker {
    pub fn is_active(&self) -> bool {
        self.pointer_id.is_some()
    }

    /// Start tracking; ignored while another pointer already drags.
    pub fn begin(&mut self, pointer_id: i32, pos: Vec2) -> bool {
        if self.pointer_id.is_some() {
            return false;
        }
        self.pointer_id = Some(pointer_id);
        self.last = pos;
        true
    }

    /// Delta since the previous position of the tracked pointer.
    pub fn move_to(&mut self, pointer_id: i32, pos: Vec2) -> Option<Vec2> {
        if self.pointer_id != Some(pointer_id) {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.pointer_id == Some(pointer_id) {
            self.pointer_id = None;
            return true;
        }
        false
    }
}

/// Keys that dismiss the modal.
#[inline]
pub fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
