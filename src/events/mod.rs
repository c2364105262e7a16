pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_close_key;
pub use pointer::{wire_resize, wire_viewer_pointer};
