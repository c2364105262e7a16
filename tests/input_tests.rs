// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn drag_tracker_reports_deltas_between_moves() {
    let mut t = DragTracker::default();
    assert!(!t.is_active());
    assert!(t.begin(1, Vec2::new(10.0, 10.0)));
    assert!(t.is_active());

    assert_eq!(t.move_to(1, Vec2::new(15.0, 8.0)), Some(Vec2::new(5.0, -2.0)));
    assert_eq!(t.move_to(1, Vec2::new(15.0, 8.0)), Some(Vec2::ZERO));
    assert_eq!(t.move_to(1, Vec2::new(5.0, 8.0)), Some(Vec2::new(-10.0, 0.0)));
}

#[test]
fn drag_tracker_ignores_other_pointers() {
    let mut t = DragTracker::default();
    assert!(t.begin(7, Vec2::ZERO));
    // A second finger does not steal the drag
    assert!(!t.begin(8, Vec2::new(100.0, 100.0)));
    assert_eq!(t.move_to(8, Vec2::new(120.0, 100.0)), None);
    assert!(!t.end(8));
    assert!(t.is_active());

    assert_eq!(t.move_to(7, Vec2::new(3.0, 0.0)), Some(Vec2::new(3.0, 0.0)));
}

#[test]
fn drag_tracker_stops_after_release() {
    let mut t = DragTracker::default();
    t.begin(1, Vec2::ZERO);
    assert!(t.end(1));
    assert!(!t.is_active());
    assert_eq!(t.move_to(1, Vec2::new(50.0, 0.0)), None);
    assert!(!t.end(1));

    // A fresh press starts from its own position, not the old one
    assert!(t.begin(2, Vec2::new(40.0, 0.0)));
    assert_eq!(t.move_to(2, Vec2::new(41.0, 0.0)), Some(Vec2::new(1.0, 0.0)));
}

#[test]
fn close_key_matches_escape_only() {
    assert!(is_close_key("Escape"));
    assert!(is_close_key("Esc"));
    assert!(!is_close_key("Enter"));
    assert!(!is_close_key("e"));
    assert!(!is_close_key(""));
}
