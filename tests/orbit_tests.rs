// Host-side tests for drag-to-orbit controls.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod viewer_core;

use std::f32::consts::{FRAC_PI_2, TAU};
use viewer_core::camera::Camera;
use viewer_core::orbit::{DragMapping, OrbitControls};

#[test]
fn object_yaw_drag_never_moves_the_camera() {
    let mut cam = Camera::for_viewport(800, 600);
    let before = cam.clone();
    let mut controls = OrbitControls::default();
    assert_eq!(controls.mapping, DragMapping::ObjectYaw);

    for (dx, dy) in [(40.0, 0.0), (-15.0, 30.0), (0.0, -200.0), (300.0, 300.0)] {
        controls.drag(dx, dy, 600.0);
        for _ in 0..10 {
            controls.update(&mut cam);
        }
    }
    assert_eq!(cam, before);
}

#[test]
fn yaw_follows_drag_direction() {
    let mut controls = OrbitControls::default();
    let right = controls.drag(30.0, 0.0, 600.0);
    let right_again = controls.drag(60.0, 0.0, 600.0);
    let left = controls.drag(-30.0, 0.0, 600.0);

    assert!(right < 0.0);
    assert!(right_again < right);
    assert!((left + right).abs() < 1e-6);
    assert!((right + TAU * 30.0 / 600.0 * 0.7).abs() < 1e-6);
    assert_eq!(controls.drag(0.0, 50.0, 600.0), 0.0);
}

#[test]
fn polar_angle_stays_at_ninety_degrees() {
    let mut cam = Camera::for_viewport(800, 600);
    let mut controls = OrbitControls::with_mapping(DragMapping::OrbitCamera);
    assert_eq!(controls.polar_angle(&cam), FRAC_PI_2);

    controls.drag(0.0, 250.0, 600.0);
    for _ in 0..30 {
        controls.update(&mut cam);
        assert_eq!(controls.polar_angle(&cam), FRAC_PI_2);
    }
    controls.drag(0.0, -500.0, 600.0);
    for _ in 0..30 {
        controls.update(&mut cam);
    }
    assert_eq!(cam.position.y, 0.0);
}

#[test]
fn orbit_camera_mapping_circles_the_target_with_damping() {
    let mut cam = Camera::for_viewport(800, 600);
    let radius = cam.position.length();
    let mut controls = OrbitControls::with_mapping(DragMapping::OrbitCamera);

    assert_eq!(controls.drag(120.0, 0.0, 600.0), 0.0);
    let mut prev = cam.position;
    let mut prev_step = f32::INFINITY;
    for _ in 0..20 {
        assert!(controls.update(&mut cam));
        let step = (cam.position - prev).length();
        assert!(step > 0.0 && step < prev_step);
        assert!((cam.position.length() - radius).abs() < 1e-3);
        prev_step = step;
        prev = cam.position;
    }
    assert!(cam.position.x.abs() > 1.0);
}

#[test]
fn update_without_input_is_a_no_op() {
    let mut cam = Camera::for_viewport(640, 480);
    let before = cam.clone();
    let mut controls = OrbitControls::with_mapping(DragMapping::OrbitCamera);
    assert!(!controls.update(&mut cam));
    assert_eq!(cam, before);
}
