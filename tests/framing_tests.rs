// Host-side tests for camera, framing and headlight math.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod viewer_core;

use glam::Vec3;
use viewer_core::bounds::Aabb;
use viewer_core::camera::{aspect_of, Camera};
use viewer_core::framing::{fit_box, fit_distance};
use viewer_core::lighting::{headlight_position, Lights};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn approx_v(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn fit_distance_uses_height_for_wide_viewports() {
    let fit_h = 2.0 / (2.0 * (std::f32::consts::PI * 45.0 / 360.0).tan());
    assert!(approx(fit_distance(2.0, 45.0, 2.0, 1.5), 1.5 * fit_h));
    assert!(approx(fit_distance(2.0, 45.0, 1.0, 1.5), 1.5 * fit_h));
    // tan(22.5 deg) = sqrt(2) - 1
    assert!(approx(fit_h, 1.0 / (2.0_f32.sqrt() - 1.0)));
}

#[test]
fn fit_distance_uses_width_for_tall_viewports() {
    let fit_h = 2.0 / (2.0 * (std::f32::consts::PI * 45.0 / 360.0).tan());
    let d = fit_distance(2.0, 45.0, 0.5, 1.5);
    assert!(approx(d, 1.5 * fit_h / 0.5));
    assert!(d > fit_distance(2.0, 45.0, 1.0, 1.5));
}

#[test]
fn fit_box_uses_largest_extent() {
    let b = Aabb::new(Vec3::new(-1.0, -3.0, 0.0), Vec3::new(1.0, 3.0, 0.5));
    assert!(approx(b.max_dimension(), 6.0));
    assert!(approx(fit_box(&b, 45.0, 1.0, 1.5), fit_distance(6.0, 45.0, 1.0, 1.5)));
}

#[test]
fn aabb_transformed_follows_scale_and_translation() {
    let b = Aabb::from_points([Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0)]);
    assert!(approx_v(b.center(), Vec3::new(1.0, 2.0, 3.0)));
    let scaled = b.transformed(&glam::Mat4::from_scale(Vec3::splat(0.5)));
    assert!(approx_v(scaled.min, Vec3::ZERO));
    assert!(approx_v(scaled.max, Vec3::new(1.0, 2.0, 3.0)));
    assert!(Aabb::EMPTY.is_empty());
    assert!(Aabb::EMPTY.transformed(&glam::Mat4::IDENTITY).is_empty());
}

#[test]
fn aspect_survives_zero_height() {
    assert!(approx(aspect_of(800, 400), 2.0));
    assert!(approx(aspect_of(800, 0), 800.0));
}

#[test]
fn camera_defaults_look_down_negative_z() {
    let cam = Camera::for_viewport(800, 600);
    assert_eq!(cam.position, Vec3::new(0.0, 0.0, 20.0));
    assert!(approx(cam.aspect, 800.0 / 600.0));
    assert!(approx_v(cam.forward(), Vec3::NEG_Z));
}

#[test]
fn headlight_sits_behind_the_camera_view() {
    let cam = Camera::for_viewport(800, 600);
    assert!(approx_v(headlight_position(cam.orientation()), Vec3::Z));

    let mut side = cam.clone();
    side.position = Vec3::new(20.0, 0.0, 0.0);
    assert!(approx_v(headlight_position(side.orientation()), Vec3::X));

    let mut lights = Lights::default();
    lights.follow_camera(side.orientation());
    assert!(approx_v(lights.headlight_direction(), Vec3::NEG_X));
}
