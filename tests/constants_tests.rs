// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_sane() {
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_START.z > 0.0);
    assert_eq!(CAMERA_START.x, 0.0);
    assert_eq!(CAMERA_START.y, 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_is_locked_to_the_horizon() {
    assert_eq!(POLAR_LOCK, std::f32::consts::FRAC_PI_2);
    assert!(DAMPING_FACTOR > 0.0 && DAMPING_FACTOR < 1.0);
    assert!(ROTATE_SPEED > 0.0);
}

#[test]
fn lights_sum_to_full_intensity() {
    assert!((AMBIENT_INTENSITY + HEADLIGHT_INTENSITY - 1.0).abs() < 1e-6);
    assert_eq!(LIGHT_COLOR, [1.0, 1.0, 1.0]);
    assert_eq!(CLEAR_COLOR, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn tint_is_light_gray() {
    let [r, g, b] = rgb_hex(TINT_RGB);
    assert!((r - 250.0 / 255.0).abs() < 1e-6);
    assert_eq!(r, g);
    assert_eq!(g, b);
    assert_eq!(rgb_hex(0xff0000), [1.0, 0.0, 0.0]);
    assert_eq!(rgb_hex(0x0000ff), [0.0, 0.0, 1.0]);
}

#[test]
fn close_delay_matches_panel_transition() {
    // PANEL_STYLE animates `right` over 0.4s
    assert!(PANEL_STYLE.contains("transition:right 0.4s"));
    assert_eq!(MODAL_CLOSE_DELAY_MS, 400);
    assert!(MODAL_OPEN_DEFER_MS > 0 && MODAL_OPEN_DEFER_MS < MODAL_CLOSE_DELAY_MS);
}

#[test]
fn modal_starts_hidden_and_off_screen() {
    assert!(OVERLAY_STYLE.contains("display:none"));
    assert!(OVERLAY_STYLE.contains("opacity:0"));
    assert!(PANEL_STYLE.contains("display:none"));
    assert!(PANEL_STYLE.contains(&format!("right:{}", PANEL_RIGHT_OUT)));
    assert!(MODEL_MOUNT_STYLE.contains("height:35vh"));
    assert!(MODEL_MOUNT_STYLE.contains("min-height:250px"));
}

#[test]
fn canvas_disables_browser_touch_gestures() {
    assert!(CANVAS_STYLE.contains("touch-action:none"));
}

#[test]
fn asset_paths_are_gltf_documents() {
    for path in [SMARTWATCH_ASSET, POPCORN_ASSET] {
        assert!(path.ends_with(".gltf"), "{path}");
        assert!(!path.starts_with('/'), "{path} should be page-relative");
    }
}

#[test]
fn modal_text_and_trigger_styles() {
    assert!(TITLE_STYLE.starts_with("margin:"));
    assert!(SUBTITLE_STYLE.contains("color:#555"));
    assert_eq!(TRIGGER_CURSOR, "pointer");
}
