#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::STAR_COUNT;

fn core() -> SceneCore {
    let mut core = SceneCore::with_starfield(StarfieldOptions { count: 100, ..StarfieldOptions::default() });
    core.set_viewport(1024.0, 768.0, 2.0);
    core
}

// =============================================================
// Construction / viewport
// =============================================================

#[test]
fn default_core_uses_full_starfield() {
    let core = SceneCore::new();
    assert_eq!(core.starfield.stars.len(), STAR_COUNT);
    assert!(!core.clock.started());
}

#[test]
fn set_viewport_reports_changes_only() {
    let mut core = core();
    assert!(!core.set_viewport(1024.0, 768.0, 2.0));
    assert!(core.set_viewport(800.0, 600.0, 2.0));
    assert_eq!(core.viewport_width, 800.0);
}

#[test]
fn set_viewport_sanitizes_inputs() {
    let mut core = core();
    core.set_viewport(-5.0, 100.0, f64::NAN);
    assert_eq!(core.viewport_width, 0.0);
    assert_eq!(core.dpr, 1.0);
}

// =============================================================
// Frames
// =============================================================

#[test]
fn frame_advances_owned_clock() {
    let mut core = core();
    let first = core.frame(10_000.0);
    let second = core.frame(12_000.0);
    assert_eq!(first.elapsed, 0.0);
    assert_eq!(second.elapsed, 2.0);
}

#[test]
fn frame_at_matches_frame_for_same_elapsed() {
    let mut core = core();
    core.frame(0.0);
    let ticked = core.frame(1_500.0);
    assert_eq!(ticked, core.frame_at(1.5));
}

// =============================================================
// Input
// =============================================================

#[test]
fn drag_orbits_camera() {
    let mut core = core();
    let before = core.camera.azimuth_offset;
    assert!(core.on_pointer_down(10.0, 10.0, Button::Primary));
    assert!(core.on_pointer_move(60.0, 10.0));
    core.on_pointer_up();
    assert!(core.camera.azimuth_offset < before);
    assert!(!core.on_pointer_move(90.0, 10.0));
}

#[test]
fn wheel_is_never_consumed() {
    let core = core();
    assert!(!core.on_wheel());
}

#[test]
fn drag_cannot_push_camera_below_horizon() {
    let mut core = core();
    core.on_pointer_down(0.0, 0.0, Button::Primary);
    core.on_pointer_move(0.0, -10_000.0);
    assert!(core.camera.eye_at(0.0).y >= -1e-9);
}
