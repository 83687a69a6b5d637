#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Platform
// =============================================================

#[test]
fn platform_starts_at_origin_height() {
    let t = platform(0.0);
    assert_eq!(t.position.y, 0.0);
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.yaw, 0.0);
}

#[test]
fn platform_bob_is_centered_on_origin() {
    for t in [1.0, 3.14, 7.5] {
        assert!(approx_eq(platform(t).position.y, (t * 0.5).sin() * 0.2));
    }
}

#[test]
fn platform_bob_stays_within_amplitude() {
    for i in 0..500 {
        let y = platform(f64::from(i) * 0.37).position.y;
        assert!(y >= -PLATFORM_BOB - EPSILON);
        assert!(y <= PLATFORM_BOB + EPSILON);
    }
}

#[test]
fn platform_peak_at_quarter_period() {
    let y = platform(std::f64::consts::PI).position.y;
    assert!(approx_eq(y, PLATFORM_BOB));
}

#[test]
fn platform_spin_is_linear_in_time() {
    assert!(approx_eq(platform(10.0).yaw, 10.0 * PLATFORM_SPIN));
}

// =============================================================
// Crystals
// =============================================================

#[test]
fn crystals_sit_on_ring_radius() {
    for i in 0..CRYSTAL_COUNT {
        let p = crystal(i, 3.0);
        assert!(approx_eq(p.x.hypot(p.z), CRYSTAL_ORBIT_RADIUS));
    }
}

#[test]
fn crystal_bob_is_phase_offset_by_index() {
    let t = 1.25;
    for i in 0..CRYSTAL_COUNT {
        assert!(approx_eq(crystal(i, t).y, (t + i as f64).sin() * CRYSTAL_BOB));
    }
    assert!(!approx_eq(crystal(0, t).y, crystal(1, t).y));
}

#[test]
fn crystal_ring_spins_collectively() {
    let ring = crystal_ring(2.0);
    assert_eq!(ring.position, Vec3::ZERO);
    assert!(approx_eq(ring.yaw, 2.0 * CRYSTAL_SPIN));
}

// =============================================================
// Label
// =============================================================

#[test]
fn label_bobs_around_base_height() {
    let t = label(0.0);
    assert!(approx_eq(t.position.y, LABEL_BASE_Y));
    assert_eq!(t.yaw, 0.0);
    for i in 0..200 {
        let t = label(f64::from(i) * 0.9);
        assert!((t.position.y - LABEL_BASE_Y).abs() <= 0.2 + EPSILON);
        assert!(t.yaw.abs() <= 0.1 + EPSILON);
    }
}

// =============================================================
// Lights
// =============================================================

#[test]
fn lights_alternate_colors() {
    let lights = lights(0.0);
    assert_eq!(lights.len(), LIGHT_COUNT);
    assert_eq!(lights[0].color, ACCENT_COLOR);
    assert_eq!(lights[1].color, INDIGO_COLOR);
    assert_eq!(lights[2].color, ACCENT_COLOR);
    assert_eq!(lights[3].color, INDIGO_COLOR);
}

#[test]
fn lights_orbit_at_fixed_radius_and_height() {
    for t in [0.0, 1.0, 17.5] {
        for light in lights(t) {
            assert!(approx_eq(light.position.x.hypot(light.position.z), LIGHT_ORBIT_RADIUS));
            assert!(approx_eq(light.position.y, LIGHT_Y));
        }
    }
}

#[test]
fn light_ring_rotates_with_time() {
    let start = lights(0.0)[0].position;
    let later = lights(1.0)[0].position;
    assert!(approx_eq(start.x, LIGHT_ORBIT_RADIUS));
    assert!(!approx_eq(start.z, later.z));
    assert!(approx_eq(light_ring(1.0).yaw, LIGHT_SPIN));
}

#[test]
fn transforms_are_pure_functions_of_time() {
    assert_eq!(platform(4.2), platform(4.2));
    assert_eq!(label(4.2), label(4.2));
    assert_eq!(lights(4.2), lights(4.2));
}

#[test]
fn transform_apply_rotates_then_translates() {
    let t = Transform { position: Vec3::new(0.0, 1.0, 0.0), yaw: std::f64::consts::FRAC_PI_2 };
    let p = t.apply(Vec3::new(1.0, 0.0, 0.0));
    assert!(approx_eq(p.x, 0.0));
    assert!(approx_eq(p.y, 1.0));
    assert!(approx_eq(p.z, -1.0));
}
