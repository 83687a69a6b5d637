//! Shared numeric constants for the scene crate.

use std::f64::consts::PI;

use crate::color::Rgb;

// ── Palette ─────────────────────────────────────────────────────

/// Clear color behind everything.
pub const BACKGROUND: Rgb = Rgb::from_hex(0x03_07_12);

/// Platform body color.
pub const PLATFORM_COLOR: Rgb = Rgb::from_hex(0x25_63_eb);

/// Accent used by the ring, pillar, crystals, label, and even-indexed lights.
pub const ACCENT_COLOR: Rgb = Rgb::from_hex(0x60_a5_fa);

/// Secondary light color for odd-indexed lights.
pub const INDIGO_COLOR: Rgb = Rgb::from_hex(0x81_8c_f8);

/// Outline drawn around the floating label.
pub const LABEL_OUTLINE_COLOR: Rgb = Rgb::from_hex(0x1e_3a_8a);

// ── Lighting ────────────────────────────────────────────────────

/// Ambient light intensity applied to every lit surface.
pub const AMBIENT_INTENSITY: f64 = 0.5;

/// Point light intensity.
pub const LIGHT_INTENSITY: f64 = 5.0;

/// Distance at which a point light's contribution reaches zero.
pub const LIGHT_RANGE: f64 = 15.0;

/// Scale applied to the summed point-light term before shading.
pub const LIGHT_GAIN: f64 = 0.12;

/// Linear fog start distance.
pub const FOG_NEAR: f64 = 5.0;

/// Linear fog end distance.
pub const FOG_FAR: f64 = 30.0;

// ── Camera ──────────────────────────────────────────────────────

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEG: f64 = 60.0;

/// Initial camera position (x, y, z).
pub const CAMERA_START: (f64, f64, f64) = (0.0, 5.0, 12.0);

/// Minimum polar angle from +Y.
pub const MIN_POLAR: f64 = PI / 3.0;

/// Maximum polar angle from +Y.
pub const MAX_POLAR: f64 = PI / 2.0;

/// Auto-rotate speed in orbit-controls units (1.0 = one turn per minute).
pub const AUTO_ROTATE_SPEED: f64 = 0.5;

/// Near clip distance; anything closer to the eye is not drawn.
pub const NEAR_CLIP: f64 = 0.1;

/// Radians of orbit per CSS pixel of pointer drag.
pub const DRAG_RADIANS_PER_PX: f64 = 2.0 * PI / 800.0;

// ── Platform ────────────────────────────────────────────────────

/// Vertical bob amplitude of the platform group, centered on the origin.
pub const PLATFORM_BOB: f64 = 0.2;

/// Yaw rate in radians per second.
pub const PLATFORM_SPIN: f64 = 0.12;

pub const PLATFORM_TOP_RADIUS: f64 = 4.0;
pub const PLATFORM_BOTTOM_RADIUS: f64 = 5.0;
pub const PLATFORM_HEIGHT: f64 = 0.5;
pub const PLATFORM_SEGMENTS: usize = 32;

pub const RING_RADIUS: f64 = 3.0;
pub const RING_TUBE: f64 = 0.1;
pub const RING_Y: f64 = 0.3;
pub const RING_SEGMENTS: usize = 100;

pub const PILLAR_RADIUS: f64 = 0.2;
pub const PILLAR_HEIGHT: f64 = 2.0;
pub const PILLAR_Y: f64 = 1.0;

// ── Crystals ────────────────────────────────────────────────────

pub const CRYSTAL_COUNT: usize = 6;
pub const CRYSTAL_ORBIT_RADIUS: f64 = 3.0;
pub const CRYSTAL_SIZE: f64 = 0.5;
pub const CRYSTAL_BOB: f64 = 0.3;

/// Collective yaw rate in radians per second.
pub const CRYSTAL_SPIN: f64 = 0.3;

// ── Label ───────────────────────────────────────────────────────

pub const LABEL_TEXT: &str = "SkillHunter";
pub const LABEL_BASE_Y: f64 = 2.0;
pub const LABEL_FONT_SIZE: f64 = 1.5;
pub const LABEL_OUTLINE_WIDTH: f64 = 0.05;

// ── Lights ──────────────────────────────────────────────────────

pub const LIGHT_COUNT: usize = 4;
pub const LIGHT_ORBIT_RADIUS: f64 = 8.0;
pub const LIGHT_Y: f64 = 2.0;

/// Light ring yaw rate in radians per second.
pub const LIGHT_SPIN: f64 = 0.3;

// ── Stars ───────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 5000;
pub const STAR_RADIUS: f64 = 100.0;
pub const STAR_DEPTH: f64 = 50.0;
pub const STAR_FACTOR: f64 = 4.0;
pub const STAR_SPEED: f64 = 1.0;

/// Seed for the starfield so every mount paints the same sky.
pub const STAR_SEED: u64 = 0x5EED_57A2;
