//! Per-object animation as pure functions of elapsed time.
//!
//! Every animated group exposes an `update(elapsed)` style function returning
//! its transform. Nothing is accumulated between frames, so any frame can be
//! reproduced from its elapsed seconds alone.

#[cfg(test)]
#[path = "animate_test.rs"]
mod animate_test;

use std::f64::consts::TAU;

use crate::camera::Vec3;
use crate::color::Rgb;
use crate::consts::{
    ACCENT_COLOR, CRYSTAL_BOB, CRYSTAL_COUNT, CRYSTAL_ORBIT_RADIUS, CRYSTAL_SPIN, INDIGO_COLOR, LABEL_BASE_Y,
    LIGHT_COUNT, LIGHT_ORBIT_RADIUS, LIGHT_SPIN, LIGHT_Y, PLATFORM_BOB, PLATFORM_SPIN,
};

/// Position plus yaw of a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation about the world Y axis, in radians.
    pub yaw: f64,
}

impl Transform {
    /// Map a point from group-local space to world space.
    #[must_use]
    pub fn apply(&self, local: Vec3) -> Vec3 {
        local.rotate_y(self.yaw).add(self.position)
    }
}

/// A point light placed in world space for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Rgb,
}

/// Platform: idle bob and slow spin.
#[must_use]
pub fn platform(elapsed: f64) -> Transform {
    Transform {
        position: Vec3::new(0.0, (elapsed * 0.5).sin() * PLATFORM_BOB, 0.0),
        yaw: elapsed * PLATFORM_SPIN,
    }
}

/// Crystal ring group: slow collective spin around the origin.
#[must_use]
pub fn crystal_ring(elapsed: f64) -> Transform {
    Transform { position: Vec3::ZERO, yaw: elapsed * CRYSTAL_SPIN }
}

/// Local position of crystal `index` inside the ring group.
///
/// Each crystal sits on the ring at its own angle and bobs vertically with a
/// phase offset equal to its index.
#[must_use]
pub fn crystal(index: usize, elapsed: f64) -> Vec3 {
    let angle = ring_angle(index, CRYSTAL_COUNT);
    Vec3::new(
        angle.cos() * CRYSTAL_ORBIT_RADIUS,
        (elapsed + index as f64).sin() * CRYSTAL_BOB,
        angle.sin() * CRYSTAL_ORBIT_RADIUS,
    )
}

/// Floating label: bob plus a slight side-to-side yaw.
#[must_use]
pub fn label(elapsed: f64) -> Transform {
    Transform {
        position: Vec3::new(0.0, (elapsed * 0.5).sin() * 0.2 + LABEL_BASE_Y, 0.0),
        yaw: (elapsed * 0.2).sin() * 0.1,
    }
}

/// Light ring group: rotating orbit.
#[must_use]
pub fn light_ring(elapsed: f64) -> Transform {
    Transform { position: Vec3::ZERO, yaw: elapsed * LIGHT_SPIN }
}

/// All point lights in world space at `elapsed`.
#[must_use]
pub fn lights(elapsed: f64) -> Vec<PointLight> {
    let ring = light_ring(elapsed);
    (0..LIGHT_COUNT)
        .map(|i| {
            let angle = ring_angle(i, LIGHT_COUNT);
            let local = Vec3::new(angle.cos() * LIGHT_ORBIT_RADIUS, LIGHT_Y, angle.sin() * LIGHT_ORBIT_RADIUS);
            let color = if i % 2 == 0 { ACCENT_COLOR } else { INDIGO_COLOR };
            PointLight { position: ring.apply(local), color }
        })
        .collect()
}

fn ring_angle(index: usize, count: usize) -> f64 {
    index as f64 / count as f64 * TAU
}
