#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::f64::consts::PI;

use crate::consts::{AUTO_ROTATE_SPEED, CAMERA_FOV_DEG, CAMERA_START, MAX_POLAR, MIN_POLAR, NEAR_CLIP};

/// A point or direction in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0, z: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }

    #[must_use]
    pub fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }

    #[must_use]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    #[must_use]
    pub fn dot(self, o: Self) -> f64 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    #[must_use]
    pub fn cross(self, o: Self) -> Self {
        Self::new(
            self.y * o.z - self.z * o.y,
            self.z * o.x - self.x * o.z,
            self.x * o.y - self.y * o.x,
        )
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or zero for a zero vector.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len <= f64::EPSILON { Self::ZERO } else { self.scale(1.0 / len) }
    }

    /// Rotate around the world Y axis by `angle` radians (right-handed, same
    /// sense as a group's `rotation.y`).
    #[must_use]
    pub fn rotate_y(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
    }
}

/// A world point projected into screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Distance along the view direction; larger is farther away.
    pub depth: f64,
    /// Pixels per world unit at this depth.
    pub scale: f64,
}

/// Orbit camera circling a fixed target.
///
/// Mirrors a typical orbit control configured for a background: zoom and pan
/// are disabled, the polar angle is clamped, and the azimuth advances on its
/// own. The user's drag offset is the only state besides the configuration;
/// the auto-rotate contribution is computed from elapsed time on every frame.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub target: Vec3,
    /// Fixed distance from target. There is no zoom.
    pub radius: f64,
    /// Polar angle from +Y chosen at start plus user drag, always clamped.
    pub polar: f64,
    /// Azimuth at start plus user drag, before auto-rotation.
    pub azimuth_offset: f64,
    pub fov_deg: f64,
    pub min_polar: f64,
    pub max_polar: f64,
    pub auto_rotate_speed: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let (x, y, z) = CAMERA_START;
        Self::looking_at(Vec3::new(x, y, z), Vec3::ZERO)
    }
}

impl OrbitCamera {
    /// Build a camera at `eye` orbiting `target`.
    #[must_use]
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        let offset = eye.sub(target);
        let radius = offset.length();
        let polar = if radius <= f64::EPSILON { PI / 2.0 } else { (offset.y / radius).clamp(-1.0, 1.0).acos() };
        let azimuth = offset.x.atan2(offset.z);
        Self {
            target,
            radius,
            polar: polar.clamp(MIN_POLAR, MAX_POLAR),
            azimuth_offset: azimuth,
            fov_deg: CAMERA_FOV_DEG,
            min_polar: MIN_POLAR,
            max_polar: MAX_POLAR,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
        }
    }

    /// Auto-rotate angular velocity in radians per second.
    ///
    /// A speed of 1.0 is one full turn per minute.
    #[must_use]
    pub fn auto_rotate_rate(&self) -> f64 {
        2.0 * PI / 60.0 * self.auto_rotate_speed
    }

    /// Azimuth after `elapsed` seconds of auto-rotation.
    #[must_use]
    pub fn azimuth_at(&self, elapsed: f64) -> f64 {
        self.azimuth_offset - self.auto_rotate_rate() * elapsed
    }

    /// Apply a user orbit drag. Positive `d_azimuth` swings the camera left,
    /// positive `d_polar` tilts it toward the horizon. Polar stays clamped.
    pub fn orbit_by(&mut self, d_azimuth: f64, d_polar: f64) {
        self.azimuth_offset -= d_azimuth;
        self.polar = (self.polar + d_polar).clamp(self.min_polar, self.max_polar);
    }

    /// Eye position after `elapsed` seconds.
    #[must_use]
    pub fn eye_at(&self, elapsed: f64) -> Vec3 {
        let azimuth = self.azimuth_at(elapsed);
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = azimuth.sin_cos();
        self.target.add(Vec3::new(self.radius * sp * sa, self.radius * cp, self.radius * sp * ca))
    }

    /// Freeze the camera pose for one frame.
    #[must_use]
    pub fn view(&self, elapsed: f64, viewport_w: f64, viewport_h: f64) -> View {
        let eye = self.eye_at(elapsed);
        let forward = self.target.sub(eye).normalized();
        let right = forward.cross(Vec3::UP).normalized();
        let up = right.cross(forward);
        let focal = (viewport_h * 0.5) / (self.fov_deg.to_radians() * 0.5).tan();
        View { eye, forward, right, up, focal, center_x: viewport_w * 0.5, center_y: viewport_h * 0.5 }
    }
}

/// Camera basis and projection parameters for a single frame.
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub eye: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub focal: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl View {
    /// Distance along the view direction.
    #[must_use]
    pub fn depth_of(&self, world: Vec3) -> f64 {
        world.sub(self.eye).dot(self.forward)
    }

    /// Project a world point to screen space. `None` when behind the near plane.
    #[must_use]
    pub fn project(&self, world: Vec3) -> Option<Projected> {
        let rel = world.sub(self.eye);
        let depth = rel.dot(self.forward);
        if depth <= NEAR_CLIP {
            return None;
        }
        let scale = self.focal / depth;
        Some(Projected {
            x: self.center_x + rel.dot(self.right) * scale,
            y: self.center_y - rel.dot(self.up) * scale,
            depth,
            scale,
        })
    }
}
