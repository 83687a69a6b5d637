//! RGB colors, blending, and fog.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use crate::consts::{BACKGROUND, FOG_FAR, FOG_NEAR};

/// A linear RGB color with channels in `0.0..=255.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Build a color from a packed `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f64,
            g: ((hex >> 8) & 0xff) as f64,
            b: (hex & 0xff) as f64,
        }
    }

    /// Multiply every channel by `factor`, clamping to the valid range.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            r: (self.r * factor).clamp(0.0, 255.0),
            g: (self.g * factor).clamp(0.0, 255.0),
            b: (self.b * factor).clamp(0.0, 255.0),
        }
    }

    /// Channel-wise sum, clamped.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self {
            r: (self.r + other.r).clamp(0.0, 255.0),
            g: (self.g + other.g).clamp(0.0, 255.0),
            b: (self.b + other.b).clamp(0.0, 255.0),
        }
    }

    /// Linear blend: `t = 0` gives `self`, `t = 1` gives `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// CSS `rgba(...)` string for the 2D context.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_css(self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            alpha.clamp(0.0, 1.0)
        )
    }
}

/// Linear fog factor: 0 at [`FOG_NEAR`] or closer, 1 at [`FOG_FAR`] or beyond.
#[must_use]
pub fn fog_factor(depth: f64) -> f64 {
    ((depth - FOG_NEAR) / (FOG_FAR - FOG_NEAR)).clamp(0.0, 1.0)
}

/// Blend `color` toward the background by the fog factor at `depth`.
#[must_use]
pub fn apply_fog(color: Rgb, depth: f64) -> Rgb {
    color.lerp(BACKGROUND, fog_factor(depth))
}
