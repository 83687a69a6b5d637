//! Seeded starfield.
//!
//! Stars are scattered in a spherical shell between `radius` and
//! `radius + depth`, drifting inward as the index grows so the shell fills
//! evenly. Generation is seeded so every mount paints the same sky.

#[cfg(test)]
#[path = "stars_test.rs"]
mod stars_test;

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::camera::Vec3;
use crate::consts::{STAR_COUNT, STAR_DEPTH, STAR_FACTOR, STAR_RADIUS, STAR_SEED, STAR_SPEED};

/// One star: world position and base point size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub size: f64,
}

/// Parameters for starfield generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldOptions {
    pub count: usize,
    pub radius: f64,
    pub depth: f64,
    pub factor: f64,
    pub speed: f64,
    pub seed: u64,
}

impl Default for StarfieldOptions {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            radius: STAR_RADIUS,
            depth: STAR_DEPTH,
            factor: STAR_FACTOR,
            speed: STAR_SPEED,
            seed: STAR_SEED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Starfield {
    pub stars: Vec<Star>,
    pub speed: f64,
}

impl Starfield {
    #[must_use]
    pub fn generate(options: StarfieldOptions) -> Self {
        let mut rng = SmallRng::seed_from_u64(options.seed);
        let mut r = options.radius + options.depth;
        let increment = if options.count == 0 { 0.0 } else { options.depth / options.count as f64 };

        let stars = (0..options.count)
            .map(|_| {
                r -= increment * rng.random::<f64>();
                let polar = (1.0 - rng.random::<f64>() * 2.0).acos();
                let azimuth = rng.random::<f64>() * TAU;
                let size = (0.5 + 0.5 * rng.random::<f64>()) * options.factor;
                Star { position: from_spherical(r, polar, azimuth), size }
            })
            .collect();

        Self { stars, speed: options.speed }
    }

    /// Twinkle multiplier for `star` at `elapsed`, in `2.0..=4.0`.
    #[must_use]
    pub fn twinkle(&self, star: &Star, elapsed: f64) -> f64 {
        3.0 + (star.position.x + 2.0 * elapsed * self.speed + 100.0).sin()
    }

    /// On-screen point size in CSS pixels for a star at view `depth`.
    #[must_use]
    pub fn point_size(&self, star: &Star, depth: f64, elapsed: f64) -> f64 {
        if depth <= 0.0 {
            return 0.0;
        }
        star.size * (30.0 / depth) * self.twinkle(star, elapsed)
    }
}

impl Default for Starfield {
    fn default() -> Self {
        Self::generate(StarfieldOptions::default())
    }
}

fn from_spherical(r: f64, polar: f64, azimuth: f64) -> Vec3 {
    let (sp, cp) = polar.sin_cos();
    let (sa, ca) = azimuth.sin_cos();
    Vec3::new(r * sp * sa, r * cp, r * sp * ca)
}
