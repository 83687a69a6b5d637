//! One frame of the scene, projected to screen space.
//!
//! [`build`] walks the scene graph at a given elapsed time, shades and fogs
//! every surface, and emits flat draw items tagged with view depth. The
//! renderer only has to paint them back to front.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use crate::animate::{self, PointLight, Transform};
use crate::camera::{Projected, Vec3, View};
use crate::color::{Rgb, apply_fog};
use crate::consts::{
    ACCENT_COLOR, AMBIENT_INTENSITY, BACKGROUND, CRYSTAL_COUNT, CRYSTAL_SIZE, LABEL_FONT_SIZE, LABEL_OUTLINE_COLOR,
    LABEL_OUTLINE_WIDTH, LABEL_TEXT, LIGHT_GAIN, LIGHT_INTENSITY, LIGHT_RANGE, PILLAR_HEIGHT, PILLAR_RADIUS,
    PILLAR_Y, PLATFORM_BOTTOM_RADIUS, PLATFORM_COLOR, PLATFORM_HEIGHT, PLATFORM_SEGMENTS, PLATFORM_TOP_RADIUS,
    RING_RADIUS, RING_SEGMENTS, RING_TUBE, RING_Y,
};
use crate::stars::Starfield;

/// Emissive strength for the ring and crystals.
const EMISSIVE_INTENSITY: f64 = 0.5;

/// World-space radius of a light's visible glow.
const GLOW_RADIUS: f64 = 1.2;

/// A star sprite, drawn before everything else and never fogged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSprite {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// A depth-sorted primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled convex polygon.
    Polygon { points: Vec<(f64, f64)>, fill: Rgb },
    /// Stroked segment.
    Segment { from: (f64, f64), to: (f64, f64), width: f64, color: Rgb },
    /// Soft radial glow around a light.
    Glow { x: f64, y: f64, radius: f64, color: Rgb },
    /// Centered outlined text, squashed horizontally by `squash`.
    Label { x: f64, y: f64, font_px: f64, squash: f64, text: &'static str, fill: Rgb, outline: Rgb, outline_px: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub depth: f64,
    pub shape: Shape,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub elapsed: f64,
    pub background: Rgb,
    pub stars: Vec<StarSprite>,
    /// Sorted back to front.
    pub items: Vec<DrawItem>,
}

/// Build a frame for `elapsed` seconds as seen through `view`.
#[must_use]
pub fn build(view: &View, starfield: &Starfield, elapsed: f64) -> SceneFrame {
    let lights = animate::lights(elapsed);
    let mut items = Vec::new();

    push_platform(&mut items, view, &lights, animate::platform(elapsed));
    push_crystals(&mut items, view, &lights, elapsed);
    push_label(&mut items, view, animate::label(elapsed));
    push_glows(&mut items, view, &lights);

    items.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    SceneFrame { elapsed, background: BACKGROUND, stars: project_stars(view, starfield, elapsed), items }
}

/// Surface color under the frame's lights: ambient plus point-light diffuse,
/// plus any emissive term.
#[must_use]
pub fn shade(base: Rgb, emissive: Option<Rgb>, position: Vec3, normal: Vec3, lights: &[PointLight]) -> Rgb {
    let mut lit = base.scale(AMBIENT_INTENSITY);
    for light in lights {
        let to_light = light.position.sub(position);
        let distance = to_light.length();
        let falloff = (1.0 - distance / LIGHT_RANGE).clamp(0.0, 1.0).powi(2);
        let lambert = normal.dot(to_light.normalized()).max(0.0);
        let strength = LIGHT_INTENSITY * falloff * lambert * LIGHT_GAIN;
        lit = lit.add(mix_light(base, light.color).scale(strength));
    }
    match emissive {
        Some(glow) => lit.add(glow.scale(EMISSIVE_INTENSITY)),
        None => lit,
    }
}

fn mix_light(base: Rgb, light: Rgb) -> Rgb {
    Rgb { r: base.r * light.r / 255.0, g: base.g * light.g / 255.0, b: base.b * light.b / 255.0 }
}

fn project_stars(view: &View, starfield: &Starfield, elapsed: f64) -> Vec<StarSprite> {
    starfield
        .stars
        .iter()
        .filter_map(|star| {
            let p = view.project(star.position)?;
            Some(StarSprite { x: p.x, y: p.y, size: starfield.point_size(star, p.depth, elapsed) })
        })
        .collect()
}

/// Emit a face if it faces the camera and all corners are in front of it.
fn push_face(
    items: &mut Vec<DrawItem>,
    view: &View,
    lights: &[PointLight],
    corners: &[Vec3],
    outward: Vec3,
    base: Rgb,
    emissive: Option<Rgb>,
) {
    if corners.is_empty() {
        return;
    }
    let centroid = corners.iter().fold(Vec3::ZERO, |acc, c| acc.add(*c)).scale(1.0 / corners.len() as f64);
    if outward.dot(view.eye.sub(centroid)) <= 0.0 {
        return;
    }
    let Some(projected) = corners.iter().map(|c| view.project(*c)).collect::<Option<Vec<Projected>>>() else {
        return;
    };
    let depth = view.depth_of(centroid);
    let fill = apply_fog(shade(base, emissive, centroid, outward, lights), depth);
    items.push(DrawItem {
        depth,
        shape: Shape::Polygon { points: projected.iter().map(|p| (p.x, p.y)).collect(), fill },
    });
}

fn push_segment(items: &mut Vec<DrawItem>, view: &View, from: Vec3, to: Vec3, world_width: f64, color: Rgb) {
    let (Some(a), Some(b)) = (view.project(from), view.project(to)) else {
        return;
    };
    let depth = (a.depth + b.depth) * 0.5;
    items.push(DrawItem {
        depth,
        shape: Shape::Segment {
            from: (a.x, a.y),
            to: (b.x, b.y),
            width: world_width * (a.scale + b.scale) * 0.5,
            color: apply_fog(color, depth),
        },
    });
}

fn push_platform(items: &mut Vec<DrawItem>, view: &View, lights: &[PointLight], group: Transform) {
    let half = PLATFORM_HEIGHT * 0.5;
    let ring_point = |radius: f64, y: f64, i: usize| {
        let angle = i as f64 / PLATFORM_SEGMENTS as f64 * std::f64::consts::TAU;
        group.apply(Vec3::new(angle.cos() * radius, y, angle.sin() * radius))
    };

    // Sides: one quad per segment with its own outward normal.
    for i in 0..PLATFORM_SEGMENTS {
        let j = (i + 1) % PLATFORM_SEGMENTS;
        let corners = [
            ring_point(PLATFORM_BOTTOM_RADIUS, -half, i),
            ring_point(PLATFORM_BOTTOM_RADIUS, -half, j),
            ring_point(PLATFORM_TOP_RADIUS, half, j),
            ring_point(PLATFORM_TOP_RADIUS, half, i),
        ];
        let mid_angle = (i as f64 + 0.5) / PLATFORM_SEGMENTS as f64 * std::f64::consts::TAU;
        let slope = (PLATFORM_BOTTOM_RADIUS - PLATFORM_TOP_RADIUS) / PLATFORM_HEIGHT;
        let outward = Vec3::new(mid_angle.cos(), slope, mid_angle.sin()).normalized().rotate_y(group.yaw);
        push_face(items, view, lights, &corners, outward, PLATFORM_COLOR, None);
    }

    let top = (0..PLATFORM_SEGMENTS).map(|i| ring_point(PLATFORM_TOP_RADIUS, half, i)).collect::<Vec<_>>();
    push_face(items, view, lights, &top, Vec3::UP, PLATFORM_COLOR, None);
    let bottom = (0..PLATFORM_SEGMENTS).map(|i| ring_point(PLATFORM_BOTTOM_RADIUS, -half, i)).collect::<Vec<_>>();
    push_face(items, view, lights, &bottom, Vec3::UP.scale(-1.0), PLATFORM_COLOR, None);

    // Decorative ring floating just above the top face.
    let ring_color = shade(ACCENT_COLOR, Some(ACCENT_COLOR), group.position, Vec3::UP, lights);
    for i in 0..RING_SEGMENTS {
        let a0 = i as f64 / RING_SEGMENTS as f64 * std::f64::consts::TAU;
        let a1 = (i + 1) as f64 / RING_SEGMENTS as f64 * std::f64::consts::TAU;
        let from = group.apply(Vec3::new(a0.cos() * RING_RADIUS, RING_Y, a0.sin() * RING_RADIUS));
        let to = group.apply(Vec3::new(a1.cos() * RING_RADIUS, RING_Y, a1.sin() * RING_RADIUS));
        push_segment(items, view, from, to, RING_TUBE * 2.0, ring_color);
    }

    // Center pillar.
    let pillar_base = group.apply(Vec3::new(0.0, PILLAR_Y - PILLAR_HEIGHT * 0.5, 0.0));
    let pillar_top = group.apply(Vec3::new(0.0, PILLAR_Y + PILLAR_HEIGHT * 0.5, 0.0));
    let pillar_mid = pillar_base.add(pillar_top).scale(0.5);
    let facing = view.eye.sub(pillar_mid).normalized();
    let pillar_color = shade(ACCENT_COLOR, None, pillar_mid, facing, lights);
    push_segment(items, view, pillar_base, pillar_top, PILLAR_RADIUS * 2.0, pillar_color);
}

fn push_crystals(items: &mut Vec<DrawItem>, view: &View, lights: &[PointLight], elapsed: f64) {
    let ring = animate::crystal_ring(elapsed);
    let s = CRYSTAL_SIZE;
    let axes = [
        Vec3::new(s, 0.0, 0.0),
        Vec3::new(-s, 0.0, 0.0),
        Vec3::new(0.0, s, 0.0),
        Vec3::new(0.0, -s, 0.0),
        Vec3::new(0.0, 0.0, s),
        Vec3::new(0.0, 0.0, -s),
    ];

    for index in 0..CRYSTAL_COUNT {
        let center_local = animate::crystal(index, elapsed);
        for x in [0, 1] {
            for y in [2, 3] {
                for z in [4, 5] {
                    let corners = [axes[x], axes[y], axes[z]].map(|offset| ring.apply(center_local.add(offset)));
                    let outward = axes[x].add(axes[y]).add(axes[z]).normalized().rotate_y(ring.yaw);
                    push_face(items, view, lights, &corners, outward, ACCENT_COLOR, Some(ACCENT_COLOR));
                }
            }
        }
    }
}

fn push_label(items: &mut Vec<DrawItem>, view: &View, transform: Transform) {
    let Some(center) = view.project(transform.position) else {
        return;
    };
    items.push(DrawItem {
        depth: center.depth,
        shape: Shape::Label {
            x: center.x,
            y: center.y,
            font_px: LABEL_FONT_SIZE * center.scale,
            squash: transform.yaw.cos(),
            text: LABEL_TEXT,
            fill: apply_fog(ACCENT_COLOR, center.depth),
            outline: apply_fog(LABEL_OUTLINE_COLOR, center.depth),
            outline_px: LABEL_OUTLINE_WIDTH * center.scale,
        },
    });
}

fn push_glows(items: &mut Vec<DrawItem>, view: &View, lights: &[PointLight]) {
    for light in lights {
        let Some(p) = view.project(light.position) else {
            continue;
        };
        items.push(DrawItem {
            depth: p.depth,
            shape: Shape::Glow { x: p.x, y: p.y, radius: GLOW_RADIUS * p.scale, color: light.color },
        });
    }
}
