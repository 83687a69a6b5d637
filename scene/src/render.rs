//! Rendering: paints a projected [`SceneFrame`] onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only frame and produces pixels; it does not mutate any
//! scene state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Scene::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::Rgb;
use crate::frame::{DrawItem, SceneFrame, Shape, StarSprite};

/// Lightness-0.9 white used for every star.
const STAR_COLOR: Rgb = Rgb { r: 229.5, g: 229.5, b: 229.5 };

/// Star sprites below this size are skipped.
const MIN_STAR_PX: f64 = 0.25;

/// Draw the full frame: background, stars, then depth-sorted geometry.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    frame: &SceneFrame,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear to the background color.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(&frame.background.to_css(1.0));
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    // Layer 2: stars, unfogged.
    draw_stars(ctx, &frame.stars);

    // Layer 3: geometry, back to front.
    for item in &frame.items {
        draw_item(ctx, item)?;
    }

    Ok(())
}

fn draw_stars(ctx: &CanvasRenderingContext2d, stars: &[StarSprite]) {
    ctx.set_fill_style_str(&STAR_COLOR.to_css(1.0));
    for star in stars {
        if star.size < MIN_STAR_PX {
            continue;
        }
        // Soft edge: small sprites fade instead of shrinking to nothing.
        ctx.set_global_alpha((star.size / 3.0).clamp(0.2, 0.9));
        let half = star.size * 0.5;
        ctx.fill_rect(star.x - half, star.y - half, star.size, star.size);
    }
    ctx.set_global_alpha(1.0);
}

fn draw_item(ctx: &CanvasRenderingContext2d, item: &DrawItem) -> Result<(), JsValue> {
    match &item.shape {
        Shape::Polygon { points, fill } => {
            draw_polygon(ctx, points, *fill);
            Ok(())
        }
        Shape::Segment { from, to, width, color } => {
            draw_segment(ctx, *from, *to, *width, *color);
            Ok(())
        }
        Shape::Glow { x, y, radius, color } => draw_glow(ctx, *x, *y, *radius, *color),
        Shape::Label { x, y, font_px, squash, text, fill, outline, outline_px } => {
            draw_label(ctx, *x, *y, *font_px, *squash, text, *fill, *outline, *outline_px)
        }
    }
}

fn draw_polygon(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)], fill: Rgb) {
    let Some(((x0, y0), rest)) = points.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(*x0, *y0);
    for (x, y) in rest {
        ctx.line_to(*x, *y);
    }
    ctx.close_path();
    let css = fill.to_css(1.0);
    ctx.set_fill_style_str(&css);
    ctx.fill();
    // Hairline in the same color hides seams between adjacent faces.
    ctx.set_stroke_style_str(&css);
    ctx.set_line_width(0.5);
    ctx.stroke();
}

fn draw_segment(ctx: &CanvasRenderingContext2d, from: (f64, f64), to: (f64, f64), width: f64, color: Rgb) {
    ctx.begin_path();
    ctx.move_to(from.0, from.1);
    ctx.line_to(to.0, to.1);
    ctx.set_line_cap("round");
    ctx.set_line_width(width.max(0.5));
    ctx.set_stroke_style_str(&color.to_css(1.0));
    ctx.stroke();
}

fn draw_glow(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, color: Rgb) -> Result<(), JsValue> {
    if radius <= 0.0 {
        return Ok(());
    }
    let gradient = ctx.create_radial_gradient(x, y, 0.0, x, y, radius)?;
    gradient.add_color_stop(0.0, &color.to_css(0.9))?;
    gradient.add_color_stop(0.35, &color.to_css(0.35))?;
    gradient.add_color_stop(1.0, &color.to_css(0.0))?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_label(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    font_px: f64,
    squash: f64,
    text: &str,
    fill: Rgb,
    outline: Rgb,
    outline_px: f64,
) -> Result<(), JsValue> {
    if font_px < 1.0 || squash.abs() < 1e-3 {
        return Ok(());
    }
    ctx.save();
    let painted = (|| {
        ctx.translate(x, y)?;
        ctx.scale(squash, 1.0)?;
        ctx.set_font(&format!("bold {font_px:.1}px sans-serif"));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_line_join("round");
        ctx.set_line_width((outline_px * 2.0).max(1.0));
        ctx.set_stroke_style_str(&outline.to_css(1.0));
        ctx.stroke_text(text, 0.0, 0.0)?;
        ctx.set_fill_style_str(&fill.to_css(1.0));
        ctx.fill_text(text, 0.0, 0.0)
    })();
    // Balance the save even when a call above failed.
    ctx.restore();
    painted
}
