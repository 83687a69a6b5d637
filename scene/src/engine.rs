use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::OrbitCamera;
use crate::clock::SceneClock;
use crate::frame::{self, SceneFrame};
use crate::input::{Button, InputState};
use crate::render;
use crate::stars::{Starfield, StarfieldOptions};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core scene state: everything that doesn't depend on the canvas element.
///
/// Separated from `Scene` so it can be tested without WASM/browser dependencies.
pub struct SceneCore {
    pub clock: SceneClock,
    pub camera: OrbitCamera,
    pub input: InputState,
    pub starfield: Starfield,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for SceneCore {
    fn default() -> Self {
        Self::with_starfield(StarfieldOptions::default())
    }
}

impl SceneCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_starfield(options: StarfieldOptions) -> Self {
        Self {
            clock: SceneClock::new(),
            camera: OrbitCamera::default(),
            input: InputState::default(),
            starfield: Starfield::generate(options),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    /// Record the viewport size in CSS pixels. Returns `true` if it changed.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> bool {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let width = width_css.max(0.0);
        let height = height_css.max(0.0);
        #[allow(clippy::float_cmp)]
        let unchanged = width == self.viewport_width && height == self.viewport_height && dpr == self.dpr;
        if unchanged {
            return false;
        }
        self.viewport_width = width;
        self.viewport_height = height;
        self.dpr = dpr;
        true
    }

    /// Advance the clock to `now_ms` and build the frame for that moment.
    pub fn frame(&mut self, now_ms: f64) -> SceneFrame {
        let elapsed = self.clock.tick(now_ms);
        self.frame_at(elapsed)
    }

    /// Build the frame for an explicit elapsed time without touching the clock.
    #[must_use]
    pub fn frame_at(&self, elapsed: f64) -> SceneFrame {
        let view = self.camera.view(elapsed, self.viewport_width, self.viewport_height);
        frame::build(&view, &self.starfield, elapsed)
    }

    // --- Input events ---

    /// Returns `true` when the scene captured the pointer.
    pub fn on_pointer_down(&mut self, x: f64, y: f64, button: Button) -> bool {
        self.input.pointer_down(x, y, button)
    }

    /// Returns `true` when the camera moved.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        match self.input.pointer_move(x, y) {
            Some(delta) => {
                self.camera.orbit_by(delta.d_azimuth, delta.d_polar);
                true
            }
            None => false,
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.input.pointer_up();
    }

    /// Zoom is disabled; the wheel is never consumed.
    #[must_use]
    pub fn on_wheel(&self) -> bool {
        false
    }
}

/// The browser-facing scene: core state plus the canvas it paints on.
pub struct Scene {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: SceneCore,
}

impl Scene {
    /// Attach to `canvas` and acquire its 2D context.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context available.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: SceneCore::new() })
    }

    /// Resize the backing store when the CSS size or pixel ratio changes.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        if self.core.set_viewport(width_css, height_css, dpr) {
            self.canvas.set_width((self.core.viewport_width * self.core.dpr).round() as u32);
            self.canvas.set_height((self.core.viewport_height * self.core.dpr).round() as u32);
        }
    }

    /// Paint the frame for `now_ms`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&mut self, now_ms: f64) -> Result<(), JsValue> {
        let frame = self.core.frame(now_ms);
        render::draw(&self.ctx, &frame, self.core.viewport_width, self.core.viewport_height, self.core.dpr)
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, x: f64, y: f64, button: Button) -> bool {
        self.core.on_pointer_down(x, y, button)
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.core.on_pointer_move(x, y)
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_pointer_up();
    }

    #[must_use]
    pub fn on_wheel(&self) -> bool {
        self.core.on_wheel()
    }
}
