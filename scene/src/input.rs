//! Input model for the orbit camera.
//!
//! Only one gesture exists: a primary-button drag that orbits the camera.
//! Wheel and secondary buttons are accepted and ignored because zoom and pan
//! are disabled for the background scene.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::DRAG_RADIANS_PER_PX;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// The active gesture between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    #[default]
    Idle,
    Orbiting {
        last_x: f64,
        last_y: f64,
    },
}

/// Camera delta produced by a pointer move, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitDelta {
    pub d_azimuth: f64,
    pub d_polar: f64,
}

impl InputState {
    /// Begin a gesture. Returns `true` when the scene captured the pointer.
    pub fn pointer_down(&mut self, x: f64, y: f64, button: Button) -> bool {
        if button != Button::Primary {
            return false;
        }
        *self = Self::Orbiting { last_x: x, last_y: y };
        true
    }

    /// Continue a gesture; `None` while idle.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<OrbitDelta> {
        let Self::Orbiting { last_x, last_y } = *self else {
            return None;
        };
        *self = Self::Orbiting { last_x: x, last_y: y };
        Some(OrbitDelta {
            d_azimuth: (x - last_x) * DRAG_RADIANS_PER_PX,
            d_polar: -(y - last_y) * DRAG_RADIANS_PER_PX,
        })
    }

    /// End any gesture.
    pub fn pointer_up(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Orbiting { .. })
    }
}
