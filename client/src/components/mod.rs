//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the onboarding chrome while reading and writing shared
//! state from Leptos context providers. `scene_host` is the only component
//! that touches the canvas.

pub mod ambient_backdrop;
pub mod chat_widget;
pub mod choice_grid;
pub mod icon;
pub mod progress_steps;
pub mod roadmap;
pub mod scene_host;
pub mod wizard_panel;
