//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by widget (`wizard`, `chat`) so each component depends on
//! one small model. Both are plain structs wrapped in `RwSignal`s and
//! provided through Leptos context by the root component.

pub mod chat;
pub mod wizard;
