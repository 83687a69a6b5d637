//! Ambient 3D background scene for the SkillHunter onboarding page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! decorative scene end to end: an owned clock turns frame timestamps into
//! elapsed seconds, pure per-object update functions turn elapsed seconds into
//! transforms, an orbit camera projects the scene graph to screen space, and
//! the renderer paints the result onto a 2D canvas. The host UI layer is
//! responsible only for driving one [`engine::Scene::render`] call per
//! animation frame and forwarding pointer events.
//!
//! Nothing in here is observable by the rest of the page; the scene exists
//! purely for visual effect.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level scene and testable [`engine::SceneCore`] |
//! | [`clock`] | Owned monotonic clock producing elapsed seconds |
//! | [`animate`] | Pure `update(elapsed)` transforms for every animated group |
//! | [`frame`] | Scene graph walk producing depth-sorted draw items |
//! | [`camera`] | Vectors, orbit camera, and perspective projection |
//! | [`stars`] | Seeded starfield generation and twinkle |
//! | [`color`] | RGB colors, blending, and fog |
//! | [`input`] | Orbit drag gesture state machine |
//! | [`render`] | Canvas2D painter for a projected frame |
//! | [`consts`] | Shared numeric constants (speeds, radii, colors, etc.) |

pub mod animate;
pub mod camera;
pub mod clock;
pub mod color;
pub mod consts;
pub mod engine;
pub mod frame;
pub mod input;
pub mod render;
pub mod stars;
