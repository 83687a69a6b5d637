//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, animation
//! frames, asset URLs) from page and component logic. The static catalogs
//! live here too so components and state share one source of truth.

pub mod asset_path;
pub mod catalog;
#[cfg(feature = "hydrate")]
pub mod frame_loop;
pub mod icons;
pub mod reply_timer;
