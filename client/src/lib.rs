//! SkillHunter onboarding front end.
//!
//! | Module       | Responsibility                                   |
//! |--------------|--------------------------------------------------|
//! | `app`        | Root component, HTML shell, context providers    |
//! | `pages`      | Route-level screens                              |
//! | `components` | Wizard, chat widget, and scene host views        |
//! | `state`      | Pure wizard and chat models                      |
//! | `util`       | Catalogs, icons, timers, and browser helpers     |
//!
//! Built twice: with `ssr` for the server renderer and with `hydrate` for
//! the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating skillhunter");
    leptos::mount::hydrate_body(app::App);
}
