//! Root component, HTML shell, and shared state providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::onboarding::OnboardingPage;
use crate::state::chat::ChatState;
use crate::state::wizard::WizardState;
use crate::util::asset_path::asset_url;

/// Output name of the bundle produced for this app.
pub const SITE_NAME: &str = "skillhunter";

/// Document shell rendered by the server around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <leptos_meta::MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the wizard and chat state as separate contexts so the two
/// widgets never observe each other's updates.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(WizardState::new()));
    provide_context(RwSignal::new(ChatState::default()));

    view! {
        <Stylesheet id="leptos" href=asset_url(&format!("pkg/{SITE_NAME}.css")) />
        <Title text="SkillHunter" />
        <Meta name="description" content="Level Up Your Career with Gamified Learning" />
        <Router>
            <Routes fallback=|| "Page not found.">
                <Route path=path!("") view=OnboardingPage />
            </Routes>
        </Router>
    }
}
