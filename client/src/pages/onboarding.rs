//! The single onboarding screen.
//!
//! Layers, back to front: the animated scene, the gradient backdrop, the
//! page content (header and wizard), and the chat widget.

use leptos::prelude::*;

use crate::components::ambient_backdrop::AmbientBackdrop;
use crate::components::chat_widget::ChatWidget;
use crate::components::scene_host::SceneHost;
use crate::components::wizard_panel::WizardPanel;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    view! {
        <div class="onboarding">
            <SceneHost />
            <AmbientBackdrop />
            <main class="onboarding__content">
                <header class="onboarding__header">
                    <div class="onboarding__halo" aria-hidden="true"></div>
                    <h1 class="onboarding__title">"SkillHunter"</h1>
                    <p class="onboarding__tagline">"Level Up Your Career with Gamified Learning"</p>
                </header>
                <WizardPanel />
            </main>
            <ChatWidget />
        </div>
    }
}
