//! Wizard card: progress row plus the panel for the current stage.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::choice_grid::ChoiceGrid;
use crate::components::progress_steps::ProgressSteps;
use crate::components::roadmap::Roadmap;
use crate::state::wizard::WizardState;

/// Renders exactly one stage panel, chosen by the current step.
#[component]
pub fn WizardPanel() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();
    let catalog = Memo::new(move |_| wizard.with(|w| w.step.catalog()));

    view! {
        <div class="wizard">
            <ProgressSteps />
            {move || match catalog.get() {
                Some(catalog) => view! { <ChoiceGrid catalog=catalog /> }.into_any(),
                None => view! { <Roadmap /> }.into_any(),
            }}
        </div>
    }
}
