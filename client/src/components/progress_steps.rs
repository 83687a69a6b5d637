//! Four-circle progress indicator for the wizard.

#[cfg(test)]
#[path = "progress_steps_test.rs"]
mod progress_steps_test;

use leptos::prelude::*;

use crate::state::wizard::{WizardState, WizardStep};

fn circle_class(filled: bool) -> &'static str {
    if filled { "progress__circle progress__circle--filled" } else { "progress__circle" }
}

fn connector_class(filled: bool) -> &'static str {
    if filled { "progress__connector progress__connector--filled" } else { "progress__connector" }
}

/// Numbered circles joined by connectors; reads the wizard from context.
#[component]
pub fn ProgressSteps() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    view! {
        <div class="progress" role="list">
            {WizardStep::ALL
                .into_iter()
                .map(|step| {
                    let n = step.number();
                    let circle = move || circle_class(wizard.with(|w| w.circle_filled(n)));
                    let connector = (step != WizardStep::Roadmap)
                        .then(|| {
                            let class = move || connector_class(wizard.with(|w| w.connector_filled(n)));
                            view! { <div class=class></div> }
                        });
                    view! {
                        <div class=circle role="listitem">{n}</div>
                        {connector}
                    }
                })
                .collect_view()}
        </div>
    }
}
