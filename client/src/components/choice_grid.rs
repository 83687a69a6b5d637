//! Grid of selectable choice buttons for one wizard stage.

#[cfg(test)]
#[path = "choice_grid_test.rs"]
mod choice_grid_test;

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::state::wizard::WizardState;
use crate::util::catalog::Catalog;

fn choice_class(selected: bool) -> &'static str {
    if selected { "choice choice--selected" } else { "choice" }
}

/// Buttons for every item in `catalog`; a click records the choice and
/// advances the wizard.
#[component]
pub fn ChoiceGrid(catalog: Catalog) -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    view! {
        <section class="choice-panel">
            <h2 class="panel__heading">{catalog.heading()}</h2>
            <div class="choice-grid">
                {catalog
                    .items()
                    .iter()
                    .map(|item| {
                        let id = item.id;
                        let class = move || choice_class(wizard.with(|w| w.is_selected(catalog, id)));
                        let on_click = move |_| {
                            wizard.update(|w| w.select(catalog, id));
                            #[cfg(feature = "hydrate")]
                            log::debug!(
                                "wizard: {catalog:?} -> {id}, now step {}",
                                wizard.with_untracked(|w| w.step.number())
                            );
                        };
                        view! {
                            <button type="button" class=class on:click=on_click>
                                <IconGlyph icon=item.icon extra_class="choice__icon" />
                                <span class="choice__label">{item.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
