//! Terminal wizard panel: course cards and achievement badges.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::util::catalog::{ACHIEVEMENTS, ROADMAP};

#[component]
pub fn Roadmap() -> impl IntoView {
    view! {
        <section class="roadmap">
            <h2 class="panel__heading">"Your learning roadmap"</h2>
            <div class="roadmap__cards">
                {ROADMAP
                    .iter()
                    .map(|card| {
                        view! {
                            <article class="course-card">
                                <h3 class="course-card__title">{card.title}</h3>
                                <p class="course-card__description">{card.description}</p>
                                <div class="course-card__meta">
                                    <span>{card.duration}</span>
                                    <span>{card.difficulty}</span>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
            <ul class="roadmap__badges">
                {ACHIEVEMENTS
                    .iter()
                    .map(|badge| {
                        view! {
                            <li class="badge">
                                <IconGlyph icon=badge.icon extra_class="badge__icon" />
                                <span>{badge.label}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
