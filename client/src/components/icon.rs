//! Inline SVG rendering for [`Icon`] glyphs.

use leptos::prelude::*;

use crate::util::icons::Icon;

/// Outline glyph sized by CSS; inherits `currentColor`.
#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional, into)] extra_class: String) -> impl IntoView {
    let class = if extra_class.is_empty() { "icon".to_owned() } else { format!("icon {extra_class}") };
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-label=icon.label()
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
