//! Soft gradient and drifting color blobs layered above the scene.
//!
//! Pure CSS; the blobs are animated by keyframes in the stylesheet.

use leptos::prelude::*;

const BLOBS: [&str; 3] = ["backdrop__blob--blue", "backdrop__blob--purple", "backdrop__blob--green"];

#[component]
pub fn AmbientBackdrop() -> impl IntoView {
    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop__gradient"></div>
            <div class="backdrop__blobs">
                {BLOBS.iter().map(|modifier| view! { <div class=format!("backdrop__blob {modifier}")></div> }).collect_view()}
            </div>
        </div>
    }
}
