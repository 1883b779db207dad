use leptos::prelude::*;

/// Shown in place of content when a fetch failed, without any detail about the failure.
#[component]
pub fn ErrorIndicator() -> impl IntoView {
    view! { <p class="error">"error"</p> }
}
