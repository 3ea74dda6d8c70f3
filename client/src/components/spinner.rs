//! Busy indicator shown in place of a submit label.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! { <span class="spinner" role="progressbar" aria-label="Submitting"></span> }
}
