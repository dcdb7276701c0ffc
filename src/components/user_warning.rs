//! User Warning Component
//!
//! Rendered instead of the app when no owner id is configured.

use leptos::prelude::*;

#[component]
pub fn UserWarning(#[prop(into)] reason: String) -> impl IntoView {
    view! {
        <section class="section">
            <p class="box is-size-3">
                "Please set " <code>"TODO_USER_ID"</code> " at build time to your user id."
            </p>
            <p class="has-text-grey">{reason}</p>
        </section>
    }
}
