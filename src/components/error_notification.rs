//! Error Notification Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

/// Shows the current notice; hidden when there is none
#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    let is_hidden = move || state.notice().with(|notice| notice.is_none());

    view! {
        <div
            data-cy="ErrorNotification"
            class="notification is-danger is-light has-text-weight-normal"
            class:hidden=is_hidden
        >
            <button
                data-cy="HideErrorButton"
                type="button"
                class="delete"
                on:click=move |_| ctx.dismiss_notice()
            />
            {move || state.notice().get().unwrap_or_default()}
        </div>
    }
}
