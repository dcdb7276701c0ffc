//! Footer Component
//!
//! Active count, status filter links and "Clear completed".

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{filter, StatusFilter};

use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    let active_count = move || state.todos().with(|todos| filter::active_count(todos));
    let has_completed = move || state.todos().with(|todos| filter::has_completed(todos));

    let clear_completed = move |_| {
        let service = ctx.service();
        spawn_local(async move {
            let outcome = service.delete_completed().await;
            if !outcome.is_success() {
                log::warn!("[FOOTER] {} completed todos could not be deleted", outcome.failed.len());
            }
        });
    };

    view! {
        <footer class="todoapp__footer" data-cy="Footer">
            <span class="todo-count" data-cy="TodosCounter">
                {move || format!("{} items left", active_count())}
            </span>

            <nav class="filter" data-cy="Filter">
                {StatusFilter::ALL.iter().map(|&status| {
                    let is_selected = move || state.filter().get() == status;
                    view! {
                        <a
                            href=status.href()
                            class="filter__link"
                            class:selected=is_selected
                            data-cy=format!("FilterLink{}", status.label())
                            on:click=move |_| ctx.set_filter(status)
                        >
                            {status.label()}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                data-cy="ClearCompletedButton"
                on:click=clear_completed
                disabled=move || !has_completed()
            >
                "Clear completed"
            </button>
        </footer>
    }
}
