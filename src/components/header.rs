//! Header Component
//!
//! Toggle-all button and the new-todo form.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::filter;

use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;
    let input_ref = NodeRef::<Input>::new();

    let has_todos = move || state.todos().with(|todos| !todos.is_empty());
    let all_completed = move || state.todos().with(|todos| filter::all_completed(todos));

    // Focus the input once a create settles (and whenever the list length changes)
    Effect::new(move |_| {
        let submitting = state.submitting().get();
        let _ = state.todos().with(|todos| todos.len());
        if !submitting {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = state.new_title().get_untracked();
        let service = ctx.service();
        spawn_local(async move {
            // Failures are surfaced through the notice
            let _ = service.create_todo(&title).await;
        });
    };

    let on_toggle_all = move |_| {
        let service = ctx.service();
        spawn_local(async move {
            service.toggle_all().await;
        });
    };

    view! {
        <header class="todoapp__header">
            <Show when=has_todos>
                <button
                    type="button"
                    class="todoapp__toggle-all"
                    class:active=all_completed
                    data-cy="ToggleAllButton"
                    on:click=on_toggle_all
                />
            </Show>

            <form on:submit=on_submit>
                <input
                    data-cy="NewTodoField"
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    node_ref=input_ref
                    prop:value=move || state.new_title().get()
                    on:input=move |ev| ctx.set_new_title(event_target_value(&ev))
                    disabled=move || state.submitting().get()
                />
            </form>
        </header>
    }
}
