//! Todo Item Component
//!
//! Single row: status checkbox, title with inline editing, delete button
//! and the loader overlay.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{TitleEditor, Todo};

use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    // Rows are keyed by id; the record itself is read from the store so
    // toggles and renames update the row in place
    let id = todo.id;
    let initial = todo;
    let todo = Memo::new(move |prev: Option<&Todo>| {
        state
            .todos()
            .with(|todos| todos.iter().find(|t| t.id == id).cloned())
            .or_else(|| prev.cloned())
            .unwrap_or_else(|| initial.clone())
    });
    let completed = move || todo.with(|t| t.completed);

    // Local in-flight flags (bulk operations are tracked in the store)
    let is_deleting = RwSignal::new(false);
    let is_updating = RwSignal::new(false);
    let editor = RwSignal::new(TitleEditor::default());
    let edit_ref = NodeRef::<Input>::new();
    let status_ref = NodeRef::<Input>::new();

    let in_bulk_delete = move || state.bulk_deleting_ids().with(|ids| ids.contains(&id));
    let in_bulk_update = move || state.updating_ids().with(|ids| ids.contains(&id));
    let is_busy = move || is_deleting.get() || is_updating.get() || in_bulk_delete() || in_bulk_update();
    let is_editing = move || editor.with(|e| e.is_editing());

    // Focus the edit field when it opens
    Effect::new(move |_| {
        if is_editing() {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let handle_delete = move || {
        is_deleting.set(true);
        let service = ctx.service();
        spawn_local(async move {
            let _ = service.delete_todo(id).await;
            // The row is gone on success
            let _ = is_deleting.try_set(false);
        });
    };

    let handle_toggle = move |_| {
        is_updating.set(true);
        let service = ctx.service();
        let current = todo.get_untracked();
        spawn_local(async move {
            if service.toggle_one(&current).await.is_err() {
                // The stored record did not change, so `prop:checked` will not
                // re-run: put the clicked box back to the stored status
                let stored = service.store().with_state(|s| s.find(id).map(|t| t.completed));
                if let (Some(input), Some(checked)) = (status_ref.get_untracked(), stored) {
                    input.set_checked(checked);
                }
            }
            let _ = is_updating.try_set(false);
        });
    };

    let handle_submit = move || {
        // Submit and the following blur both land here
        if !editor.with_untracked(|e| e.is_editing()) || is_updating.get_untracked() {
            return;
        }
        let draft = editor.with_untracked(|e| e.draft().to_string());
        let current = todo.get_untracked();
        let service = ctx.service();
        is_updating.set(true);
        spawn_local(async move {
            let result = service.commit_edit(&current, &draft).await;
            let _ = is_updating.try_set(false);
            let closed = editor.try_update(|e| e.settle(&result)).unwrap_or(true);
            if !closed {
                if let Some(input) = edit_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
        });
    };

    let handle_keyup = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            editor.update(|e| e.cancel());
        }
    };

    view! {
        <div data-cy="Todo" class="todo" class:completed=completed>
            <label class="todo__status-label">
                <input
                    data-cy="TodoStatus"
                    type="checkbox"
                    class="todo__status"
                    node_ref=status_ref
                    prop:checked=completed
                    on:change=handle_toggle
                    disabled=move || is_updating.get() || in_bulk_delete()
                />
            </label>

            <Show
                when=is_editing
                fallback=move || {
                    view! {
                        <span
                            data-cy="TodoTitle"
                            class="todo__title"
                            on:dblclick=move |_| editor.update(|e| e.begin(&todo.get_untracked()))
                        >
                            {move || todo.with(|t| t.title.clone())}
                        </span>

                        <button
                            type="button"
                            class="todo__remove"
                            data-cy="TodoDelete"
                            on:click=move |_| handle_delete()
                        >
                            "×"
                        </button>
                    }
                }
            >
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    handle_submit();
                }>
                    <input
                        data-cy="TodoTitleField"
                        type="text"
                        class="todo__title-field"
                        placeholder="Empty todo will be deleted"
                        node_ref=edit_ref
                        prop:value=move || editor.with(|e| e.draft().to_string())
                        on:input=move |ev| editor.update(|e| e.set_draft(event_target_value(&ev)))
                        on:keyup=handle_keyup
                        on:blur=move |_| handle_submit()
                    />
                </form>
            </Show>

            <div data-cy="TodoLoader" class="modal overlay" class=("is-active", is_busy)>
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}
