//! Temp Todo Component
//!
//! Placeholder row shown while a create request is in flight.

use leptos::prelude::*;
use todo_core::Todo;

#[component]
pub fn TempTodo(todo: Todo) -> impl IntoView {
    view! {
        <div data-cy="Todo" class="todo">
            <label class="todo__status-label">
                <input data-cy="TodoStatus" type="checkbox" class="todo__status" disabled=true />
            </label>

            <span data-cy="TodoTitle" class="todo__title">{todo.title}</span>

            <div data-cy="TodoLoader" class="modal overlay is-active">
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}
