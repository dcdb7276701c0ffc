//! Todo List Component
//!
//! Filtered todos followed by the pending placeholder.

use leptos::prelude::*;
use todo_core::{filter, Todo};

use crate::components::{TempTodo, TodoItem};
use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    let visible = move || {
        let status = state.filter().get();
        state.todos().with(|todos| filter::project(todos, status))
    };

    view! {
        <section class="todoapp__main" data-cy="TodoList">
            <For
                each=visible
                // Rows read their own record, so a change never remounts (and closes) an editor
                key=|todo: &Todo| todo.id
                children=move |todo: Todo| view! { <TodoItem todo=todo /> }
            />

            {move || state.placeholder().get().map(|todo| view! { <TempTodo todo=todo /> })}
        </section>
    }
}
