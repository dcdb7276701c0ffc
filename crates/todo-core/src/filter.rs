//! Filter View
//!
//! Stateless projections of the collection.

use crate::models::{StatusFilter, Todo};

/// Records matching `status`, in collection order
pub fn project(todos: &[Todo], status: StatusFilter) -> Vec<Todo> {
    todos.iter().filter(|todo| matches(todo, status)).cloned().collect()
}

pub fn matches(todo: &Todo, status: StatusFilter) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::Active => !todo.completed,
        StatusFilter::Completed => todo.completed,
    }
}

pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.completed).count()
}

/// True for an empty collection as well
pub fn all_completed(todos: &[Todo]) -> bool {
    todos.iter().all(|t| t.completed)
}

pub fn has_completed(todos: &[Todo]) -> bool {
    todos.iter().any(|t| t.completed)
}
