//! View State Store
//!
//! Leptos `reactive_stores` mirror of the core `TodoStore`, for
//! fine-grained reactivity. Only written from the core store's subscriber.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{StatusFilter, Todo, TodoId, TodoState};

/// Render-facing state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ViewState {
    /// All todos in creation order
    pub todos: Vec<Todo>,
    /// Unconfirmed todo while a create is in flight
    pub placeholder: Option<Todo>,
    pub updating_ids: BTreeSet<TodoId>,
    pub bulk_deleting_ids: BTreeSet<TodoId>,
    /// Current error message, if any
    pub notice: Option<String>,
    pub filter: StatusFilter,
    pub new_title: String,
    pub submitting: bool,
}

impl From<&TodoState> for ViewState {
    fn from(state: &TodoState) -> Self {
        Self {
            todos: state.todos.clone(),
            placeholder: state.placeholder.clone(),
            updating_ids: state.updating_ids.clone(),
            bulk_deleting_ids: state.bulk_deleting_ids.clone(),
            notice: state.notice_text().map(str::to_string),
            filter: state.filter,
            new_title: state.new_title.clone(),
            submitting: state.submitting,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<ViewState>;

// ========================
// Store Helper Functions
// ========================

/// Copy a core snapshot into the view store, touching only changed fields
pub fn store_sync(store: &AppStore, state: &TodoState) {
    let next = ViewState::from(state);

    if store.todos().get_untracked() != next.todos {
        store.todos().set(next.todos);
    }
    if store.placeholder().get_untracked() != next.placeholder {
        store.placeholder().set(next.placeholder);
    }
    if store.updating_ids().get_untracked() != next.updating_ids {
        store.updating_ids().set(next.updating_ids);
    }
    if store.bulk_deleting_ids().get_untracked() != next.bulk_deleting_ids {
        store.bulk_deleting_ids().set(next.bulk_deleting_ids);
    }
    if store.notice().get_untracked() != next.notice {
        store.notice().set(next.notice);
    }
    if store.filter().get_untracked() != next.filter {
        store.filter().set(next.filter);
    }
    if store.new_title().get_untracked() != next.new_title {
        store.new_title().set(next.new_title);
    }
    if store.submitting().get_untracked() != next.submitting {
        store.submitting().set(next.submitting);
    }
}
