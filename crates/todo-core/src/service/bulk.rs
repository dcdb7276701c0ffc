//! Bulk operations: clear completed, toggle all.
//!
//! Requests are launched together and joined all-settled; each item's
//! outcome is independent and nothing is rolled back on partial failure.

use std::collections::BTreeSet;

use futures::future::join_all;
use log::info;

use super::TodoService;
use crate::api::TodoApi;
use crate::error::{TodoError, TodoResult};
use crate::filter;
use crate::models::{Todo, TodoId};

/// Per-item results of a bulk operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkOutcome {
    pub succeeded: Vec<TodoId>,
    pub failed: Vec<(TodoId, TodoError)>,
}

impl BulkOutcome {
    fn from_results<T>(ids: &[TodoId], results: Vec<TodoResult<T>>) -> Self {
        let mut outcome = Self::default();
        for (&id, result) in ids.iter().zip(results) {
            match result {
                Ok(_) => outcome.succeeded.push(id),
                Err(e) => outcome.failed.push((id, e)),
            }
        }
        outcome
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.succeeded.is_empty() && self.failed.is_empty()
    }
}

impl<A: TodoApi> TodoService<A> {
    /// Delete every completed todo concurrently
    pub async fn delete_completed(&self) -> BulkOutcome {
        let ids: Vec<TodoId> = self
            .store
            .with_state(|s| s.todos.iter().filter(|t| t.completed).map(|t| t.id).collect());
        if ids.is_empty() {
            return BulkOutcome::default();
        }

        info!("clearing {} completed todos", ids.len());
        self.store.set_bulk_deleting_ids(ids.iter().copied().collect());

        let results = join_all(ids.iter().map(|&id| self.delete_todo(id))).await;

        self.store.set_bulk_deleting_ids(BTreeSet::new());
        let outcome = BulkOutcome::from_results(&ids, results);
        info!("clear completed settled: {} ok, {} failed", outcome.succeeded.len(), outcome.failed.len());
        outcome
    }

    /// Mark everything completed, or everything active if all are completed
    ///
    /// Only the records whose state actually changes are sent.
    pub async fn toggle_all(&self) -> BulkOutcome {
        let targets = toggle_all_targets(&self.store.todos());
        if targets.is_empty() {
            return BulkOutcome::default();
        }

        let ids: Vec<TodoId> = targets.iter().map(|t| t.id).collect();
        info!("toggling {} todos", ids.len());
        self.store.set_updating_ids(ids.iter().copied().collect());

        let results = join_all(targets.into_iter().map(|todo| self.change_todo(todo))).await;

        self.store.set_updating_ids(BTreeSet::new());
        BulkOutcome::from_results(&ids, results)
    }
}

/// Records to send for toggle-all, already carrying their new state
fn toggle_all_targets(todos: &[Todo]) -> Vec<Todo> {
    if filter::all_completed(todos) {
        todos.iter().map(|t| t.with_completed(false)).collect()
    } else {
        todos.iter().filter(|t| !t.completed).map(|t| t.with_completed(true)).collect()
    }
}
