//! Todo Store
//!
//! Authoritative in-memory collection plus transient UI state.
//! Pure state container: no I/O. Every mutation is a full replace of the
//! affected field followed by a synchronous notification of subscribers.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;

use log::warn;

use crate::filter;
use crate::models::{StatusFilter, Todo, TodoId, PLACEHOLDER_ID};
use crate::notice::{Notice, NoticeMessage};

/// Snapshot of everything the presentation layer renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    /// Ordered by creation, unique by id
    pub todos: Vec<Todo>,
    /// Unconfirmed record for an in-flight create (never in `todos`)
    pub placeholder: Option<Todo>,
    /// Ids with an in-flight toggle-all update
    pub updating_ids: BTreeSet<TodoId>,
    /// Ids with an in-flight clear-completed delete
    pub bulk_deleting_ids: BTreeSet<TodoId>,
    pub notice: Option<Notice>,
    pub filter: StatusFilter,
    /// Draft text of the new-todo input
    pub new_title: String,
    /// A create request is in flight; the new-todo input is disabled
    pub submitting: bool,
}

impl TodoState {
    /// Projection of `todos` for the current filter
    pub fn visible_todos(&self) -> Vec<Todo> {
        filter::project(&self.todos, self.filter)
    }

    pub fn find(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn notice_text(&self) -> Option<&'static str> {
        self.notice.map(|n| n.message.text())
    }
}

type Subscriber = Rc<dyn Fn(&TodoState)>;

#[derive(Default)]
struct Inner {
    state: TodoState,
    subscribers: Vec<Subscriber>,
    notice_seq: u64,
}

/// Shared handle to the store (cheap to clone, single-threaded)
#[derive(Clone, Default)]
pub struct TodoStore {
    inner: Rc<RefCell<Inner>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer called after every mutation
    ///
    /// It is also called once immediately with the current state.
    pub fn subscribe(&self, subscriber: impl Fn(&TodoState) + 'static) {
        let subscriber: Subscriber = Rc::new(subscriber);
        self.inner.borrow_mut().subscribers.push(subscriber.clone());
        let snapshot = self.snapshot();
        subscriber(&snapshot);
    }

    pub fn snapshot(&self) -> TodoState {
        self.inner.borrow().state.clone()
    }

    /// Read without cloning the whole state
    pub fn with_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
        f(&self.inner.borrow().state)
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.with_state(|s| s.todos.clone())
    }

    fn mutate(&self, f: impl FnOnce(&mut TodoState)) {
        let (snapshot, subscribers) = {
            let mut inner = self.inner.borrow_mut();
            f(&mut inner.state);
            (inner.state.clone(), inner.subscribers.clone())
        };
        // Borrow released: subscribers may read the store again
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }

    // ========================
    // Collection
    // ========================

    /// Replace the whole collection
    ///
    /// Later records with an already-seen id, and placeholder ids, are dropped.
    pub fn set_todos(&self, todos: Vec<Todo>) {
        let todos = dedupe(todos);
        self.mutate(|s| s.todos = todos);
    }

    /// Append a newly created record (replaces in place if the id is already present)
    pub fn append_todo(&self, todo: Todo) {
        if todo.is_placeholder() {
            warn!("store: refusing to append a record with the placeholder id");
            return;
        }
        self.mutate(|s| s.todos = upserted(&s.todos, todo));
    }

    /// Replace the record identified by `id`; no-op when it is gone
    pub fn replace_todo(&self, id: TodoId, updated: Todo) {
        self.mutate(|s| {
            s.todos = s
                .todos
                .iter()
                .map(|t| if t.id == id { updated.clone() } else { t.clone() })
                .collect();
            s.todos = dedupe(std::mem::take(&mut s.todos));
        });
    }

    pub fn remove_todo(&self, id: TodoId) {
        self.mutate(|s| s.todos = s.todos.iter().filter(|t| t.id != id).cloned().collect());
    }

    // ========================
    // Create lifecycle
    // ========================

    /// Show the placeholder and lock the new-todo input in one notification
    pub fn begin_create(&self, placeholder: Todo) {
        if !placeholder.is_placeholder() {
            warn!("store: placeholder must use id {}, got {}", PLACEHOLDER_ID, placeholder.id);
            return;
        }
        self.mutate(|s| {
            s.placeholder = Some(placeholder);
            s.submitting = true;
        });
    }

    /// Drop the placeholder and unlock the input; on success append the
    /// confirmed record and clear the draft
    pub fn finish_create(&self, created: Option<Todo>) {
        let created = created.filter(|todo| !todo.is_placeholder());
        self.mutate(|s| {
            if let Some(todo) = created {
                s.todos = upserted(&s.todos, todo);
                s.new_title.clear();
            }
            s.placeholder = None;
            s.submitting = false;
        });
    }

    // ========================
    // Transient state
    // ========================

    /// Set or clear the placeholder; a record without the reserved id is rejected
    pub fn set_placeholder(&self, placeholder: Option<Todo>) {
        if let Some(todo) = &placeholder {
            if todo.id != PLACEHOLDER_ID {
                warn!("store: placeholder must use id {}, got {}", PLACEHOLDER_ID, todo.id);
                return;
            }
        }
        self.mutate(|s| s.placeholder = placeholder);
    }

    pub fn set_updating_ids(&self, ids: BTreeSet<TodoId>) {
        self.mutate(|s| s.updating_ids = ids);
    }

    pub fn set_bulk_deleting_ids(&self, ids: BTreeSet<TodoId>) {
        self.mutate(|s| s.bulk_deleting_ids = ids);
    }

    pub fn set_filter(&self, filter: StatusFilter) {
        self.mutate(|s| s.filter = filter);
    }

    pub fn set_new_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.mutate(|s| s.new_title = title);
    }

    /// Show a notice and return its sequence number
    pub fn raise_notice(&self, message: NoticeMessage) -> u64 {
        let seq = {
            let mut inner = self.inner.borrow_mut();
            inner.notice_seq += 1;
            inner.notice_seq
        };
        self.mutate(|s| s.notice = Some(Notice { seq, message }));
        seq
    }

    /// Clear the notice only if it is still the one raised as `seq`
    pub fn clear_notice_if(&self, seq: u64) {
        let current = self.with_state(|s| s.notice.map(|n| n.seq));
        if current == Some(seq) {
            self.mutate(|s| s.notice = None);
        }
    }

    pub fn clear_notice(&self) {
        self.mutate(|s| s.notice = None);
    }
}

/// Copy of `todos` with `todo` appended, or swapped in if its id is present
fn upserted(todos: &[Todo], todo: Todo) -> Vec<Todo> {
    if todos.iter().any(|t| t.id == todo.id) {
        warn!("store: todo #{} already present, replacing", todo.id);
        todos.iter().map(|t| if t.id == todo.id { todo.clone() } else { t.clone() }).collect()
    } else {
        let mut todos = todos.to_vec();
        todos.push(todo);
        todos
    }
}

fn dedupe(todos: Vec<Todo>) -> Vec<Todo> {
    let mut seen = HashSet::with_capacity(todos.len());
    todos
        .into_iter()
        .filter(|todo| {
            if todo.is_placeholder() {
                warn!("store: dropping record with placeholder id");
                return false;
            }
            if !seen.insert(todo.id) {
                warn!("store: dropping duplicate todo #{}", todo.id);
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn todo(id: TodoId, completed: bool) -> Todo {
        Todo { id, user_id: 1, title: format!("Todo {}", id), completed }
    }

    #[test]
    fn test_set_todos_drops_duplicates_and_placeholders() {
        let store = TodoStore::new();
        store.set_todos(vec![todo(1, false), todo(2, true), todo(1, true), todo(0, false)]);

        let todos = store.todos();
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
        // First occurrence wins
        assert!(!todos[0].completed);
    }

    #[test]
    fn test_append_keeps_order_and_uniqueness() {
        let store = TodoStore::new();
        store.set_todos(vec![todo(1, false)]);
        store.append_todo(todo(2, false));
        store.append_todo(todo(2, true));
        store.append_todo(todo(0, false));

        let todos = store.todos();
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(todos[1].completed);
    }

    #[test]
    fn test_replace_and_remove_by_id() {
        let store = TodoStore::new();
        store.set_todos(vec![todo(1, false), todo(2, false), todo(3, false)]);

        store.replace_todo(2, todo(2, true));
        store.remove_todo(1);
        store.replace_todo(9, todo(9, true));

        let todos = store.todos();
        assert_eq!(todos, vec![todo(2, true), todo(3, false)]);
    }

    #[test]
    fn test_placeholder_must_use_reserved_id() {
        let store = TodoStore::new();
        store.set_placeholder(Some(todo(5, false)));
        assert!(store.snapshot().placeholder.is_none());

        store.set_placeholder(Some(Todo::placeholder(1, "x")));
        assert!(store.snapshot().placeholder.is_some());
        assert!(store.todos().is_empty());
    }

    #[test]
    fn test_create_lifecycle() {
        let store = TodoStore::new();
        store.set_todos(vec![todo(1, false)]);
        store.set_new_title("Write tests");

        store.begin_create(Todo::placeholder(1, "Write tests"));
        let state = store.snapshot();
        assert!(state.submitting);
        assert_eq!(state.placeholder.as_ref().map(|t| t.id), Some(PLACEHOLDER_ID));
        assert_eq!(state.todos.len(), 1);

        store.finish_create(Some(todo(2, false)));
        let state = store.snapshot();
        assert!(!state.submitting);
        assert!(state.placeholder.is_none());
        assert!(state.new_title.is_empty());
        assert_eq!(state.todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_failed_create_keeps_draft() {
        let store = TodoStore::new();
        store.set_new_title("Write tests");
        store.begin_create(Todo::placeholder(1, "Write tests"));

        store.finish_create(None);

        let state = store.snapshot();
        assert!(state.placeholder.is_none());
        assert!(!state.submitting);
        assert_eq!(state.new_title, "Write tests");
        assert!(state.todos.is_empty());
    }

    #[test]
    fn test_subscribers_are_notified_synchronously() {
        let store = TodoStore::new();
        let calls = Rc::new(Cell::new(0));
        let seen_len = Rc::new(Cell::new(0));

        {
            let calls = calls.clone();
            let seen_len = seen_len.clone();
            let reader = store.clone();
            store.subscribe(move |state| {
                calls.set(calls.get() + 1);
                seen_len.set(state.todos.len());
                // Re-entrant read must not panic
                assert_eq!(reader.todos().len(), state.todos.len());
            });
        }
        assert_eq!(calls.get(), 1);

        store.set_todos(vec![todo(1, false), todo(2, false)]);
        assert_eq!(calls.get(), 2);
        assert_eq!(seen_len.get(), 2);

        store.set_filter(StatusFilter::Active);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_stale_notice_clear_is_ignored() {
        let store = TodoStore::new();
        let first = store.raise_notice(NoticeMessage::AddFailed);
        let second = store.raise_notice(NoticeMessage::DeleteFailed);

        store.clear_notice_if(first);
        assert_eq!(store.snapshot().notice_text(), Some("Unable to delete a todo"));

        store.clear_notice_if(second);
        assert!(store.snapshot().notice.is_none());
    }

    #[test]
    fn test_find_by_id() {
        let store = TodoStore::new();
        store.set_todos(vec![todo(1, false), todo(2, true)]);

        let state = store.snapshot();
        assert_eq!(state.find(2), Some(&todo(2, true)));
        assert_eq!(state.find(3), None);
    }
}
