//! Test doubles for the remote resource and the timer.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::{ApiResult, TodoApi};
use crate::error::NetworkError;
use crate::models::{NewTodo, Todo, TodoId};
use crate::notice::Scheduler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(NewTodo),
    Update(Todo),
    Delete(TodoId),
}

/// In-memory remote with failure injection and call recording
///
/// Every request yields once before completing, so requests joined
/// together are all in flight at the same time.
#[derive(Default)]
pub struct FakeApi {
    todos: RefCell<Vec<Todo>>,
    next_id: Cell<TodoId>,
    failing_ids: RefCell<HashSet<TodoId>>,
    fail_everything: Cell<bool>,
    calls: RefCell<Vec<Call>>,
    in_flight: Cell<usize>,
    max_in_flight: Cell<usize>,
}

impl FakeApi {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let api = Self::default();
        *api.todos.borrow_mut() = todos;
        api.next_id.set(next_id);
        api
    }

    /// Updates and deletes of `id` fail with a 500
    pub fn fail_id(&self, id: TodoId) {
        self.failing_ids.borrow_mut().insert(id);
    }

    pub fn fail_everything(&self, fail: bool) {
        self.fail_everything.set(fail);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn server_todos(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.get()
    }

    async fn round_trip(&self, call: Call) {
        self.calls.borrow_mut().push(call);
        self.in_flight.set(self.in_flight.get() + 1);
        self.max_in_flight.set(self.max_in_flight.get().max(self.in_flight.get()));
        tokio::task::yield_now().await;
        self.in_flight.set(self.in_flight.get() - 1);
    }

    fn check(&self, id: Option<TodoId>) -> ApiResult<()> {
        let failing = id.is_some_and(|id| self.failing_ids.borrow().contains(&id));
        if self.fail_everything.get() || failing {
            Err(NetworkError::Status(500))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        self.round_trip(Call::List).await;
        self.check(None)?;
        Ok(self.server_todos())
    }

    async fn create(&self, new_todo: &NewTodo) -> ApiResult<Todo> {
        self.round_trip(Call::Create(new_todo.clone())).await;
        self.check(None)?;
        let todo = Todo {
            id: self.next_id.get(),
            user_id: new_todo.user_id,
            title: new_todo.title.clone(),
            completed: new_todo.completed,
        };
        self.next_id.set(todo.id + 1);
        self.todos.borrow_mut().push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> ApiResult<Todo> {
        self.round_trip(Call::Update(todo.clone())).await;
        self.check(Some(todo.id))?;
        let mut todos = self.todos.borrow_mut();
        let stored = todos
            .iter_mut()
            .find(|t| t.id == todo.id)
            .ok_or(NetworkError::Status(404))?;
        *stored = todo.clone();
        Ok(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> ApiResult<()> {
        self.round_trip(Call::Delete(id)).await;
        self.check(Some(id))?;
        self.todos.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }
}

/// Scheduler whose tasks only run when the test says so
#[derive(Default, Clone)]
pub struct ManualScheduler {
    tasks: std::rc::Rc<RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn delays(&self) -> Vec<Duration> {
        self.tasks.borrow().iter().map(|(d, _)| *d).collect()
    }

    /// Fire every pending task, oldest first
    pub fn run_all(&self) {
        let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }

    /// Fire only the oldest pending task
    pub fn run_next(&self) {
        let task = {
            let mut tasks = self.tasks.borrow_mut();
            if tasks.is_empty() {
                None
            } else {
                Some(tasks.remove(0))
            }
        };
        if let Some((_, task)) = task {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.tasks.borrow_mut().push((delay, task));
    }
}
