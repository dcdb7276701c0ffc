//! Mutation Orchestrator
//!
//! Coordinates the remote client and the store. Every operation follows the
//! same failure protocol: surface a fixed notice, schedule its auto-clear,
//! roll back speculative state, then return the error to the caller so
//! call-site state (an item's spinner, an input's focus) can react.

mod bulk;
mod edit;


use std::rc::Rc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::api::TodoApi;
use crate::config::{AppConfig, DEFAULT_NOTICE_DURATION_MS};
use crate::error::{ConfigError, TodoResult, ValidationError};
use crate::models::{NewTodo, StatusFilter, Todo, TodoId};
use crate::notice::{NoticeMessage, Scheduler};
use crate::store::TodoStore;

pub use bulk::BulkOutcome;
pub use edit::{EditAction, EditPlan, TitleEditor};

pub struct TodoService<A> {
    api: Rc<A>,
    store: TodoStore,
    scheduler: Rc<dyn Scheduler>,
    user_id: u32,
    notice_duration: Duration,
}

impl<A> Clone for TodoService<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: self.store.clone(),
            scheduler: self.scheduler.clone(),
            user_id: self.user_id,
            notice_duration: self.notice_duration,
        }
    }
}

impl<A: TodoApi> TodoService<A> {
    pub fn new(api: A, user_id: u32, scheduler: impl Scheduler + 'static) -> Self {
        Self {
            api: Rc::new(api),
            store: TodoStore::new(),
            scheduler: Rc::new(scheduler),
            user_id,
            notice_duration: Duration::from_millis(DEFAULT_NOTICE_DURATION_MS),
        }
    }

    /// Build from config; fails when no owner id is configured
    pub fn from_config(api: A, config: &AppConfig, scheduler: impl Scheduler + 'static) -> Result<Self, ConfigError> {
        let service = Self::new(api, config.user_id()?, scheduler).with_notice_duration(config.notice_duration());
        Ok(service)
    }

    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    /// Show `message` and clear it after the notice duration
    fn notify(&self, message: NoticeMessage) {
        let seq = self.store.raise_notice(message);
        let store = self.store.clone();
        self.scheduler
            .schedule(self.notice_duration, Box::new(move || store.clear_notice_if(seq)));
    }

    // ========================
    // UI state intents
    // ========================

    pub fn set_filter(&self, filter: StatusFilter) {
        self.store.set_filter(filter);
    }

    pub fn set_new_title(&self, title: impl Into<String>) {
        self.store.set_new_title(title);
    }

    /// Close button on the notification
    pub fn dismiss_notice(&self) {
        self.store.clear_notice();
    }

    // ========================
    // Remote operations
    // ========================

    /// Initial fetch of the owner's todos
    pub async fn load(&self) -> TodoResult<()> {
        match self.api.list().await {
            Ok(todos) => {
                info!("loaded {} todos", todos.len());
                self.store.set_todos(todos);
                Ok(())
            }
            Err(e) => {
                warn!("load failed: {}", e);
                self.notify(NoticeMessage::LoadFailed);
                Err(e.into())
            }
        }
    }

    /// Create a todo from `title` (trimmed)
    ///
    /// A blank title is rejected without a request. While the request is in
    /// flight the placeholder is shown and the input is locked.
    pub async fn create_todo(&self, title: &str) -> TodoResult<Todo> {
        let title = title.trim();
        if title.is_empty() {
            self.notify(NoticeMessage::EmptyTitle);
            return Err(ValidationError::EmptyTitle.into());
        }
        if self.store.with_state(|s| s.placeholder.is_some()) {
            debug!("create ignored: another create is in flight");
            return Err(ValidationError::CreateInFlight.into());
        }

        self.store.begin_create(Todo::placeholder(self.user_id, title));
        let result = self.api.create(&NewTodo::new(title, self.user_id)).await;

        match result {
            Ok(todo) => {
                info!("created todo #{}", todo.id);
                self.store.finish_create(Some(todo.clone()));
                Ok(todo)
            }
            Err(e) => {
                warn!("create failed: {}", e);
                self.notify(NoticeMessage::AddFailed);
                self.store.finish_create(None);
                Err(e.into())
            }
        }
    }

    pub async fn delete_todo(&self, id: TodoId) -> TodoResult<()> {
        match self.api.delete(id).await {
            Ok(()) => {
                info!("deleted todo #{}", id);
                self.store.remove_todo(id);
                Ok(())
            }
            Err(e) => {
                warn!("delete of #{} failed: {}", id, e);
                self.notify(NoticeMessage::DeleteFailed);
                Err(e.into())
            }
        }
    }

    /// Persist `updated` and swap the server's copy in by id
    pub async fn change_todo(&self, updated: Todo) -> TodoResult<Todo> {
        match self.api.update(&updated).await {
            Ok(changed) => {
                debug!("updated todo #{}", updated.id);
                self.store.replace_todo(updated.id, changed.clone());
                Ok(changed)
            }
            Err(e) => {
                warn!("update of #{} failed: {}", updated.id, e);
                self.notify(NoticeMessage::UpdateFailed);
                Err(e.into())
            }
        }
    }

    pub async fn toggle_one(&self, todo: &Todo) -> TodoResult<Todo> {
        self.change_todo(todo.toggled()).await
    }
}
