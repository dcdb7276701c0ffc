//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::{HttpTodoApi, StatusFilter, TodoService};

use crate::store::AppStore;

pub type Service = TodoService<HttpTodoApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Mutation orchestrator (single-threaded, so kept in local storage)
    service: StoredValue<Service, LocalStorage>,
    /// Reactive mirror of the core store - read only for components
    pub state: AppStore,
}

impl AppContext {
    pub fn new(service: Service, state: AppStore) -> Self {
        Self {
            service: StoredValue::new_local(service),
            state,
        }
    }

    /// Handle for use inside `spawn_local`
    pub fn service(&self) -> Service {
        self.service.get_value()
    }

    pub fn set_filter(&self, filter: StatusFilter) {
        self.service.with_value(|s| s.set_filter(filter));
    }

    pub fn set_new_title(&self, title: String) {
        self.service.with_value(|s| s.set_new_title(title));
    }

    pub fn dismiss_notice(&self) {
        self.service.with_value(|s| s.dismiss_notice());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
