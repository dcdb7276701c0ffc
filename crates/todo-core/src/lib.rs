//! Todo Core
//!
//! Client-side reconciliation for a remote todo list:
//! - models: todo records and the status filter
//! - api: remote resource client (trait + HTTP implementation)
//! - store: authoritative collection and transient busy state
//! - filter: projections for the status filter
//! - service: mutation orchestrator (create, change, delete, bulk ops, edits)
//!
//! Everything runs on a single logical thread; concurrency is only ever
//! several requests in flight at once.

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod notice;
pub mod service;
pub mod store;

#[cfg(test)]
mod testing;

pub use api::TodoApi;
#[cfg(feature = "http")]
pub use api::HttpTodoApi;
pub use config::AppConfig;
pub use error::{ConfigError, NetworkError, TodoError, TodoResult, ValidationError};
pub use models::{NewTodo, StatusFilter, Todo, TodoId, PLACEHOLDER_ID};
pub use notice::{Notice, NoticeMessage, Scheduler};
pub use service::{BulkOutcome, EditAction, EditPlan, TitleEditor, TodoService};
pub use store::{TodoState, TodoStore};
