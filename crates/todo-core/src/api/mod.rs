//! Remote Resource Client
//!
//! Abstract interface over the todo collection endpoint.
//! Each operation is a single round trip; no retries, no batching.

#[cfg(feature = "http")]
mod http;

use async_trait::async_trait;

use crate::error::NetworkError;
use crate::models::{NewTodo, Todo, TodoId};

#[cfg(feature = "http")]
pub use http::HttpTodoApi;

pub type ApiResult<T> = Result<T, NetworkError>;

/// CRUD over the owner's todo collection
///
/// Futures are not `Send`: everything runs on one logical thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// List all todos of the configured owner
    async fn list(&self) -> ApiResult<Vec<Todo>>;

    /// Create a todo; the server assigns the id
    async fn create(&self, new_todo: &NewTodo) -> ApiResult<Todo>;

    /// Replace the todo with the same id
    async fn update(&self, todo: &Todo) -> ApiResult<Todo>;

    /// Delete a todo by id
    async fn delete(&self, id: TodoId) -> ApiResult<()>;
}
