//! HTTP Todo Client
//!
//! `reqwest`-backed implementation of [`TodoApi`]. Works natively and on wasm32.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiResult, TodoApi};
use crate::error::NetworkError;
use crate::models::{NewTodo, Todo, TodoId};

#[derive(Serialize)]
struct OwnerQuery {
    #[serde(rename = "userId")]
    user_id: u32,
}

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
    user_id: u32,
}

impl HttpTodoApi {
    pub fn new(base_url: impl Into<String>, user_id: u32) -> Self {
        Self::with_client(Client::new(), base_url, user_id)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>, user_id: u32) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url, user_id }
    }

    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item_url(&self, id: TodoId) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

fn transport(e: reqwest::Error) -> NetworkError {
    NetworkError::Transport(e.to_string())
}

fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(NetworkError::Status(status.as_u16()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check_status(response)?;
    response.json::<T>().await.map_err(|e| NetworkError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        debug!("GET {} (userId={})", self.collection_url(), self.user_id);
        let response = self
            .client
            .get(self.collection_url())
            .query(&OwnerQuery { user_id: self.user_id })
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn create(&self, new_todo: &NewTodo) -> ApiResult<Todo> {
        debug!("POST {}", self.collection_url());
        let response = self
            .client
            .post(self.collection_url())
            .json(new_todo)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn update(&self, todo: &Todo) -> ApiResult<Todo> {
        debug!("PATCH {}", self.item_url(todo.id));
        let response = self
            .client
            .patch(self.item_url(todo.id))
            .json(todo)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn delete(&self, id: TodoId) -> ApiResult<()> {
        debug!("DELETE {}", self.item_url(id));
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(transport)?;
        // Body varies by server (count, empty, the record); only the status matters
        check_status(response).map(|_| ())
    }
}
