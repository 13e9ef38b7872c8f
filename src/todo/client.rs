//! REST client for the dummyjson todo endpoints.

use crate::config::ApiConfig;
use crate::todo::error::{ApiError, ApiResult};
use crate::todo::model::{NewTodo, Todo, TodoId, TodoPage, TodoUpdate};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// The four calls the todo screen makes.
///
/// Mutations resolve to `Ok(())` as soon as a response arrives; neither the
/// status nor the body is looked at.
#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn fetch(&self, limit: usize) -> ApiResult<Vec<Todo>>;
    async fn create(&self, todo: &NewTodo) -> ApiResult<()>;
    async fn update(&self, id: TodoId, update: &TodoUpdate) -> ApiResult<()>;
    async fn delete(&self, id: TodoId) -> ApiResult<()>;
}

pub struct HttpTodoApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn list_url(&self, limit: usize) -> String {
        format!("{}/todos?limit={}", self.base_url, limit)
    }

    fn add_url(&self) -> String {
        format!("{}/todos/add", self.base_url)
    }

    fn item_url(&self, id: TodoId) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn fetch(&self, limit: usize) -> ApiResult<Vec<Todo>> {
        let url = self.list_url(limit);
        debug!(%url, "GET");
        let body = self.client.get(&url).send().await?.text().await?;
        let page: TodoPage =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(page.todos)
    }

    async fn create(&self, todo: &NewTodo) -> ApiResult<()> {
        let url = self.add_url();
        let resp = self.client.post(&url).json(todo).send().await?;
        debug!(%url, status = %resp.status(), "POST");
        Ok(())
    }

    async fn update(&self, id: TodoId, update: &TodoUpdate) -> ApiResult<()> {
        let url = self.item_url(id);
        let resp = self.client.put(&url).json(update).send().await?;
        debug!(%url, status = %resp.status(), "PUT");
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> ApiResult<()> {
        let url = self.item_url(id);
        let resp = self.client.delete(&url).send().await?;
        debug!(%url, status = %resp.status(), "DELETE");
        Ok(())
    }
}
