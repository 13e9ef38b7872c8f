//! Runs todo requests in the background and reports back over the event channel.

use crate::app::action::Action;
use crate::app::event::{AppEvent, RequestKind};
use crate::todo::client::TodoApi;
use crate::todo::model::{NewTodo, TodoUpdate};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

/// Spawns one task per request. Requests are not queued, deduplicated or
/// cancelled, so completions arrive in whatever order the network decides.
pub struct TodoManager {
    api: Arc<dyn TodoApi>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl TodoManager {
    pub fn new(api: Arc<dyn TodoApi>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { api, event_tx }
    }

    /// Start the request behind `action`. Returns `None` for actions that
    /// do not touch the network.
    pub fn execute(&self, action: Action) -> Option<JoinHandle<()>> {
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();

        let handle = match action {
            Action::FetchTodos { limit } => tokio::spawn(async move {
                let event = match api.fetch(limit).await {
                    Ok(todos) => {
                        info!(count = todos.len(), "todos loaded");
                        AppEvent::TodosLoaded(todos)
                    }
                    Err(e) => failed(RequestKind::Fetch, e),
                };
                let _ = tx.send(event);
            }),
            Action::CreateTodo { todo } => tokio::spawn(async move {
                let event = match api.create(&NewTodo::from(&todo)).await {
                    Ok(()) => AppEvent::TodoCreated(todo),
                    Err(e) => failed(RequestKind::Create, e),
                };
                let _ = tx.send(event);
            }),
            Action::UpdateTodo { id, text } => tokio::spawn(async move {
                let event = match api.update(id, &TodoUpdate::new(id, &text)).await {
                    Ok(()) => AppEvent::TodoUpdated { id, text },
                    Err(e) => failed(RequestKind::Update, e),
                };
                let _ = tx.send(event);
            }),
            Action::DeleteTodo { id } => tokio::spawn(async move {
                let event = match api.delete(id).await {
                    Ok(()) => AppEvent::TodoDeleted { id },
                    Err(e) => failed(RequestKind::Delete, e),
                };
                let _ = tx.send(event);
            }),
            Action::Quit => return None,
        };

        Some(handle)
    }
}

fn failed(kind: RequestKind, error: impl ToString) -> AppEvent {
    AppEvent::RequestFailed {
        kind,
        error: error.to_string(),
    }
}

#[cfg(test)]
pub mod testing {
    //! In-memory [`TodoApi`] that records every call.

    use super::*;
    use crate::todo::error::{ApiError, ApiResult};
    use crate::todo::model::{Todo, TodoId};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Fetch(usize),
        Create(serde_json::Value),
        Update(TodoId, serde_json::Value),
        Delete(TodoId),
    }

    #[derive(Default)]
    pub struct MockApi {
        pub todos: Vec<Todo>,
        pub fail: bool,
        pub calls: Mutex<Vec<Call>>,
    }

    impl MockApi {
        pub fn with_todos(todos: Vec<Todo>) -> Self {
            Self {
                todos,
                ..Self::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) -> ApiResult<()> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                Err(ApiError::Decode("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl TodoApi for MockApi {
        async fn fetch(&self, limit: usize) -> ApiResult<Vec<Todo>> {
            self.record(Call::Fetch(limit))?;
            Ok(self.todos.iter().take(limit).cloned().collect())
        }

        async fn create(&self, todo: &NewTodo) -> ApiResult<()> {
            self.record(Call::Create(serde_json::to_value(todo).unwrap()))
        }

        async fn update(&self, id: TodoId, update: &TodoUpdate) -> ApiResult<()> {
            self.record(Call::Update(id, serde_json::to_value(update).unwrap()))
        }

        async fn delete(&self, id: TodoId) -> ApiResult<()> {
            self.record(Call::Delete(id))
        }
    }
}
