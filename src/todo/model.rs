//! Todo records and the locally owned list.
//!
//! Field names follow the dummyjson wire format, so `user_id` is renamed to
//! `userId` on the way in and out.

use serde::{Deserialize, Serialize};

pub type TodoId = u64;

/// A single task as served by the API and kept in the local list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub todo: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "userId", default)]
    pub user_id: u64,
}

/// Body of `GET /todos`. Paging fields (`total`, `skip`, `limit`) are ignored.
#[derive(Debug, Deserialize)]
pub struct TodoPage {
    pub todos: Vec<Todo>,
}

/// Body of `POST /todos/add`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTodo {
    pub id: TodoId,
    pub todo: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

impl From<&Todo> for NewTodo {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            todo: todo.todo.clone(),
            completed: todo.completed,
            user_id: todo.user_id,
        }
    }
}

/// Body of `PUT /todos/{id}`. The completion flag is always sent as `false`.
#[derive(Debug, Clone, Serialize)]
pub struct TodoUpdate {
    pub id: TodoId,
    pub todo: String,
    pub completed: bool,
}

impl TodoUpdate {
    pub fn new(id: TodoId, text: &str) -> Self {
        Self {
            id,
            todo: text.to_string(),
            completed: false,
        }
    }
}

/// Ordered todo list: fetch order first, then append order.
#[derive(Debug, Default)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list, keeping the given order.
    pub fn replace(&mut self, todos: Vec<Todo>) {
        self.items = todos;
    }

    /// `max(id) + 1`, or `1` for an empty list.
    pub fn next_id(&self) -> TodoId {
        self.items.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }

    /// Build (but do not insert) a new todo for `text`.
    pub fn draft(&self, text: &str) -> Todo {
        Todo {
            id: self.next_id(),
            todo: text.to_string(),
            completed: false,
            user_id: self.items.len() as u64 + 1,
        }
    }

    pub fn push(&mut self, todo: Todo) {
        self.items.push(todo);
    }

    /// Remove every entry carrying `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Change the text of the entries carrying `id`, leaving other fields alone.
    pub fn rename(&mut self, id: TodoId, text: &str) -> bool {
        let mut changed = false;
        for todo in self.items.iter_mut().filter(|t| t.id == id) {
            todo.todo = text.to_string();
            changed = true;
        }
        changed
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&Todo> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
