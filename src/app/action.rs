use crate::todo::model::{Todo, TodoId};

/// Side effects requested by the event handler and carried out by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchTodos { limit: usize },
    CreateTodo { todo: Todo },
    UpdateTodo { id: TodoId, text: String },
    DeleteTodo { id: TodoId },
    Quit,
}
