use crate::todo::model::{Todo, TodoId};
use crossterm::event::Event as CrosstermEvent;
use std::fmt;

/// Which kind of request an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Fetch,
    Create,
    Update,
    Delete,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            RequestKind::Fetch => "loading todos",
            RequestKind::Create => "adding todo",
            RequestKind::Update => "editing todo",
            RequestKind::Delete => "deleting todo",
        };
        f.write_str(verb)
    }
}

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Initial (or manual) list fetch returned
    TodosLoaded(Vec<Todo>),

    /// Create call returned; carries the locally built todo, not the server's
    TodoCreated(Todo),

    /// Update call returned
    TodoUpdated { id: TodoId, text: String },

    /// Delete call returned
    TodoDeleted { id: TodoId },

    /// A request never got a response
    RequestFailed { kind: RequestKind, error: String },

    /// Tick for UI refresh
    Tick,
}
