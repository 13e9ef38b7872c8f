use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::todo::commands::{self, CommandError, ParsedCommand};
use crate::todo::model::TodoId;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::TodosLoaded(todos) => {
            state.todos.replace(todos);
            state.clamp_selection();
            state.log_info(format!("Loaded {} todos", state.todos.len()));
            vec![]
        }
        AppEvent::TodoCreated(todo) => {
            state.todos.push(todo);
            state.input.clear();
            state.dirty = true;
            vec![]
        }
        AppEvent::TodoUpdated { id, text } => {
            state.todos.rename(id, &text);
            state.dirty = true;
            vec![]
        }
        AppEvent::TodoDeleted { id } => {
            state.todos.remove(id);
            state.clamp_selection();
            state.dirty = true;
            vec![]
        }
        AppEvent::RequestFailed { kind, error } => {
            state.log_error(format!("Error {}: {}", kind, error));
            vec![]
        }
        AppEvent::Tick => vec![],
    }
}

/// Fetch the first page of todos; the result replaces the local list.
pub fn load_todos(state: &AppState) -> Vec<Action> {
    vec![Action::FetchTodos {
        limit: state.config.api.fetch_limit,
    }]
}

/// Build the new todo locally and ask for it to be created. The draft is
/// appended once the request returns, whatever the server said.
pub fn add_todo(state: &mut AppState, task: &str) -> Vec<Action> {
    if task.trim().is_empty() {
        state.log_error("Task cannot be empty!");
        return vec![];
    }
    let todo = state.todos.draft(task);
    vec![Action::CreateTodo { todo }]
}

pub fn edit_todo(state: &mut AppState, id: TodoId, new_task: &str) -> Vec<Action> {
    if new_task.trim().is_empty() {
        state.log_error("Task cannot be empty!");
        return vec![];
    }
    vec![Action::UpdateTodo {
        id,
        text: new_task.to_string(),
    }]
}

pub fn delete_todo(_state: &mut AppState, id: TodoId) -> Vec<Action> {
    vec![Action::DeleteTodo { id }]
}

/// Local only: the API has no bulk delete.
pub fn delete_all(state: &mut AppState) -> Vec<Action> {
    state.todos.clear();
    state.selected = 0;
    state.log_warn("All todos have been removed (dummy API does not support delete all).");
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return vec![Action::Quit],
            KeyCode::Char('r') => return load_todos(state),
            _ => {}
        }
    }

    // Edit prompt captures all input while open
    if state.edit.is_some() {
        return handle_edit_prompt_key(state, key);
    }

    if key.code == KeyCode::F(8) {
        return delete_all(state);
    }

    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::Input => handle_input_key(state, key),
        FocusPanel::List => handle_list_key(state, key),
    }
}

/// Shared line-editing keys. Returns `false` if the key was not consumed.
fn edit_line(input: &mut InputState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.delete_word_back()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert_char(c)
        }
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            let text = state.input.text.clone();
            if text.trim_start().starts_with('/') {
                return handle_command(state, &text);
            }
            add_todo(state, &text)
        }
        KeyCode::Down if !state.todos.is_empty() => {
            state.focus = FocusPanel::List;
            vec![]
        }
        _ => {
            edit_line(&mut state.input, key);
            vec![]
        }
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            vec![]
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.selected = 0;
            vec![]
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.selected = state.todos.len().saturating_sub(1);
            vec![]
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            open_edit_prompt(state);
            vec![]
        }
        KeyCode::Delete | KeyCode::Char('d') => match state.selected_todo() {
            Some(todo) => {
                let id = todo.id;
                delete_todo(state, id)
            }
            None => vec![],
        },
        KeyCode::Char('D') => delete_all(state),
        KeyCode::Esc | KeyCode::Char('i') => {
            state.focus = FocusPanel::Input;
            vec![]
        }
        _ => vec![],
    }
}

fn open_edit_prompt(state: &mut AppState) {
    if let Some(todo) = state.selected_todo() {
        state.edit = Some(EditPrompt {
            id: todo.id,
            input: InputState::with_text(&todo.todo),
        });
    }
}

fn handle_edit_prompt_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        // Cancelled prompt: nothing is sent
        KeyCode::Esc => {
            state.edit = None;
            vec![]
        }
        KeyCode::Enter => match state.edit.take() {
            Some(prompt) => edit_todo(state, prompt.id, &prompt.input.text),
            None => vec![],
        },
        _ => {
            if let Some(prompt) = state.edit.as_mut() {
                edit_line(&mut prompt.input, key);
            }
            vec![]
        }
    }
}

fn handle_command(state: &mut AppState, text: &str) -> Vec<Action> {
    let parsed = match commands::parse_command(text) {
        Ok(cmd) => cmd,
        Err(CommandError::Usage(usage)) => {
            state.log_error(format!("Usage: {}", usage));
            return vec![];
        }
        // Anything that is not one of our commands is just todo text
        Err(CommandError::Unknown(_)) | Err(CommandError::NotACommand) => {
            return add_todo(state, text)
        }
    };

    // `/add` clears the input only when the todo lands, like plain Enter
    if !matches!(parsed, ParsedCommand::Add { .. }) {
        state.input.clear();
    }

    match parsed {
        ParsedCommand::Add { text } => add_todo(state, &text),
        ParsedCommand::Edit { id, text } => {
            if state.todos.get(id).is_none() {
                state.log_warn(format!("No todo with id {} in the local list", id));
            }
            edit_todo(state, id, &text)
        }
        ParsedCommand::Remove { id } => delete_todo(state, id),
        ParsedCommand::Clear => delete_all(state),
        ParsedCommand::Reload => load_todos(state),
        ParsedCommand::Help => {
            for line in commands::HELP_LINES {
                state.log_info(*line);
            }
            vec![]
        }
        ParsedCommand::Quit => vec![Action::Quit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event::RequestKind;
    use crate::config::AppConfig;
    use crate::todo::manager::testing::{Call, MockApi};
    use crate::todo::manager::TodoManager;
    use crate::todo::model::Todo;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn todo(id: TodoId, text: &str, completed: bool) -> Todo {
        Todo {
            id,
            todo: text.into(),
            completed,
            user_id: 26,
        }
    }

    fn state_with(todos: Vec<Todo>) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.todos.replace(todos);
        state
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, key(KeyCode::Char(c)));
        }
    }

    /// Run actions through the manager and feed the outcomes back, the way
    /// the main loop does.
    async fn settle(state: &mut AppState, api: Arc<MockApi>, actions: Vec<Action>) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let manager = TodoManager::new(api, tx);
        for action in actions {
            if let Some(handle) = manager.execute(action) {
                handle.await.unwrap();
            }
        }
        drop(manager);
        while let Some(event) = rx.recv().await {
            handle_event(state, event);
        }
    }

    fn ids(state: &AppState) -> Vec<TodoId> {
        state.todos.iter().map(|t| t.id).collect()
    }

    #[tokio::test]
    async fn test_initial_load_keeps_response_order() {
        let served: Vec<_> = [5, 2, 9, 1, 7, 3, 10, 4, 8, 6]
            .into_iter()
            .map(|id| todo(id, "x", false))
            .collect();
        let api = Arc::new(MockApi::with_todos(served));
        let mut state = AppState::new(AppConfig::default());

        let actions = load_todos(&state);
        settle(&mut state, api.clone(), actions).await;

        assert_eq!(ids(&state), vec![5, 2, 9, 1, 7, 3, 10, 4, 8, 6]);
        assert_eq!(api.calls(), vec![Call::Fetch(10)]);
    }

    #[tokio::test]
    async fn test_failed_initial_load_leaves_list_empty() {
        let mut state = AppState::new(AppConfig::default());
        let actions = load_todos(&state);
        settle(&mut state, Arc::new(MockApi::failing()), actions).await;

        assert!(state.todos.is_empty());
        let last = state.console.back().unwrap();
        assert_eq!(last.level, ConsoleLevel::Error);
        assert!(last.text.starts_with("Error loading todos"));
    }

    #[test]
    fn test_add_blank_is_rejected() {
        let mut state = state_with(vec![todo(1, "a", false)]);
        type_text(&mut state, "   ");
        let actions = handle_event(&mut state, key(KeyCode::Enter));

        assert!(actions.is_empty());
        assert_eq!(state.input.text, "   ");
        assert_eq!(ids(&state), vec![1]);
        assert_eq!(state.console.back().unwrap().text, "Task cannot be empty!");
    }

    #[tokio::test]
    async fn test_add_appends_next_id_and_clears_input() {
        let mut state = state_with(vec![todo(3, "a", false), todo(8, "b", true), todo(5, "c", false)]);
        type_text(&mut state, "water plants");
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(actions.len(), 1);
        // Nothing changes until the request returns
        assert_eq!(state.todos.len(), 3);

        let api = Arc::new(MockApi::default());
        settle(&mut state, api.clone(), actions).await;

        assert_eq!(ids(&state), vec![3, 8, 5, 9]);
        let added = state.todos.get(9).unwrap();
        assert_eq!(added.todo, "water plants");
        assert!(!added.completed);
        assert_eq!(added.user_id, 4);
        assert!(state.input.text.is_empty());
        assert_eq!(
            api.calls(),
            vec![Call::Create(serde_json::json!({
                "id": 9, "todo": "water plants", "completed": false, "userId": 4
            }))]
        );
    }

    #[tokio::test]
    async fn test_add_to_empty_list_starts_at_one() {
        let mut state = AppState::new(AppConfig::default());
        let actions = add_todo(&mut state, "first");
        settle(&mut state, Arc::new(MockApi::default()), actions).await;
        assert_eq!(ids(&state), vec![1]);
    }

    #[tokio::test]
    async fn test_add_transport_failure_keeps_state() {
        let mut state = state_with(vec![todo(1, "a", false)]);
        type_text(&mut state, "doomed");
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        settle(&mut state, Arc::new(MockApi::failing()), actions).await;

        assert_eq!(ids(&state), vec![1]);
        assert_eq!(state.input.text, "doomed");
        assert!(state.console.back().unwrap().text.starts_with("Error adding todo"));
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_entry() {
        let mut state = state_with(vec![todo(1, "a", false), todo(2, "b", false), todo(3, "c", false)]);
        state.focus = FocusPanel::List;
        handle_event(&mut state, key(KeyCode::Down));
        let actions = handle_event(&mut state, key(KeyCode::Char('d')));
        assert_eq!(actions, vec![Action::DeleteTodo { id: 2 }]);

        let api = Arc::new(MockApi::default());
        settle(&mut state, api.clone(), actions).await;
        assert_eq!(ids(&state), vec![1, 3]);
        assert_eq!(api.calls(), vec![Call::Delete(2)]);
    }

    #[tokio::test]
    async fn test_edit_changes_only_text() {
        let mut state = state_with(vec![todo(1, "a", true), todo(2, "b", true)]);
        state.focus = FocusPanel::List;
        handle_event(&mut state, key(KeyCode::Char('e')));
        assert_eq!(state.edit.as_ref().unwrap().input.text, "a");

        handle_event(&mut state, key(KeyCode::Backspace));
        type_text(&mut state, "rewritten");
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert!(state.edit.is_none());

        let api = Arc::new(MockApi::default());
        settle(&mut state, api.clone(), actions).await;

        assert_eq!(state.todos.get(1).unwrap(), &todo(1, "rewritten", true));
        assert_eq!(state.todos.get(2).unwrap(), &todo(2, "b", true));
        assert_eq!(
            api.calls(),
            vec![Call::Update(1, serde_json::json!({"id": 1, "todo": "rewritten", "completed": false}))]
        );
    }

    #[test]
    fn test_edit_blank_or_cancelled_sends_nothing() {
        let mut state = state_with(vec![todo(1, "a", false)]);
        assert!(edit_todo(&mut state, 1, "  ").is_empty());

        state.focus = FocusPanel::List;
        handle_event(&mut state, key(KeyCode::Char('e')));
        type_text(&mut state, " more");
        let actions = handle_event(&mut state, key(KeyCode::Esc));
        assert!(actions.is_empty());
        assert!(state.edit.is_none());
        assert_eq!(state.todos.get(1).unwrap().todo, "a");
    }

    #[tokio::test]
    async fn test_delete_all_is_local() {
        let mut state = state_with(vec![todo(1, "a", false), todo(2, "b", false)]);
        let actions = handle_event(&mut state, key(KeyCode::F(8)));
        assert!(actions.is_empty());
        assert!(state.todos.is_empty());
        assert_eq!(state.console.back().unwrap().level, ConsoleLevel::Warn);

        let api = Arc::new(MockApi::default());
        settle(&mut state, api.clone(), actions).await;
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_slash_commands() {
        let mut state = state_with(vec![todo(1, "a", false)]);

        type_text(&mut state, "/rm 1");
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(actions, vec![Action::DeleteTodo { id: 1 }]);
        assert!(state.input.text.is_empty());

        type_text(&mut state, "/add tidy desk");
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert!(matches!(&actions[..], [Action::CreateTodo { todo }] if todo.id == 2 && todo.todo == "tidy desk"));
        assert_eq!(state.input.text, "/add tidy desk");

        state.input.clear();
        type_text(&mut state, "/edit x y");
        assert!(handle_event(&mut state, key(KeyCode::Enter)).is_empty());
        assert_eq!(state.console.back().unwrap().text, "Usage: /edit <id> <text>");
    }

    #[tokio::test]
    async fn test_slash_prefixed_text_is_added() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, "/etc backup");
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert!(matches!(
            &actions[..],
            [Action::CreateTodo { todo }] if todo.id == 1 && todo.todo == "/etc backup"
        ));

        settle(&mut state, Arc::new(MockApi::default()), actions).await;
        assert_eq!(state.todos.get(1).unwrap().todo, "/etc backup");
        assert!(state.input.text.is_empty());
    }

    #[test]
    fn test_request_failure_is_logged() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(
            &mut state,
            AppEvent::RequestFailed {
                kind: RequestKind::Update,
                error: "timed out".into(),
            },
        );
        assert_eq!(state.console.back().unwrap().text, "Error editing todo: timed out");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = AppState::new(AppConfig::default());
        let ev = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ev), vec![Action::Quit]);
    }
}
