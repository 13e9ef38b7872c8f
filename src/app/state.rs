use crate::config::AppConfig;
use crate::todo::model::{Todo, TodoId, TodoList};
use chrono::Local;
use std::collections::VecDeque;
use tracing::{error, info, warn};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
}

/// One line of the in-app console pane.
#[derive(Debug, Clone)]
pub struct ConsoleLine {
    pub timestamp: String,
    pub level: ConsoleLevel,
    pub text: String,
}

/// Single-line text editor used by the input box and the edit prompt.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    /// Byte offset into `text`, always on a char boundary.
    pub cursor: usize,
}

impl InputState {
    /// Editor holding `text` with the cursor at the end, as a prompt opens.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    /// Byte offset of the char boundary before the cursor.
    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    /// Byte offset of the char boundary after the cursor.
    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map_or(self.cursor, |c| self.cursor + c.len_utf8())
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        let prev = self.prev_boundary();
        self.text.replace_range(prev..self.cursor, "");
        self.cursor = prev;
    }

    pub fn delete_forward(&mut self) {
        let next = self.next_boundary();
        self.text.replace_range(self.cursor..next, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Ctrl+W: drop the word before the cursor and the whitespace after it.
    pub fn delete_word_back(&mut self) {
        let head = &self.text[..self.cursor];
        let trimmed = head.trim_end();
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Whitespace-only text never becomes a todo.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Terminal columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Input,
    List,
}

/// Open "Edit your todo" popup, pre-filled with the current text.
#[derive(Debug)]
pub struct EditPrompt {
    pub id: TodoId,
    pub input: InputState,
}

pub struct AppState {
    pub config: AppConfig,
    pub input: InputState,
    pub todos: TodoList,
    pub selected: usize,
    pub focus: FocusPanel,
    pub edit: Option<EditPrompt>,
    pub console: VecDeque<ConsoleLine>,
    pub should_quit: bool,
    pub dirty: bool,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            input: InputState::default(),
            todos: TodoList::new(),
            selected: 0,
            focus: FocusPanel::Input,
            edit: None,
            console: VecDeque::new(),
            should_quit: false,
            dirty: true,
            timestamp_format,
        }
    }

    /// Append to the console pane and mirror the line into the tracing log.
    pub fn log(&mut self, level: ConsoleLevel, text: impl Into<String>) {
        let text = text.into();
        match level {
            ConsoleLevel::Info => info!("{}", text),
            ConsoleLevel::Warn => warn!("{}", text),
            ConsoleLevel::Error => error!("{}", text),
        }
        self.console.push_back(ConsoleLine {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            level,
            text,
        });
        while self.console.len() > self.config.ui.max_console_lines.max(1) {
            self.console.pop_front();
        }
        self.dirty = true;
    }

    pub fn log_info(&mut self, text: impl Into<String>) {
        self.log(ConsoleLevel::Info, text);
    }

    pub fn log_warn(&mut self, text: impl Into<String>) {
        self.log(ConsoleLevel::Warn, text);
    }

    pub fn log_error(&mut self, text: impl Into<String>) {
        self.log(ConsoleLevel::Error, text);
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.todos.get_index(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.todos.len() {
            self.selected += 1;
        }
        self.dirty = true;
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.dirty = true;
    }

    /// Keep the selection inside the list after it shrinks.
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.todos.len().saturating_sub(1));
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::List,
            FocusPanel::List => FocusPanel::Input,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let done = self.todos.iter().filter(|t| t.completed).count();
        format!("Todos: {} | Done: {}", self.todos.len(), done)
    }
}
