use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

const EMPTY_TEXT: &str = "No todos found. Add one above!";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::List && state.edit.is_none();
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(format!(" Todos ({}) ", state.todos.len()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    if state.todos.is_empty() {
        let empty = Paragraph::new(EMPTY_TEXT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Theme::TEXT_MUTED))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .todos
        .iter()
        .map(|todo| {
            let (mark, style) = if todo.completed {
                (" ✔ ", Theme::todo_done())
            } else {
                (" ○ ", Theme::todo_text())
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>4}", todo.id), Theme::timestamp()),
                Span::styled(mark, Style::default().fg(Theme::ACCENT_GREEN)),
                Span::styled(todo.todo.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(if focused {
        Theme::todo_selected()
    } else {
        Style::default()
    });

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
