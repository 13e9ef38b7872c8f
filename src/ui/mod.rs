mod console;
mod edit_prompt;
mod input_box;
mod layout;
mod status_bar;
mod theme;
mod todo_list;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_title_bar(frame, app_layout.title_bar, state);
    input_box::render(frame, app_layout.input_box, state);
    todo_list::render(frame, app_layout.todo_list, state);
    console::render(frame, app_layout.console, state);
    status_bar::render(frame, app_layout.status_bar, state);
    edit_prompt::render(frame, state);
}

fn render_title_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Style::default().bg(Theme::BG_ELEVATED);
    let line = Line::from(vec![
        Span::styled(
            " Todo App ",
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Theme::BORDER_DIM).bg(Theme::BG_ELEVATED)),
        Span::styled(
            state.config.api.base_url.as_str(),
            Style::default().fg(Theme::TEXT_SECONDARY).bg(Theme::BG_ELEVATED),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(bg), area);
}
