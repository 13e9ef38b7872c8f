use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Console ")
        .title_style(Theme::border())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Newest lines at the bottom
    let height = inner.height as usize;
    let skip = state.console.len().saturating_sub(height);
    let lines: Vec<Line> = state
        .console
        .iter()
        .skip(skip)
        .map(format_line)
        .collect();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn format_line(line: &ConsoleLine) -> Line<'_> {
    let (icon, style) = match line.level {
        ConsoleLevel::Info => ("• ", Theme::info_message()),
        ConsoleLevel::Warn => ("▲ ", Theme::warn_message()),
        ConsoleLevel::Error => ("✘ ", Theme::error_message()),
    };
    Line::from(vec![
        Span::styled(format!("[{}] ", line.timestamp), Theme::timestamp()),
        Span::styled(icon, style),
        Span::styled(line.text.as_str(), style),
    ])
}
