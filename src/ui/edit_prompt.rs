use crate::app::state::AppState;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(ref prompt) = state.edit else {
        return;
    };

    let popup_area = centered_rect(frame.area(), 60, 40, 6);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" Edit your todo (#{}) ", prompt.id))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let input_area = Rect::new(inner.x + 1, inner.y + 1, inner.width - 2, 1);
    frame.render_widget(
        Paragraph::new(prompt.input.text.as_str()).style(Theme::input_text()),
        input_area,
    );
    let cursor_x = input_area.x + prompt.input.cursor_column() as u16;
    frame.set_cursor_position((cursor_x.min(input_area.right() - 1), input_area.y));

    let help_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    // Blank text is rejected on Enter, so dim the save hint
    let save_style = if prompt.input.is_blank() {
        Style::default().fg(Theme::TEXT_MUTED)
    } else {
        Theme::key_hint()
    };
    let help = Line::from(vec![
        Span::styled(" Enter", save_style),
        Span::styled(" Save  ", Style::default().fg(Theme::TEXT_SECONDARY)),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Cancel", Style::default().fg(Theme::TEXT_SECONDARY)),
    ]);
    frame.render_widget(Paragraph::new(help), help_area);
}
