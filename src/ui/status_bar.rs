use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    )];

    let hints: &[(&str, &str)] = match state.focus {
        FocusPanel::Input => &[("Enter", "add"), ("Tab", "list"), ("F8", "delete all")],
        FocusPanel::List => &[("e", "edit"), ("d", "remove"), ("D", "delete all"), ("Tab", "input")],
    };
    for (key, what) in hints {
        parts.push(Span::styled(format!(" {}", key), Theme::key_hint().bg(Theme::BG_ELEVATED)));
        parts.push(Span::styled(format!(" {} ", what), Theme::status_bar()));
    }

    let focus_name = match state.focus {
        FocusPanel::Input => "INPUT",
        FocusPanel::List => "LIST",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
