use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub title_bar: Rect,
    pub input_box: Rect,
    pub todo_list: Rect,
    pub console: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Title bar
            Constraint::Length(3),      // Input box
            Constraint::Min(5),         // Todo list
            Constraint::Percentage(25), // Console
            Constraint::Length(1),      // Status bar
        ])
        .split(area);

    AppLayout {
        title_bar: chunks[0],
        input_box: chunks[1],
        todo_list: chunks[2],
        console: chunks[3],
        status_bar: chunks[4],
    }
}

/// Centered popup of the given percentage size, clamped to a minimum.
pub fn centered_rect(area: Rect, percent_w: u16, min_w: u16, height: u16) -> Rect {
    let scaled = u32::from(area.width) * u32::from(percent_w) / 100;
    let w = u16::try_from(scaled)
        .unwrap_or(u16::MAX)
        .max(min_w)
        .min(area.width.saturating_sub(4));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}
