use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_SURFACE: Color = Color::Rgb(24, 26, 32);
    pub const BG_ELEVATED: Color = Color::Rgb(34, 37, 45);
    pub const BG_SELECTED: Color = Color::Rgb(48, 62, 72);
    pub const BORDER_DIM: Color = Color::Rgb(70, 74, 86);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 222, 228);
    pub const TEXT_SECONDARY: Color = Color::Rgb(150, 155, 168);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 104, 116);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_ROSE: Color = Color::Rgb(230, 110, 120);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn todo_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn todo_done() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn todo_selected() -> Style {
        Style::default()
            .bg(Self::BG_SELECTED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn info_message() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn warn_message() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Self::ACCENT_ROSE)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }
}
