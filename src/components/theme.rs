//! Dark theme palette

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(33, 33, 33);
pub const PANEL: Color = Color::Rgb(44, 44, 44);
pub const ACCENT: Color = Color::Rgb(25, 118, 210);
pub const DANGER: Color = Color::Rgb(244, 67, 54);
pub const TEXT: Color = Color::White;
pub const MUTED: Color = Color::DarkGray;

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn table_header() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_row() -> Style {
    Style::default()
        .bg(Color::Rgb(66, 66, 66))
        .fg(TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn key_hint(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Button fill; hovered buttons are drawn darker
pub fn button(base: Color, hovered: bool) -> Style {
    let bg = if hovered { darker(base) } else { base };
    Style::default().fg(TEXT).bg(bg).add_modifier(Modifier::BOLD)
}

/// Scale an RGB color by 0.7; named colors are returned unchanged
pub fn darker(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(scale(r), scale(g), scale(b)),
        other => other,
    }
}

fn scale(channel: u8) -> u8 {
    (channel as u16 * 7 / 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darker_scales_rgb() {
        assert_eq!(darker(Color::Rgb(100, 200, 10)), Color::Rgb(70, 140, 7));
        assert_eq!(darker(Color::Red), Color::Red);
    }

    #[test]
    fn test_hovered_button_is_darker() {
        assert_eq!(button(ACCENT, false).bg, Some(ACCENT));
        assert_eq!(button(ACCENT, true).bg, Some(darker(ACCENT)));
    }
}
