//! Toast overlay rendering

use crate::components::theme;
use crate::model::Toast;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw `toast` centered near the bottom of `area`, above the footer
pub fn draw_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let text = format!(" {}  {} ", toast.kind.icon(), toast.message);
    let width = (text.width() as u16 + 4).min(area.width);
    let height = 3.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height + 5);
    let toast_area = Rect::new(x, y, width, height);

    let color = toast.kind.color();
    let style = Style::default()
        .fg(theme::TEXT)
        .bg(color)
        .add_modifier(Modifier::BOLD);

    frame.render_widget(Clear, toast_area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::darker(color)).bg(color)),
            ),
        toast_area,
    );
}
