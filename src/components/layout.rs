//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub table: Rect,
    pub footer: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout: header, table, button footer, key hints
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        header: chunks[0],
        table: chunks[1],
        footer: chunks[2],
        help: chunks[3],
    }
}

/// Lay out buttons right-aligned in a row, separated by `gap` columns
///
/// Returns one rect per width, in the order given. Buttons that do not fit
/// get a zero-width rect.
pub fn right_aligned_buttons(area: Rect, widths: &[u16], gap: u16) -> Vec<Rect> {
    let total: u16 = widths.iter().sum::<u16>() + gap * widths.len().saturating_sub(1) as u16;
    let mut x = area.x + area.width.saturating_sub(total + 1);

    widths
        .iter()
        .map(|&w| {
            let right = area.x + area.width;
            let width = w.min(right.saturating_sub(x));
            let rect = Rect::new(x, area.y, width, area.height);
            x = x.saturating_add(w + gap);
            rect
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_popup(area, 40, 10), Rect::new(30, 15, 40, 10));

        let small = Rect::new(0, 0, 20, 5);
        let popup = centered_popup(small, 40, 10);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_main_layout_stacks_sections() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 3);
        assert_eq!(layout.help.height, 1);
        assert_eq!(layout.table.height, 24 - 3 - 3 - 1);
        assert_eq!(layout.help.y, 23);
    }

    #[test]
    fn test_buttons_are_right_aligned() {
        let area = Rect::new(0, 10, 80, 3);
        let rects = right_aligned_buttons(area, &[10, 12], 2);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[1].x + rects[1].width, 79);
        assert_eq!(rects[0].x + rects[0].width + 2, rects[1].x);
        assert!(rects.iter().all(|r| r.y == 10 && r.height == 3));
    }
}
