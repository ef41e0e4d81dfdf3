//! Contact table component
//!
//! Renders a `ContactSnapshot` as a four-column table and owns only the
//! selection and scroll state. Rows are rebuilt from the snapshot on every
//! draw; the table never holds contact data of its own.

use crate::action::Action;
use crate::components::theme;
use crate::model::{Contact, ContactSnapshot};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, TableState,
    },
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const HEADERS: [&str; 4] = ["ID", "Name", "Email", "Phone"];

const COLUMN_SPACING: u16 = 1;
const HIGHLIGHT_SYMBOL: &str = "▶ ";

fn column_constraints() -> [Constraint; 4] {
    [
        Constraint::Length(10),
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Min(10),
    ]
}

/// Truncate `text` to `width` display columns, marking cuts with an ellipsis
pub fn fit(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    let total: usize = text.chars().filter_map(|c| c.width()).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return out;
    }

    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[derive(Default)]
pub struct ContactTable {
    state: TableState,
    /// Data rows area from the last draw, for mouse hit-testing
    rows_area: Rect,
}

impl ContactTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// The selected contact in `snapshot`, if any
    pub fn selected_contact<'a>(&self, snapshot: &'a ContactSnapshot) -> Option<&'a Contact> {
        snapshot.get(self.state.selected()?)
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.state.select(index);
    }

    pub fn clear_selection(&mut self) {
        self.state.select(None);
    }

    /// Select next row, wrapping to the first
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(next));
    }

    /// Select previous row, wrapping to the last
    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let prev = match self.state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.state.select(Some(prev));
    }

    pub fn select_first(&mut self, len: usize) {
        self.state.select(if len == 0 { None } else { Some(0) });
    }

    pub fn select_last(&mut self, len: usize) {
        self.state.select(len.checked_sub(1));
    }

    /// Keep the selection inside `len` rows after a reload
    pub fn clamp(&mut self, len: usize) {
        if let Some(i) = self.state.selected() {
            self.state.select(if len == 0 { None } else { Some(i.min(len - 1)) });
        }
        if len == 0 {
            *self.state.offset_mut() = 0;
        }
    }

    /// Map a left click on a data row to `SelectRow`
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, len: usize) -> Option<Action> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        if !self.rows_area.contains(Position::new(mouse.column, mouse.row)) {
            return None;
        }
        let index = self.state.offset() + (mouse.row - self.rows_area.y) as usize;
        (index < len).then_some(Action::SelectRow(index))
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, snapshot: &ContactSnapshot) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::MUTED))
            .style(Style::default().bg(theme::PANEL))
            .title(format!(" Contacts ({}) ", snapshot.len()));

        let inner = block.inner(area);
        self.rows_area = Rect::new(
            inner.x,
            inner.y.saturating_add(1),
            inner.width,
            inner.height.saturating_sub(1),
        );

        if snapshot.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No contacts yet. Press 'a' or click Add to create one.",
                    Style::default().fg(theme::MUTED),
                )),
            ])
            .alignment(ratatui::layout::Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // The highlight column is always reserved, so cells fit the same
        // width whether or not their row is selected
        let symbol_width = HIGHLIGHT_SYMBOL.width() as u16;
        let cells_area = Rect {
            x: inner.x.saturating_add(symbol_width),
            width: inner.width.saturating_sub(symbol_width),
            ..inner
        };
        let widths = Layout::horizontal(column_constraints())
            .spacing(COLUMN_SPACING)
            .split(cells_area);

        let header = Row::new(
            HEADERS
                .iter()
                .map(|h| Cell::from(*h))
                .collect::<Vec<_>>(),
        )
        .style(theme::table_header());

        let rows: Vec<Row> = snapshot
            .iter()
            .map(|contact| {
                let cells: [&str; 4] = [
                    contact.short_id(),
                    &contact.name,
                    &contact.email,
                    &contact.phone,
                ];
                Row::new(
                    cells
                        .iter()
                        .zip(widths.iter())
                        .map(|(text, rect)| Cell::from(fit(text, rect.width as usize)))
                        .collect::<Vec<_>>(),
                )
                .style(Style::default().fg(theme::TEXT))
            })
            .collect();

        let table = Table::new(rows, column_constraints())
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .block(block)
            .highlight_style(theme::selected_row())
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(table, area, &mut self.state);

        // Render scrollbar if rows exceed visible area
        let visible = self.rows_area.height as usize;
        if snapshot.len() > visible {
            let mut scrollbar_state = ScrollbarState::new(snapshot.len().saturating_sub(visible))
                .position(self.state.offset());

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn contact(id: &str, name: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            phone: "111".to_string(),
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit("Ana", 10), "Ana");
        assert_eq!(fit("Alexandria", 5), "Alex…");
        assert_eq!(fit("anything", 0), "");
    }

    #[test]
    fn test_navigation_wraps() {
        let mut table = ContactTable::new();
        table.next(3);
        assert_eq!(table.selected(), Some(0));
        table.previous(3);
        assert_eq!(table.selected(), Some(2));
        table.next(3);
        assert_eq!(table.selected(), Some(0));
        table.select_last(3);
        assert_eq!(table.selected(), Some(2));

        table.select_first(0);
        assert_eq!(table.selected(), None);
        table.next(0);
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_clamp_after_rows_removed() {
        let mut table = ContactTable::new();
        table.select(Some(4));
        table.clamp(3);
        assert_eq!(table.selected(), Some(2));
        table.clamp(0);
        assert_eq!(table.selected(), None);

        // No selection stays unselected
        table.clamp(5);
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_draw_renders_headers_and_rows() {
        let snapshot = ContactSnapshot::new(vec![
            contact("11111111-aaaa", "Ana"),
            contact("22222222-bbbb", "Bruno"),
        ]);
        let mut table = ContactTable::new();
        table.select_first(snapshot.len());

        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|frame| table.draw(frame, frame.area(), &snapshot))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Contacts (2)"));
        assert!(text.contains("Email"));
        assert!(text.contains("11111111"));
        assert!(text.contains("bruno@x.com"));
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer.content()[y as usize * width..(y as usize + 1) * width]
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_selected_row_keeps_ellipsis() {
        let long = Contact {
            id: "12345678-long".to_string(),
            name: "Alexandria Montgomery-Whitfield".to_string(),
            email: "alexandria.montgomery.whitfield@example.com".to_string(),
            phone: "+1 555 0100 0199 0042".to_string(),
        };
        let snapshot = ContactSnapshot::new(vec![long]);
        let mut table = ContactTable::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();

        // Border row 0, header row 1, data row 2
        terminal
            .draw(|frame| table.draw(frame, frame.area(), &snapshot))
            .unwrap();
        let unselected = row_text(&terminal, 2);

        table.select_first(snapshot.len());
        terminal
            .draw(|frame| table.draw(frame, frame.area(), &snapshot))
            .unwrap();
        let selected = row_text(&terminal, 2);

        assert!(selected.contains("▶"));
        assert!(unselected.matches('…').count() >= 2);
        assert_eq!(
            selected.matches('…').count(),
            unselected.matches('…').count()
        );
        assert!(selected.contains("alexandria."));
    }

    #[test]
    fn test_click_selects_row() {
        let snapshot = ContactSnapshot::new(vec![contact("1", "Ana"), contact("2", "Bruno")]);
        let mut table = ContactTable::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|frame| table.draw(frame, frame.area(), &snapshot))
            .unwrap();

        // Border row 0, header row 1, first data row 2
        let click = |row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            table.handle_mouse_event(click(3), snapshot.len()),
            Some(Action::SelectRow(1))
        );
        assert_eq!(table.handle_mouse_event(click(1), snapshot.len()), None);
        assert_eq!(table.handle_mouse_event(click(6), snapshot.len()), None);
    }
}
