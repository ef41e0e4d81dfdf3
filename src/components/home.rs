//! Home component - Main application screen
//!
//! Header, contact table, the Add / Delete button footer, and the key hint
//! bar. Owns only button hover state; rows come from the snapshot passed in
//! through `HomeRenderContext`.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_main_layout, right_aligned_buttons, theme, ContactTable};
use crate::model::ContactSnapshot;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const ADD_LABEL: &str = " + Add ";
const DELETE_LABEL: &str = " ✗ Delete ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Add,
    Delete,
}

/// Home component for the main application view
#[derive(Default)]
pub struct HomeComponent {
    /// Button under the mouse pointer
    pub hovered: Option<Button>,
    add_button: Rect,
    delete_button: Rect,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self::default()
    }

    fn button_at(&self, column: u16, row: u16) -> Option<Button> {
        let pos = Position::new(column, row);
        if self.add_button.contains(pos) {
            Some(Button::Add)
        } else if self.delete_button.contains(pos) {
            Some(Button::Delete)
        } else {
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstRow),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastRow),
            KeyCode::Esc => Some(Action::ClearSelection),

            // Contacts
            KeyCode::Char('a') | KeyCode::Insert => Some(Action::OpenAddDialog),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::RequestDelete),
            KeyCode::Char('r') => Some(Action::Reload),

            // Modals
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let button = self.button_at(mouse.column, mouse.row);
        let action = match mouse.kind {
            MouseEventKind::Moved => {
                self.hovered = button;
                None
            }
            MouseEventKind::Down(MouseButton::Left) => match button {
                Some(Button::Add) => Some(Action::OpenAddDialog),
                Some(Button::Delete) => Some(Action::RequestDelete),
                None => None,
            },
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes the snapshot
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub contacts: &'a ContactSnapshot,
    /// Where contacts are kept, shown in the footer
    pub backend: &'a str,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    table: &mut ContactTable,
    ctx: &HomeRenderContext,
) -> Result<()> {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND)),
        area,
    );

    let layout = calculate_main_layout(area);

    render_header(frame, layout.header);
    table.draw(frame, layout.table, ctx.contacts);
    render_footer(frame, layout.footer, home, ctx);
    render_help_bar(frame, layout.help);

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "Address Book",
        theme::title(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme::MUTED)),
    );
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, area: Rect, home: &mut HomeComponent, ctx: &HomeRenderContext) {
    let info = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} contacts ", ctx.contacts.len()),
                Style::default().fg(Color::Black).bg(theme::ACCENT),
            ),
            Span::styled(format!("  {}", ctx.backend), Style::default().fg(theme::MUTED)),
        ]),
    ]);
    frame.render_widget(info, area);

    let buttons = right_aligned_buttons(
        area,
        &[
            ADD_LABEL.len() as u16 + 2,
            DELETE_LABEL.chars().count() as u16 + 2,
        ],
        2,
    );
    home.add_button = buttons[0];
    home.delete_button = buttons[1];

    render_button(
        frame,
        home.add_button,
        ADD_LABEL,
        theme::ACCENT,
        home.hovered == Some(Button::Add),
    );
    render_button(
        frame,
        home.delete_button,
        DELETE_LABEL,
        theme::DANGER,
        home.hovered == Some(Button::Delete),
    );
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, color: Color, hovered: bool) {
    let style = theme::button(color, hovered);
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(style),
        );
    frame.render_widget(button, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_spans = vec![
        Span::styled(" a ", theme::key_hint(Color::Green)),
        Span::raw("Add "),
        Span::styled(" d ", theme::key_hint(Color::Red)),
        Span::raw("Delete "),
        Span::styled(" j/k ", theme::key_hint(Color::Cyan)),
        Span::raw("Move "),
        Span::styled(" r ", theme::key_hint(Color::Cyan)),
        Span::raw("Reload "),
        Span::styled(" ? ", theme::key_hint(Color::White)),
        Span::raw("Help "),
        Span::styled(" q ", theme::key_hint(Color::Yellow)),
        Span::raw("Quit"),
    ];

    let paragraph = Paragraph::new(Line::from(help_spans))
        .style(Style::default().fg(theme::MUTED))
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Contact;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn draw(home: &mut HomeComponent, snapshot: &ContactSnapshot) -> Terminal<TestBackend> {
        let mut table = ContactTable::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let ctx = HomeRenderContext {
            contacts: snapshot,
            backend: "in-memory",
        };
        terminal
            .draw(|frame| {
                draw_home_screen(frame, frame.area(), home, &mut table, &ctx).unwrap();
            })
            .unwrap();
        terminal
    }

    #[test]
    fn test_key_bindings() {
        let mut home = HomeComponent::new();
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            home.handle_key_event(press(KeyCode::Char('a'))).unwrap(),
            Some(Action::OpenAddDialog)
        );
        assert_eq!(
            home.handle_key_event(press(KeyCode::Delete)).unwrap(),
            Some(Action::RequestDelete)
        );
        assert_eq!(
            home.handle_key_event(press(KeyCode::Char('q'))).unwrap(),
            Some(Action::OpenQuitDialog)
        );
        assert_eq!(home.handle_key_event(press(KeyCode::Char('z'))).unwrap(), None);
    }

    #[test]
    fn test_buttons_click_and_hover() {
        let mut home = HomeComponent::new();
        draw(&mut home, &ContactSnapshot::default());

        let add = home.add_button;
        let delete = home.delete_button;
        assert!(add.width > 0 && delete.width > 0);

        assert_eq!(
            home.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), add.x + 1, add.y + 1))
                .unwrap(),
            Some(Action::OpenAddDialog)
        );
        assert_eq!(
            home.handle_mouse_event(mouse(
                MouseEventKind::Down(MouseButton::Left),
                delete.x + 1,
                delete.y + 1
            ))
            .unwrap(),
            Some(Action::RequestDelete)
        );

        home.handle_mouse_event(mouse(MouseEventKind::Moved, add.x, add.y))
            .unwrap();
        assert_eq!(home.hovered, Some(Button::Add));
        home.handle_mouse_event(mouse(MouseEventKind::Moved, 0, 0)).unwrap();
        assert_eq!(home.hovered, None);
    }

    #[test]
    fn test_home_screen_shows_count_and_rows() {
        let snapshot = ContactSnapshot::new(vec![Contact {
            id: "abcdef12-0000".to_string(),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            phone: "111".to_string(),
        }]);
        let mut home = HomeComponent::new();
        let terminal = draw(&mut home, &snapshot);

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Address Book"));
        assert!(text.contains("1 contacts"));
        assert!(text.contains("ana@x.com"));
        assert!(text.contains("Add"));
        assert!(text.contains("Delete"));
    }
}
