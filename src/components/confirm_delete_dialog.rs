//! Delete confirmation dialog

use crate::action::Action;
use crate::component::Component;
use crate::components::{centered_popup, right_aligned_buttons, theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const YES_LABEL: &str = " Yes, delete ";
const NO_LABEL: &str = " No ";

/// Asks before removing the selected contact
#[derive(Default)]
pub struct ConfirmDeleteDialog {
    /// Name shown in the prompt
    pub name: String,
    yes_button: Rect,
    no_button: Rect,
}

impl ConfirmDeleteDialog {
    pub fn set_target(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl Component for ConfirmDeleteDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let pos = Position::new(mouse.column, mouse.row);
        if self.yes_button.contains(pos) {
            Ok(Some(Action::ConfirmDelete))
        } else if self.no_button.contains(pos) {
            Ok(Some(Action::CloseModal))
        } else {
            Ok(None)
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 50, 9);
        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Are you sure you want to delete this contact?",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.name.clone(),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" y ", theme::key_hint(Color::Green)),
                Span::raw("Delete  "),
                Span::styled(" n/Esc ", theme::key_hint(Color::Red)),
                Span::raw("Keep"),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::DANGER))
            .style(Style::default().bg(theme::BACKGROUND))
            .title(" Confirm deletion ")
            .title_style(Style::default().fg(theme::DANGER).add_modifier(Modifier::BOLD));
        let inner = block.inner(popup_area);

        let paragraph = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, popup_area);

        let button_row = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1);
        let buttons = right_aligned_buttons(
            button_row,
            &[YES_LABEL.len() as u16, NO_LABEL.len() as u16],
            2,
        );
        self.yes_button = buttons[0];
        self.no_button = buttons[1];
        frame.render_widget(
            Paragraph::new(YES_LABEL).style(theme::button(theme::DANGER, false)),
            self.yes_button,
        );
        frame.render_widget(
            Paragraph::new(NO_LABEL).style(theme::button(Color::Rgb(97, 97, 97), false)),
            self.no_button,
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_keys_confirm_or_cancel() {
        let mut dialog = ConfirmDeleteDialog::default();
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            dialog.handle_key_event(press(KeyCode::Char('y'))).unwrap(),
            Some(Action::ConfirmDelete)
        );
        assert_eq!(
            dialog.handle_key_event(press(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModal)
        );
        assert_eq!(dialog.handle_key_event(press(KeyCode::Char('x'))).unwrap(), None);
    }

    #[test]
    fn test_clicking_yes_confirms() {
        let mut dialog = ConfirmDeleteDialog::default();
        dialog.set_target("Ana");
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                dialog.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: dialog.yes_button.x,
            row: dialog.yes_button.y,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            dialog.handle_mouse_event(click).unwrap(),
            Some(Action::ConfirmDelete)
        );
    }
}
