//! Add-contact dialog
//!
//! Modal form with name, email, and phone inputs. Confirming validates the
//! form first; only a valid form reaches the controller. The dialog reports
//! how it closed through `DialogResult` rather than a flag read afterwards.

use crate::action::Action;
use crate::component::Component;
use crate::components::{centered_popup, right_aligned_buttons, theme};
use crate::error::{ContactError, ContactField};
use crate::model::{Contact, ContactDraft, ContactSnapshot};
use crate::services::ContactController;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SAVE_LABEL: &str = " Save ";
const CANCEL_LABEL: &str = " Cancel ";

/// Result of pressing confirm
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A required field is blank; the controller was not called
    Invalid(ContactField),
    /// Contact stored; the snapshot reflects it
    Saved {
        contact: Contact,
        snapshot: ContactSnapshot,
    },
    /// The store rejected the write
    Failed(ContactError),
}

pub struct AddContactDialog {
    pub draft: ContactDraft,
    pub focus: ContactField,
    /// Inline error shown under the form
    pub error: Option<String>,
    field_areas: [Rect; 3],
    save_button: Rect,
    cancel_button: Rect,
}

impl Default for AddContactDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl AddContactDialog {
    pub fn new() -> Self {
        Self {
            draft: ContactDraft::default(),
            focus: ContactField::Name,
            error: None,
            field_areas: [Rect::default(); 3],
            save_button: Rect::default(),
            cancel_button: Rect::default(),
        }
    }

    /// Clear the form before opening it again
    pub fn reset(&mut self) {
        self.draft = ContactDraft::default();
        self.focus = ContactField::Name;
        self.error = None;
    }

    /// Validate the form and, if it is complete, add the contact
    pub fn submit(&mut self, controller: &mut ContactController) -> SubmitOutcome {
        if let Err(err) = self.draft.validate() {
            let field = err.field().unwrap_or(self.focus);
            self.focus = field;
            self.error = Some(err.to_string());
            return SubmitOutcome::Invalid(field);
        }

        match controller.add(&self.draft) {
            Ok((contact, snapshot)) => {
                self.error = None;
                SubmitOutcome::Saved { contact, snapshot }
            }
            Err(err) => {
                if let Some(field) = err.field() {
                    self.focus = field;
                    self.error = Some(err.to_string());
                    return SubmitOutcome::Invalid(field);
                }
                self.error = Some(format!("Could not save contact: {}", err));
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn edit(&mut self, c: Option<char>) {
        let value = self.draft.value_mut(self.focus);
        match c {
            Some(c) => value.push(c),
            None => {
                value.pop();
            }
        }
        self.error = None;
    }
}

impl Component for AddContactDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SubmitContact),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Backspace => {
                self.edit(None);
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit(Some(c));
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let pos = Position::new(mouse.column, mouse.row);

        if self.save_button.contains(pos) {
            return Ok(Some(Action::SubmitContact));
        }
        if self.cancel_button.contains(pos) {
            return Ok(Some(Action::CloseModal));
        }
        for (field, area) in ContactField::all().into_iter().zip(self.field_areas) {
            if area.contains(pos) {
                self.focus = field;
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 60, 13);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::BACKGROUND))
            .title(" Add Contact ")
            .title_style(theme::title());
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Name
                Constraint::Length(1),
                Constraint::Length(1), // Email
                Constraint::Length(1),
                Constraint::Length(1), // Phone
                Constraint::Length(1), // Error
                Constraint::Length(1), // Buttons
                Constraint::Min(0),    // Hints
            ])
            .split(inner);

        for (i, field) in ContactField::all().into_iter().enumerate() {
            let row = chunks[i * 2];
            self.field_areas[i] = row;
            frame.render_widget(Paragraph::new(self.field_line(field)), row);
        }

        if let Some(ref error) = self.error {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    error.clone(),
                    Style::default().fg(theme::DANGER).add_modifier(Modifier::BOLD),
                )),
                chunks[5],
            );
        }

        let buttons = right_aligned_buttons(
            chunks[6],
            &[SAVE_LABEL.len() as u16, CANCEL_LABEL.len() as u16],
            2,
        );
        self.save_button = buttons[0];
        self.cancel_button = buttons[1];
        frame.render_widget(
            Paragraph::new(SAVE_LABEL).style(theme::button(theme::ACCENT, false)),
            self.save_button,
        );
        frame.render_widget(
            Paragraph::new(CANCEL_LABEL).style(theme::button(Color::Rgb(97, 97, 97), false)),
            self.cancel_button,
        );

        let hints = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", theme::key_hint(Color::Green)),
            Span::raw("Save  "),
            Span::styled(" Tab ", theme::key_hint(Color::Cyan)),
            Span::raw("Next field  "),
            Span::styled(" Esc ", theme::key_hint(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .style(Style::default().fg(theme::MUTED));
        frame.render_widget(hints, chunks[7]);

        Ok(())
    }
}

impl AddContactDialog {
    fn field_line(&self, field: ContactField) -> Line<'static> {
        let focused = self.focus == field;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::MUTED)
        };
        let value_style = if focused {
            Style::default()
                .fg(theme::TEXT)
                .bg(theme::PANEL)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT)
        };
        let cursor = if focused { "_" } else { "" };

        Line::from(vec![
            Span::styled(format!("{:>7}: ", field.label()), label_style),
            Span::styled(
                format!("{}{}", self.draft.value(field), cursor),
                value_style,
            ),
        ])
    }
}
