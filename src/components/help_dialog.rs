//! Help dialog component
//!
//! Lists the keyboard and mouse shortcuts.

use crate::action::Action;
use crate::component::Component;
use crate::components::{centered_popup, theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help dialog showing all shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_help_content();
        let height = (content.len() as u16 + 2).min(area.height);
        let dialog_area = centered_popup(area, 56, height);
        frame.render_widget(Clear, dialog_area);

        // Clamp scroll offset
        let visible_height = dialog_area.height.saturating_sub(2) as usize;
        let max_scroll = content.len().saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(theme::title())
                    .border_style(Style::default().fg(theme::ACCENT))
                    .style(Style::default().bg(theme::BACKGROUND)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);
        Ok(())
    }
}

/// Build the help content with all shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Contacts");
    add_shortcut(&mut lines, "a", "Add a contact");
    add_shortcut(&mut lines, "d / Delete", "Delete the selected contact");
    add_shortcut(&mut lines, "r", "Reload the table");

    add_section(&mut lines, "Navigation");
    add_shortcut(&mut lines, "j / ↓", "Next row");
    add_shortcut(&mut lines, "k / ↑", "Previous row");
    add_shortcut(&mut lines, "g / G", "First / last row");
    add_shortcut(&mut lines, "Esc", "Clear selection");
    add_shortcut(&mut lines, "Click", "Select a row or press a button");

    add_section(&mut lines, "Add dialog");
    add_shortcut(&mut lines, "Tab / Shift+Tab", "Next / previous field");
    add_shortcut(&mut lines, "Enter", "Save");
    add_shortcut(&mut lines, "Esc", "Cancel");

    add_section(&mut lines, "General");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit (asks first)");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::default();
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            assert_eq!(
                dialog
                    .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                    .unwrap(),
                Some(Action::CloseModal)
            );
        }
    }

    #[test]
    fn test_help_lists_contact_shortcuts() {
        let text: String = build_help_content()
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Add a contact"));
        assert!(text.contains("Delete the selected contact"));
    }
}
