//! Component trait - Interface for UI components
//!
//! Each component keeps its own presentation state, turns input into
//! Actions, and renders itself. Contact data never lives in a component;
//! it is passed in from the App's snapshot at draw time.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The pattern follows:
/// 1. `handle_key_event` / `handle_mouse_event` - Convert events to Actions
/// 2. `update` - Process Actions and update state
/// 3. `draw` - Render the component
pub trait Component {
    /// Convert a key press into an Action
    ///
    /// Text inputs may edit their own buffers here; anything that touches
    /// contacts must go out as an Action.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Convert a mouse event into an Action
    ///
    /// Components remember where they drew their clickable parts during
    /// the last `draw` and hit-test against those areas.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Update component state based on an Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component into `area`
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
