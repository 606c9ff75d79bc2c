//! Component trait - the contract every dashboard widget implements

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A self-contained piece of the UI
///
/// 1. `handle_key_event` maps a key to an Action without touching state
///    (dialogs may update their own input buffers here)
/// 2. `update` applies an Action and may return a follow-up Action
/// 3. `draw` renders; it must not change what the next draw shows
pub trait Component {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
