//! The trait every routable view implements.

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;

/// One routable surface of the UI.
///
/// The app owns every view and drives them all through the same small
/// surface: input is offered to the active view, dispatched actions are
/// forwarded to it, and each frame the active view draws itself into
/// the area the layout hands it.
pub trait View: Send {
    /// Runs once at startup, before the first frame.
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    /// Offered every key the global handler did not claim. Returns the
    /// action the key maps to, if any.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    fn handle_mouse_event(&mut self, _mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Applies a dispatched action, optionally producing a follow-up.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect);

    /// Whether this view currently has input focus.
    #[allow(dead_code)]
    fn focused(&self) -> bool {
        false
    }

    /// Losing focus also drops transient fetch state; a request in
    /// flight when the user leaves is stale by the time they return.
    fn set_focused(&mut self, _focused: bool) {}

    #[allow(dead_code)]
    fn name(&self) -> &str;
}
