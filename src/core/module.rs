//! Module trait for interactive views

use crossterm::event::KeyEvent;

use super::{Action, Context};

/// Trait for views that handle their own input
pub trait Module {
    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action;

    /// Drop view-local state, as if the view was mounted again
    fn reset(&mut self) {}
}
