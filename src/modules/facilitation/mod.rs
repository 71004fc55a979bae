//! Facilitation: agenda progress with a start/pause control.
//!
//! Notes and the facilitation tools are placeholders and have no state here.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::step_cursor;
use crate::core::{Action, Context, Module};
use crate::domain::{AgendaItem, AgendaStatus};

#[derive(Debug, Clone)]
pub struct Facilitation {
    agenda: Vec<AgendaItem>,
    active: bool,
    cursor: usize,
}

impl Facilitation {
    pub fn new(agenda: Vec<AgendaItem>) -> Self {
        let cursor = initial_cursor(&agenda);
        Self {
            agenda,
            active: false,
            cursor,
        }
    }

    pub fn agenda(&self) -> &[AgendaItem] {
        &self.agenda
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn toggle_active(&mut self) {
        self.active = !self.active;
        debug!(active = self.active, "facilitation session toggled");
    }

    pub fn move_cursor(&mut self, forward: bool) {
        self.cursor = step_cursor(self.cursor, self.agenda.len(), forward);
    }

    /// Total planned minutes.
    pub fn planned_minutes(&self) -> u32 {
        self.agenda.iter().map(|item| item.duration).sum()
    }
}

fn initial_cursor(agenda: &[AgendaItem]) -> usize {
    agenda
        .iter()
        .position(|item| item.status == AgendaStatus::Active)
        .unwrap_or(0)
}

impl Module for Facilitation {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('s') | KeyCode::Char(' ') => self.toggle_active(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(true),
            _ => {}
        }
        Action::None
    }

    fn reset(&mut self) {
        self.active = false;
        self.cursor = initial_cursor(&self.agenda);
    }
}
