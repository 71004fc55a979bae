//! Evaluation list: pending and completed meetings in two collapsible
//! sections. Activating a row hands off to the form or detail view.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::step_cursor;
use crate::core::{Action, Context, Module, Route};
use crate::domain::{Evaluation, Meeting};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Pending,
    Completed,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Pending, Section::Completed];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Pending => "Awaiting evaluation",
            Section::Completed => "Evaluated",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Section::Pending => 'p',
            Section::Completed => 'c',
        }
    }
}

/// Open/closed flags of the two sections. Both start open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure {
    pending_open: bool,
    completed_open: bool,
}

impl Default for Disclosure {
    fn default() -> Self {
        Self {
            pending_open: true,
            completed_open: true,
        }
    }
}

impl Disclosure {
    pub fn is_open(&self, section: Section) -> bool {
        match section {
            Section::Pending => self.pending_open,
            Section::Completed => self.completed_open,
        }
    }

    pub fn toggle(&mut self, section: Section) {
        match section {
            Section::Pending => self.pending_open = !self.pending_open,
            Section::Completed => self.completed_open = !self.completed_open,
        }
    }
}

/// A visible line of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Header(Section),
    /// Index into the pending meetings
    Pending(usize),
    /// Index into the completed evaluations
    Completed(usize),
}

impl Row {
    pub fn section(&self) -> Section {
        match self {
            Row::Header(section) => *section,
            Row::Pending(_) => Section::Pending,
            Row::Completed(_) => Section::Completed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EvaluationList {
    pending: Vec<Meeting>,
    completed: Vec<Evaluation>,
    disclosure: Disclosure,
    cursor: usize,
}

impl EvaluationList {
    pub fn new(pending: Vec<Meeting>, completed: Vec<Evaluation>) -> Self {
        Self {
            pending,
            completed,
            disclosure: Disclosure::default(),
            cursor: 0,
        }
    }

    pub fn pending(&self) -> &[Meeting] {
        &self.pending
    }

    pub fn completed(&self) -> &[Evaluation] {
        &self.completed
    }

    pub fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::with_capacity(self.pending.len() + self.completed.len() + 2);
        rows.push(Row::Header(Section::Pending));
        if self.disclosure.is_open(Section::Pending) {
            rows.extend((0..self.pending.len()).map(Row::Pending));
        }
        rows.push(Row::Header(Section::Completed));
        if self.disclosure.is_open(Section::Completed) {
            rows.extend((0..self.completed.len()).map(Row::Completed));
        }
        rows
    }

    pub fn current_row(&self) -> Option<Row> {
        self.rows().get(self.cursor).copied()
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.rows().len() {
            self.cursor = index;
        }
    }

    pub fn move_cursor(&mut self, forward: bool) {
        self.cursor = step_cursor(self.cursor, self.rows().len(), forward);
    }

    /// Flip one section. The cursor stays on the same row when it is still
    /// visible, otherwise it moves to the toggled section's header.
    pub fn toggle(&mut self, section: Section) {
        let current = self.current_row();
        self.disclosure.toggle(section);
        debug!(?section, open = self.disclosure.is_open(section), "section toggled");

        let rows = self.rows();
        let target = current
            .and_then(|row| rows.iter().position(|r| *r == row))
            .or_else(|| rows.iter().position(|r| *r == Row::Header(section)))
            .unwrap_or(0);
        self.cursor = target;
    }

    /// Where activating `row` leads, if anywhere.
    pub fn route_for(&self, row: Row, facilitator: &str) -> Option<Route> {
        match row {
            Row::Header(_) => None,
            Row::Pending(index) => self
                .pending
                .get(index)
                .map(|meeting| Route::form(meeting.title.clone(), facilitator)),
            Row::Completed(index) => self
                .completed
                .get(index)
                .map(|evaluation| Route::detail(evaluation.id())),
        }
    }

    /// Enter on a row: headers toggle, records hand off.
    pub fn activate(&mut self, row: Row, ctx: &Context) -> Action {
        match row {
            Row::Header(section) => {
                self.toggle(section);
                Action::None
            }
            _ => self
                .route_for(row, &ctx.facilitator)
                .map(Action::Handoff)
                .unwrap_or(Action::None),
        }
    }

    pub fn reset(&mut self) {
        self.disclosure = Disclosure::default();
        self.cursor = 0;
    }
}

impl Module for EvaluationList {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(true),
            KeyCode::Char('p') => self.toggle(Section::Pending),
            KeyCode::Char('c') => self.toggle(Section::Completed),
            KeyCode::Enter => {
                if let Some(row) = self.current_row() {
                    return self.activate(row, ctx);
                }
            }
            KeyCode::Char('y') => {
                let route = self
                    .current_row()
                    .and_then(|row| self.route_for(row, &ctx.facilitator));
                if let Some(route) = route {
                    return Action::Copy(route.to_url(&ctx.base_url).to_string());
                }
            }
            _ => {}
        }
        Action::None
    }

    fn reset(&mut self) {
        EvaluationList::reset(self);
    }
}
