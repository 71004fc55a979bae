use crossterm::event::{KeyCode, KeyEvent};

use super::step_cursor;
use crate::core::{Action, Context, Module};
use crate::domain::{Todo, TodoStatus};

/// Action items raised in meetings.
#[derive(Debug, Clone)]
pub struct TodoList {
    todos: Vec<Todo>,
    cursor: usize,
}

impl TodoList {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos, cursor: 0 }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.todos.len() {
            self.cursor = index;
        }
    }

    pub fn move_cursor(&mut self, forward: bool) {
        self.cursor = step_cursor(self.cursor, self.todos.len(), forward);
    }

    pub fn open_count(&self) -> usize {
        self.todos
            .iter()
            .filter(|todo| todo.status != TodoStatus::Completed)
            .count()
    }
}

impl Module for TodoList {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(true),
            _ => {}
        }
        Action::None
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}
