//! Meeting Management: a list of scheduled meetings with a detail view.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::step_cursor;
use crate::core::{Action, Context, Module, NotifyLevel};
use crate::domain::ScheduledMeeting;

/// Which half of the master/detail pair is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum MeetingView {
    List,
    /// Holds the record captured when its card was activated.
    Detail(ScheduledMeeting),
}

#[derive(Debug, Clone)]
pub struct MeetingManagement {
    meetings: Vec<ScheduledMeeting>,
    cursor: usize,
    view: MeetingView,
}

impl MeetingManagement {
    pub fn new(meetings: Vec<ScheduledMeeting>) -> Self {
        Self {
            meetings,
            cursor: 0,
            view: MeetingView::List,
        }
    }

    pub fn meetings(&self) -> &[ScheduledMeeting] {
        &self.meetings
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn view(&self) -> &MeetingView {
        &self.view
    }

    pub fn selected(&self) -> Option<&ScheduledMeeting> {
        match &self.view {
            MeetingView::Detail(meeting) => Some(meeting),
            MeetingView::List => None,
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self.view, MeetingView::Detail(_))
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.meetings.len() {
            self.cursor = index;
        }
    }

    pub fn move_cursor(&mut self, forward: bool) {
        self.cursor = step_cursor(self.cursor, self.meetings.len(), forward);
    }

    /// Activate the card at `index`. Returns false if there is no such card.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(meeting) = self.meetings.get(index) else {
            return false;
        };
        debug!(id = meeting.id, "meeting selected");
        self.cursor = index;
        self.view = MeetingView::Detail(meeting.clone());
        true
    }

    /// Return to the list, clearing the selection.
    pub fn back(&mut self) -> bool {
        if !self.is_detail() {
            return false;
        }
        self.view = MeetingView::List;
        true
    }
}

impl Module for MeetingManagement {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        if let Some(title) = self.selected().map(|meeting| meeting.title.clone()) {
            return match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                    self.back();
                    Action::None
                }
                KeyCode::Char('y') => Action::Copy(title),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(true),
            KeyCode::Enter => {
                if !self.select(self.cursor) {
                    return Action::Notify("No meetings".to_string(), NotifyLevel::Warn);
                }
            }
            _ => {}
        }
        Action::None
    }

    fn reset(&mut self) {
        self.view = MeetingView::List;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FixtureSet;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_and_back() {
        let mut ctx = Context::default();
        let mut mm = MeetingManagement::new(FixtureSet::builtin().meetings);
        mm.handle_key(key(KeyCode::Down), &mut ctx);
        mm.handle_key(key(KeyCode::Enter), &mut ctx);
        assert_eq!(mm.selected().map(|m| m.id), Some(2));

        mm.handle_key(key(KeyCode::Esc), &mut ctx);
        assert_eq!(mm.view(), &MeetingView::List);
        assert!(mm.selected().is_none());
        assert_eq!(mm.cursor(), 1);
    }

    #[test]
    fn test_back_is_the_only_exit_from_detail() {
        let mut ctx = Context::default();
        let mut mm = MeetingManagement::new(FixtureSet::builtin().meetings);
        assert!(mm.select(0));
        for code in [KeyCode::Up, KeyCode::Down, KeyCode::Enter, KeyCode::Char('j')] {
            mm.handle_key(key(code), &mut ctx);
        }
        assert_eq!(mm.selected().map(|m| m.id), Some(1));
    }

    #[test]
    fn test_empty_list() {
        let mut ctx = Context::default();
        let mut mm = MeetingManagement::new(Vec::new());
        let action = mm.handle_key(key(KeyCode::Enter), &mut ctx);
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Warn)));
        assert!(!mm.is_detail());
        assert!(!mm.back());
    }

    #[test]
    fn test_copy_title_in_detail() {
        let mut ctx = Context::default();
        let mut mm = MeetingManagement::new(FixtureSet::builtin().meetings);
        mm.select(0);
        let action = mm.handle_key(key(KeyCode::Char('y')), &mut ctx);
        assert_eq!(action, Action::Copy("システム設計レビュー".to_string()));
    }
}
