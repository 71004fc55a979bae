//! View modules
//!
//! Each module owns the local state of one view and implements the Module
//! trait for its key handling. Drawing lives in `ui`.
//!
//! Modules:
//! - meetings: Meeting Management list/detail toggle
//! - evaluation: Evaluation list with collapsible sections and hand-offs
//! - facilitation: Agenda cursor and session start/pause
//! - todos: Action item list

pub mod evaluation;
pub mod facilitation;
pub mod meetings;
pub mod todos;

/// Move a list cursor one step, clamped to `len`.
pub(crate) fn step_cursor(cursor: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (cursor + 1).min(len - 1)
    } else {
        cursor.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_cursor_clamps() {
        assert_eq!(step_cursor(0, 3, false), 0);
        assert_eq!(step_cursor(0, 3, true), 1);
        assert_eq!(step_cursor(2, 3, true), 2);
        assert_eq!(step_cursor(5, 0, true), 0);
    }
}
