//! Key and mouse dispatch for the event loop

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Entry, InputMode, Screen, Tab};
use crate::ui::layout::{self, rect_contains, rect_inner, UiAreas};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Command => handle_command_mode(app, key),
        InputMode::Normal if app.menu_visible() => handle_menu_mode(app, key),
        InputMode::Normal => handle_normal_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    let shell = app.entry == Entry::Shell;
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        (KeyCode::Char('q'), _) => app.should_quit = true,
        (KeyCode::Char('?'), _) => app.help_open = true,
        (KeyCode::Char(':'), _) => app.enter_command(),
        (KeyCode::Char(ch @ '1'..='5'), _) if shell => {
            if let Some(tab) = Tab::from_shortcut(ch) {
                app.select_tab(tab);
            }
        }
        (KeyCode::Tab, _) if shell => app.cycle_tab(true),
        (KeyCode::BackTab, _) if shell => app.cycle_tab(false),
        (KeyCode::Char('m'), _) if shell => app.toggle_mobile_menu(),
        _ => app.handle_module_key(key),
    }
}

/// Keys while the collapsed menu is showing.
fn handle_menu_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.nav.move_menu_cursor(false),
        KeyCode::Down | KeyCode::Char('j') => app.nav.move_menu_cursor(true),
        KeyCode::Enter => {
            if let Some(tab) = Tab::ALL.get(app.nav.menu_cursor()).copied() {
                app.choose_menu_item(tab);
            }
        }
        KeyCode::Char(ch @ '1'..='5') => {
            if let Some(tab) = Tab::from_shortcut(ch) {
                app.choose_menu_item(tab);
            }
        }
        KeyCode::Esc | KeyCode::Char('m') => app.nav.close_mobile_menu(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

/// `size` is the terminal area the last frame was drawn into.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.help_open || app.input_mode == InputMode::Command {
        return;
    }
    app.set_viewport_width(size.width);
    let areas = layout::areas(size);
    let col = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, areas, col, row),
        MouseEventKind::ScrollUp => handle_scroll(app, areas, col, row, false),
        MouseEventKind::ScrollDown => handle_scroll(app, areas, col, row, true),
        _ => {}
    }
}

fn handle_click(app: &mut App, areas: UiAreas, col: u16, row: u16) {
    let bar = rect_inner(areas.header);
    let narrow_shell = app.entry == Entry::Shell && app.is_narrow();

    if narrow_shell && rect_contains(layout::menu_toggle_area(bar), col, row) {
        app.toggle_mobile_menu();
        return;
    }

    if app.menu_visible() {
        let menu = rect_inner(layout::menu_area(areas.size));
        if rect_contains(menu, col, row) {
            if let Some(tab) = Tab::ALL.get((row - menu.y) as usize).copied() {
                app.choose_menu_item(tab);
            }
        } else {
            app.nav.close_mobile_menu();
        }
        return;
    }

    if rect_contains(areas.header, col, row) {
        if app.entry == Entry::Shell && !narrow_shell {
            let hit = layout::tab_segments(bar)
                .into_iter()
                .find(|(_, rect)| rect_contains(*rect, col, row));
            if let Some((tab, _)) = hit {
                app.select_tab(tab);
            }
        }
        return;
    }

    if rect_contains(areas.body, col, row) {
        click_body(app, areas.body, col, row);
    }
}

fn click_body(app: &mut App, body: Rect, col: u16, row: u16) {
    match app.screen() {
        Screen::MeetingList => {
            let meetings = &app.meetings;
            let len = meetings.meetings().len();
            if let Some(index) = layout::row_at(body, meetings.cursor(), len, col, row) {
                app.meetings.select(index);
            }
        }
        Screen::Evaluations => {
            let (list_area, _) = layout::evaluation_panes(body);
            let list = &app.evaluations;
            let rows = list.rows();
            let Some(index) = layout::row_at(list_area, list.cursor(), rows.len(), col, row)
            else {
                return;
            };
            app.evaluations.set_cursor(index);
            let action = app.evaluations.activate(rows[index], &app.ctx);
            app.apply_action(action);
        }
        Screen::Todos => {
            let todos = &app.todos;
            let len = todos.todos().len();
            if let Some(index) = layout::row_at(body, todos.cursor(), len, col, row) {
                app.todos.set_cursor(index);
            }
        }
        Screen::Dashboard | Screen::MeetingDetail | Screen::Facilitation | Screen::Analytics => {}
    }
}

fn handle_scroll(app: &mut App, areas: UiAreas, col: u16, row: u16, forward: bool) {
    if app.menu_visible() {
        app.nav.move_menu_cursor(forward);
        return;
    }
    if !rect_contains(areas.body, col, row) {
        return;
    }
    match app.screen() {
        Screen::MeetingList => app.meetings.move_cursor(forward),
        Screen::Evaluations => app.evaluations.move_cursor(forward),
        Screen::Todos => app.todos.move_cursor(forward),
        Screen::Facilitation => app.facilitation.move_cursor(forward),
        Screen::Dashboard | Screen::MeetingDetail | Screen::Analytics => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppOptions;
    use crate::store::FixtureSet;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_select_tabs_in_shell_only() {
        let fixtures = FixtureSet::builtin();
        let mut app = App::shell(&fixtures, AppOptions::default());
        handle_key(&mut app, key(KeyCode::Char('4')));
        assert_eq!(app.active_tab(), Tab::Todos);

        let mut app = App::evaluations(&fixtures, AppOptions::default());
        handle_key(&mut app, key(KeyCode::Char('4')));
        assert_eq!(app.active_tab(), Tab::Dashboard);
        assert_eq!(app.screen(), Screen::Evaluations);
    }

    #[test]
    fn test_menu_keys_choose_and_close() {
        let mut app = App::shell(&FixtureSet::builtin(), AppOptions::default());
        app.set_viewport_width(60);
        handle_key(&mut app, key(KeyCode::Char('m')));
        assert!(app.menu_visible());

        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.active_tab(), Tab::Meetings);
        assert!(!app.nav.is_mobile_menu_open());
    }

    #[test]
    fn test_command_mode_collects_input() {
        let mut app = App::shell(&FixtureSet::builtin(), AppOptions::default());
        handle_key(&mut app, key(KeyCode::Char(':')));
        for ch in "fac".chars() {
            handle_key(&mut app, key(KeyCode::Char(ch)));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.active_tab(), Tab::Facilitation);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = App::shell(&FixtureSet::builtin(), AppOptions::default());
        handle_key(&mut app, key(KeyCode::Char('?')));
        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.active_tab(), Tab::Dashboard);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.help_open);
    }
}
