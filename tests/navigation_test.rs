//! Tab selection, the collapsed menu and the command bar

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use valuemeet::app::{App, AppOptions, Screen, StatusLevel, Tab};
use valuemeet::input::handle_key;
use valuemeet::store::FixtureSet;

fn shell() -> App {
    App::shell(&FixtureSet::builtin(), AppOptions::default())
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_command(app: &mut App, command: &str) {
    press(app, KeyCode::Char(':'));
    for ch in command.chars() {
        press(app, KeyCode::Char(ch));
    }
    press(app, KeyCode::Enter);
}

#[test]
fn test_each_tab_id_renders_its_view() {
    let expected = [
        ("dashboard", Screen::Dashboard),
        ("meetings", Screen::MeetingList),
        ("facilitation", Screen::Facilitation),
        ("todos", Screen::Todos),
        ("analytics", Screen::Analytics),
    ];

    let mut app = shell();
    for (id, screen) in expected {
        app.select_tab_id(id);
        assert_eq!(app.active_tab().id(), id);
        assert_eq!(app.screen(), screen, "tab {id}");
    }
}

#[test]
fn test_unknown_id_falls_back_to_dashboard() {
    let mut app = shell();
    for id in ["", "settings", "MEETINGS", "meetings/1", "🙂", " todos ", "todos\n"] {
        app.select_tab(Tab::Todos);
        app.select_tab_id(id);
        assert_eq!(app.screen(), Screen::Dashboard, "id {id:?}");
    }

    let options = AppOptions {
        initial_tab: Tab::from_id("nope"),
        ..AppOptions::default()
    };
    let app = App::shell(&FixtureSet::builtin(), options);
    assert_eq!(app.screen(), Screen::Dashboard);
}

#[test]
fn test_exactly_one_tab_is_active() {
    let mut app = shell();
    for code in ['2', '5', '3'] {
        press(&mut app, KeyCode::Char(code));
    }
    assert_eq!(app.active_tab(), Tab::Facilitation);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.active_tab(), Tab::Todos);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.active_tab(), Tab::Meetings);
}

#[test]
fn test_choosing_from_menu_closes_it() {
    for tab in Tab::ALL {
        let mut app = shell();
        app.set_viewport_width(50);
        app.toggle_mobile_menu();
        assert!(app.nav.is_mobile_menu_open());

        app.choose_menu_item(tab);
        assert_eq!(app.active_tab(), tab);
        assert!(!app.nav.is_mobile_menu_open());
        assert!(!app.menu_visible());
    }
}

#[test]
fn test_menu_digit_and_escape() {
    let mut app = shell();
    app.set_viewport_width(50);

    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.active_tab(), Tab::Todos);
    assert!(!app.nav.is_mobile_menu_open());

    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.active_tab(), Tab::Todos);
    assert!(!app.nav.is_mobile_menu_open());
}

#[test]
fn test_menu_flag_survives_wide_layout() {
    let mut app = shell();
    app.set_viewport_width(50);
    app.toggle_mobile_menu();

    app.set_viewport_width(140);
    assert!(app.nav.is_mobile_menu_open());
    assert!(!app.menu_visible());

    // Keys go to the normal bindings while the menu is hidden.
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.active_tab(), Tab::Meetings);
}

#[test]
fn test_commands_map_to_tabs() {
    let cases = [
        ("meetings", Tab::Meetings),
        ("mtg", Tab::Meetings),
        ("fac", Tab::Facilitation),
        ("todo", Tab::Todos),
        ("stats", Tab::Analytics),
        ("dash", Tab::Dashboard),
    ];
    let mut app = shell();
    for (command, tab) in cases {
        type_command(&mut app, command);
        assert_eq!(app.active_tab(), tab, "command {command}");
    }
}

#[test]
fn test_unknown_command_warns_and_keeps_tab() {
    let mut app = shell();
    app.select_tab(Tab::Todos);

    type_command(&mut app, "settings");
    assert_eq!(app.active_tab(), Tab::Todos);
    let (text, level) = app.status_text().expect("status message");
    assert_eq!(level, StatusLevel::Warn);
    assert!(text.contains("settings"));
    assert_eq!(app.command.last.as_deref(), Some("settings"));
}

#[test]
fn test_escape_cancels_command() {
    let mut app = shell();
    press(&mut app, KeyCode::Char(':'));
    press(&mut app, KeyCode::Char('q'));
    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit);

    type_command(&mut app, "quit");
    assert!(app.should_quit);
}
