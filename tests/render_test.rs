//! Frame rendering through the test backend

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use valuemeet::app::{App, AppOptions, Tab};
use valuemeet::store::FixtureSet;
use valuemeet::ui;

fn render(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.get(x, y).symbol().to_string())
                .collect()
        })
        .collect()
}

fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

fn shell() -> App {
    App::shell(&FixtureSet::builtin(), AppOptions::default())
}

#[test]
fn test_each_tab_renders_its_view() {
    let expected = [
        (Tab::Dashboard, "RECENT EVALUATIONS"),
        (Tab::Meetings, "MEETINGS (2)"),
        (Tab::Facilitation, "AGENDA"),
        (Tab::Todos, "TODOS (2 open)"),
        (Tab::Analytics, "ANALYTICS"),
    ];
    for (tab, title) in expected {
        let mut app = shell();
        app.select_tab(tab);
        let rows = render(&mut app, 120, 30);
        assert!(contains(&rows, title), "{tab:?} should show {title}");
    }
}

#[test]
fn test_wide_header_lists_every_tab() {
    let mut app = shell();
    let rows = render(&mut app, 120, 30);
    for tab in Tab::ALL {
        assert!(contains(&rows[..3], &format!("{}:{}", tab.shortcut(), tab.title())));
    }
    assert!(!contains(&rows[..3], "≡"));
    assert!(!app.is_narrow());
}

#[test]
fn test_narrow_header_collapses_to_menu_marker() {
    let mut app = shell();
    app.select_tab(Tab::Todos);
    let rows = render(&mut app, 60, 24);
    assert!(app.is_narrow());
    assert!(contains(&rows[..3], "Todos"));
    assert!(contains(&rows[..3], "≡"));
    assert!(!contains(&rows[..3], "1:Dashboard"));
}

#[test]
fn test_menu_overlay_lists_tabs_when_open() {
    let mut app = shell();
    render(&mut app, 60, 24);
    app.toggle_mobile_menu();
    let rows = render(&mut app, 60, 24);
    assert!(contains(&rows, "MENU"));
    assert!(contains(&rows, "3 Facilitation"));
    assert!(contains(&rows, "5 Analytics"));

    // Widening the terminal hides the overlay without forgetting it.
    let rows = render(&mut app, 120, 30);
    assert!(!contains(&rows, "MENU"));
    assert!(app.nav.is_mobile_menu_open());
}

#[test]
fn test_help_popup() {
    let mut app = shell();
    app.help_open = true;
    let rows = render(&mut app, 120, 30);
    assert!(contains(&rows, "Help"));
    assert!(contains(&rows, "Command bar"));
}

#[test]
fn test_evaluation_list_sections_and_preview() {
    let mut app = App::evaluations(&FixtureSet::builtin(), AppOptions::default());
    let rows = render(&mut app, 120, 30);
    assert!(contains(&rows[..3], "Meeting evaluations"));
    assert!(contains(&rows, "Awaiting evaluation"));
    assert!(contains(&rows, "Evaluated"));
    assert!(contains(&rows, "PREVIEW"));
    assert!(contains(&rows, "Select a meeting"));

    // First completed evaluation: rating stars in the preview.
    app.evaluations.set_cursor(5);
    let rows = render(&mut app, 120, 30);
    assert!(contains(&rows, "★"));
    assert!(contains(&rows, "Feedback"));

    // No preview pane below the width threshold.
    let rows = render(&mut app, 80, 30);
    assert!(contains(&rows, "EVALUATIONS"));
    assert!(!contains(&rows, "PREVIEW"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = shell();
    app.toggle_mobile_menu();
    app.help_open = true;
    render(&mut app, 10, 4);

    let mut app = App::evaluations(&FixtureSet::builtin(), AppOptions::default());
    render(&mut app, 1, 1);
}
