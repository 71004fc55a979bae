//! Command parser for the : command bar

use crate::app::Tab;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    Go(Tab),
    Back,
    Menu,

    // App commands
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
///
/// Unlike [`Tab::from_id`], unknown words are reported back instead of
/// falling back to the dashboard.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let cmd = input.split_whitespace().next().unwrap_or("");

    match cmd.to_lowercase().as_str() {
        // Navigation
        "dashboard" | "dash" | "home" => Command::Go(Tab::Dashboard),
        "meetings" | "meeting" | "mtg" => Command::Go(Tab::Meetings),
        "facilitation" | "fac" => Command::Go(Tab::Facilitation),
        "todos" | "todo" => Command::Go(Tab::Todos),
        "analytics" | "stats" => Command::Go(Tab::Analytics),
        "back" => Command::Back,
        "menu" => Command::Menu,

        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("dashboard"), Command::Go(Tab::Dashboard));
        assert_eq!(parse_command("mtg"), Command::Go(Tab::Meetings));
        assert_eq!(parse_command("  FAC "), Command::Go(Tab::Facilitation));
        assert_eq!(parse_command("todo"), Command::Go(Tab::Todos));
        assert_eq!(parse_command("stats"), Command::Go(Tab::Analytics));
        assert_eq!(parse_command("back"), Command::Back);
        assert_eq!(parse_command("menu"), Command::Menu);
    }

    #[test]
    fn test_parse_app_commands() {
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("help"), Command::Help);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("reports"),
            Command::Unknown("reports".to_string())
        );
        assert_eq!(parse_command(""), Command::Unknown(String::new()));
    }
}
