use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use valuemeet::app::{App, AppOptions, Entry, StatusLevel, Tab, DEFAULT_NARROW_WIDTH};
use valuemeet::config::{self, Config};
use valuemeet::core::context::{default_base_url, parse_base_url, DEFAULT_FACILITATOR};
use valuemeet::core::Context;
use valuemeet::store::FixtureSet;
use valuemeet::{input, ui};

#[derive(Debug, Parser)]
#[command(
    name = "valuemeet",
    version,
    about = "ValueMeet: meeting evaluations and facilitation in the terminal"
)]
struct Args {
    /// Config file (default: $VALUEMEET_CONFIG or ~/.config/valuemeet/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON fixture file replacing the built-in sample data
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Tab to open the shell on (dashboard, meetings, facilitation, todos, analytics)
    #[arg(long)]
    tab: Option<String>,

    /// Log file (default: <data dir>/valuemeet.log)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<EntryCommand>,
}

#[derive(Debug, Subcommand)]
enum EntryCommand {
    /// Tabbed dashboard (default)
    Shell,
    /// Pending and completed meeting evaluations
    Evaluations {
        /// Keep the list open after a hand-off instead of exiting
        #[arg(long)]
        stay: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(config::config_path);
    let (config, config_error) = match config_path.as_deref().map(config::parse_file) {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (Config::default(), Some(err)),
        None => (Config::default(), None),
    };

    let log_path = args
        .log_file
        .clone()
        .or_else(|| config.log_path())
        .or_else(config::default_log_path);
    init_logging(log_path.as_deref());
    if let (Some(path), Some(err)) = (config_path.as_deref(), config_error) {
        warn!(path = %path.display(), %err, "ignoring unreadable or malformed config");
    }

    let fixtures = load_fixtures(&args, &config)?;
    let (entry, stay) = match args.command {
        None | Some(EntryCommand::Shell) => (Entry::Shell, false),
        Some(EntryCommand::Evaluations { stay }) => (Entry::Evaluations, stay),
    };
    let options = app_options(&args, &config);
    info!(?entry, tab = options.initial_tab.id(), "starting");
    let app = App::new(&fixtures, entry, options);

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let res = run_app(&mut terminal, app, stay);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(url)) => println!("{url}"),
        Ok(None) => {}
        Err(err) => eprintln!("{err:?}"),
    }

    Ok(())
}

/// Logs go to a file because the terminal belongs to the UI. If the file
/// cannot be opened, logging stays off.
fn init_logging(path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("VALUEMEET_LOG").unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init();
}

fn load_fixtures(args: &Args, config: &Config) -> Result<FixtureSet> {
    match args.fixtures.clone().or_else(|| config.fixtures_path()) {
        Some(path) => FixtureSet::from_json_file(&path)
            .with_context(|| format!("load fixtures from {}", path.display())),
        None => Ok(FixtureSet::builtin()),
    }
}

fn app_options(args: &Args, config: &Config) -> AppOptions {
    // Stray whitespace from the shell or config file is forgiven here.
    let tab_id = args
        .tab
        .as_deref()
        .or(config.initial_tab.as_deref())
        .map(str::trim);
    let initial_tab = tab_id.map(Tab::from_id).unwrap_or(Tab::Dashboard);
    if let Some(id) = tab_id {
        if initial_tab.id() != id {
            warn!(id, "unknown tab, opening the dashboard");
        }
    }

    let base_url = match config.base_url.as_deref() {
        Some(raw) => parse_base_url(raw).unwrap_or_else(|| {
            warn!(raw, "invalid base_url, using the default");
            default_base_url()
        }),
        None => default_base_url(),
    };
    let facilitator = config.facilitator().unwrap_or(DEFAULT_FACILITATOR);

    AppOptions {
        initial_tab,
        narrow_width: config.narrow_width.unwrap_or(DEFAULT_NARROW_WIDTH),
        ctx: Context::new(facilitator, base_url),
    }
}

/// Returns the hand-off URL when the view ended with one.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    stay: bool,
) -> Result<Option<String>> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            return Ok(None);
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    input::handle_mouse(&mut app, mouse, size);
                }
                Event::Resize(width, _) => app.set_viewport_width(width),
                _ => {}
            }
        }

        if let Some(route) = app.take_handoff() {
            let url = route.to_url(&app.ctx.base_url).to_string();
            if !stay {
                info!(%url, "leaving for hand-off");
                return Ok(Some(url));
            }
        }
        if let Some(text) = app.take_copy_request() {
            copy_to_clipboard(&mut app, text);
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn copy_to_clipboard(app: &mut App, text: String) {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => {
            if clipboard.set_text(text.as_str()).is_ok() {
                let shown: String = text.chars().take(40).collect();
                let ellipsis = if text.chars().count() > 40 { "…" } else { "" };
                app.set_status(format!("Copied: {shown}{ellipsis}"), StatusLevel::Info);
            } else {
                app.set_status("Failed to copy to clipboard", StatusLevel::Error);
            }
        }
        Err(err) => {
            warn!(%err, "clipboard not available");
            app.set_status("Clipboard not available", StatusLevel::Error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_to_shell() {
        let args = Args::try_parse_from(["valuemeet"]).unwrap();
        assert!(args.command.is_none());

        let args = Args::try_parse_from(["valuemeet", "--tab", "todos", "shell"]).unwrap();
        assert_eq!(args.tab.as_deref(), Some("todos"));
        assert!(matches!(args.command, Some(EntryCommand::Shell)));
    }

    #[test]
    fn test_evaluations_stay_flag() {
        let args = Args::try_parse_from([
            "valuemeet",
            "evaluations",
            "--stay",
            "--fixtures",
            "data.json",
        ])
        .unwrap();
        assert!(matches!(args.command, Some(EntryCommand::Evaluations { stay: true })));
        assert_eq!(args.fixtures, Some(PathBuf::from("data.json")));
    }

    #[test]
    fn test_app_options_fall_back() {
        let args = Args::try_parse_from(["valuemeet", "--tab", "bogus"]).unwrap();
        let config = Config {
            base_url: Some("mailto:x@example.com".to_string()),
            ..Config::default()
        };
        let options = app_options(&args, &config);
        assert_eq!(options.initial_tab, Tab::Dashboard);
        assert_eq!(options.ctx.base_url, default_base_url());
        assert_eq!(options.ctx.facilitator, DEFAULT_FACILITATOR);
        assert_eq!(options.narrow_width, DEFAULT_NARROW_WIDTH);
    }

    #[test]
    fn test_cli_tab_is_trimmed_before_lookup() {
        let args = Args::try_parse_from(["valuemeet", "--tab", " todos "]).unwrap();
        let options = app_options(&args, &Config::default());
        assert_eq!(options.initial_tab, Tab::Todos);
    }
}
