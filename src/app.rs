use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use tracing::{debug, info, warn};

use crate::core::{
    parse_command, Action, Command, Context, Module, NavigateTarget, NotifyLevel, Route,
};
use crate::domain::DashboardSummary;
use crate::modules::evaluation::EvaluationList;
use crate::modules::facilitation::Facilitation;
use crate::modules::meetings::MeetingManagement;
use crate::modules::todos::TodoList;
use crate::store::FixtureProvider;

/// Columns below which the tab bar collapses behind the menu marker.
pub const DEFAULT_NARROW_WIDTH: u16 = 80;

const STATUS_TTL: Duration = Duration::from_secs(3);

/// Main tabs of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Meetings,
    Facilitation,
    Todos,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Meetings,
        Tab::Facilitation,
        Tab::Todos,
        Tab::Analytics,
    ];

    /// Stable identifier used by the CLI, config and command bar.
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Meetings => "meetings",
            Tab::Facilitation => "facilitation",
            Tab::Todos => "todos",
            Tab::Analytics => "analytics",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Meetings => "Meetings",
            Tab::Facilitation => "Facilitation",
            Tab::Todos => "Todos",
            Tab::Analytics => "Analytics",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Dashboard => '1',
            Tab::Meetings => '2',
            Tab::Facilitation => '3',
            Tab::Todos => '4',
            Tab::Analytics => '5',
        }
    }

    /// Total mapping from an identifier to a tab. Anything unrecognized,
    /// including an empty or padded string, is the dashboard.
    pub fn from_id(id: &str) -> Tab {
        match id {
            "dashboard" => Tab::Dashboard,
            "meetings" => Tab::Meetings,
            "facilitation" => Tab::Facilitation,
            "todos" => Tab::Todos,
            "analytics" => Tab::Analytics,
            _ => Tab::Dashboard,
        }
    }

    pub fn from_shortcut(ch: char) -> Option<Tab> {
        Tab::ALL.iter().copied().find(|tab| tab.shortcut() == ch)
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }

    pub fn cycle(&self, forward: bool) -> Tab {
        let len = Tab::ALL.len();
        let index = self.index();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Tab::ALL[next]
    }
}

/// Which of the two front ends is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Shell,
    Evaluations,
}

/// The body currently drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    MeetingList,
    MeetingDetail,
    Facilitation,
    Todos,
    Analytics,
    Evaluations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// Tab selection plus the collapsed-menu flag.
#[derive(Debug, Clone)]
pub struct Navigation {
    active_tab: Tab,
    mobile_menu_open: bool,
    menu_cursor: usize,
}

impl Navigation {
    pub fn new(active_tab: Tab) -> Self {
        Self {
            active_tab,
            mobile_menu_open: false,
            menu_cursor: active_tab.index(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        if self.mobile_menu_open {
            self.menu_cursor = self.active_tab.index();
        }
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    pub fn move_menu_cursor(&mut self, forward: bool) {
        self.menu_cursor = crate::modules::step_cursor(self.menu_cursor, Tab::ALL.len(), forward);
    }

    /// Pick an item from the collapsed menu: selects it and closes the menu.
    pub fn choose(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.mobile_menu_open = false;
    }
}

/// Start-up settings resolved from CLI and config.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub initial_tab: Tab,
    pub narrow_width: u16,
    pub ctx: Context,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            initial_tab: Tab::Dashboard,
            narrow_width: DEFAULT_NARROW_WIDTH,
            ctx: Context::default(),
        }
    }
}

#[derive(Debug)]
pub struct App {
    /// Shared context for modules
    pub ctx: Context,
    pub entry: Entry,
    pub nav: Navigation,
    pub summary: DashboardSummary,
    pub meetings: MeetingManagement,
    pub facilitation: Facilitation,
    pub todos: TodoList,
    pub evaluations: EvaluationList,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub narrow_width: u16,
    pub viewport_width: u16,
    pub help_open: bool,
    pub should_quit: bool,
    pending_handoff: Option<Route>,
    pending_copy: Option<String>,
}

impl App {
    pub fn new(fixtures: &dyn FixtureProvider, entry: Entry, options: AppOptions) -> Self {
        Self {
            ctx: options.ctx,
            entry,
            nav: Navigation::new(options.initial_tab),
            summary: fixtures.summary().clone(),
            meetings: MeetingManagement::new(fixtures.meetings().to_vec()),
            facilitation: Facilitation::new(fixtures.agenda().to_vec()),
            todos: TodoList::new(fixtures.todos().to_vec()),
            evaluations: EvaluationList::new(
                fixtures.pending_evaluations().to_vec(),
                fixtures.completed_evaluations().to_vec(),
            ),
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            narrow_width: options.narrow_width,
            viewport_width: u16::MAX,
            help_open: false,
            should_quit: false,
            pending_handoff: None,
            pending_copy: None,
        }
    }

    pub fn shell(fixtures: &dyn FixtureProvider, options: AppOptions) -> Self {
        Self::new(fixtures, Entry::Shell, options)
    }

    pub fn evaluations(fixtures: &dyn FixtureProvider, options: AppOptions) -> Self {
        Self::new(fixtures, Entry::Evaluations, options)
    }

    pub fn active_tab(&self) -> Tab {
        self.nav.active_tab()
    }

    /// The body to draw for the current state.
    pub fn screen(&self) -> Screen {
        if self.entry == Entry::Evaluations {
            return Screen::Evaluations;
        }
        match self.nav.active_tab() {
            Tab::Dashboard => Screen::Dashboard,
            Tab::Meetings => {
                if self.meetings.is_detail() {
                    Screen::MeetingDetail
                } else {
                    Screen::MeetingList
                }
            }
            Tab::Facilitation => Screen::Facilitation,
            Tab::Todos => Screen::Todos,
            Tab::Analytics => Screen::Analytics,
        }
    }

    /// Make `tab` active. Leaving a tab drops that view's local state.
    pub fn select_tab(&mut self, tab: Tab) {
        let previous = self.nav.active_tab();
        if previous != tab {
            self.reset_view(previous);
            debug!(from = previous.id(), to = tab.id(), "tab selected");
        }
        self.nav.set_active_tab(tab);
    }

    /// Select by identifier, falling back to the dashboard for unknown ids.
    pub fn select_tab_id(&mut self, id: &str) {
        self.select_tab(Tab::from_id(id));
    }

    /// Select from the collapsed menu, closing it.
    pub fn choose_menu_item(&mut self, tab: Tab) {
        self.select_tab(tab);
        self.nav.choose(tab);
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        self.select_tab(self.nav.active_tab().cycle(forward));
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.nav.toggle_mobile_menu();
    }

    pub fn set_viewport_width(&mut self, width: u16) {
        self.viewport_width = width;
    }

    pub fn is_narrow(&self) -> bool {
        self.viewport_width < self.narrow_width
    }

    /// The collapsed menu is only drawn, and only takes input, in the narrow
    /// shell layout.
    pub fn menu_visible(&self) -> bool {
        self.entry == Entry::Shell && self.is_narrow() && self.nav.is_mobile_menu_open()
    }

    fn reset_view(&mut self, tab: Tab) {
        match tab {
            Tab::Meetings => self.meetings.reset(),
            Tab::Facilitation => self.facilitation.reset(),
            Tab::Todos => self.todos.reset(),
            Tab::Dashboard | Tab::Analytics => {}
        }
    }

    /// Leave the meeting detail view, if shown.
    pub fn back(&mut self) -> bool {
        self.screen() == Screen::MeetingDetail && self.meetings.back()
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        self.exit_command();
        if input.is_empty() {
            return;
        }
        self.command.last = Some(input.clone());
        let action = self.execute_command(&parse_command(&input));
        self.apply_action(action);
    }

    /// Route a key to the module behind the current screen.
    pub fn handle_module_key(&mut self, key: KeyEvent) {
        let screen = self.screen();
        let ctx = &mut self.ctx;
        let action = match screen {
            Screen::MeetingList | Screen::MeetingDetail => self.meetings.handle_key(key, ctx),
            Screen::Facilitation => self.facilitation.handle_key(key, ctx),
            Screen::Todos => self.todos.handle_key(key, ctx),
            Screen::Evaluations => self.evaluations.handle_key(key, ctx),
            Screen::Dashboard | Screen::Analytics => Action::None,
        };
        self.apply_action(action);
    }

    pub fn take_handoff(&mut self) -> Option<Route> {
        self.pending_handoff.take()
    }

    pub fn take_copy_request(&mut self) -> Option<String> {
        self.pending_copy.take()
    }
}

impl App {
    /// Execute a parsed command
    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Go(_) | Command::Menu if self.entry != Entry::Shell => Action::Notify(
                "Tabs are only available in the shell".to_string(),
                NotifyLevel::Warn,
            ),
            Command::Go(tab) => Action::Navigate(NavigateTarget::Tab(*tab)),
            Command::Back => Action::Navigate(NavigateTarget::Back),
            Command::Menu => {
                self.toggle_mobile_menu();
                Action::None
            }
            Command::Help => {
                self.help_open = true;
                Action::None
            }
            Command::Quit => Action::Quit,
            Command::Unknown(s) => {
                Action::Notify(format!("Unknown command: {}", s), NotifyLevel::Warn)
            }
        }
    }

    /// Apply an action returned by a command or module
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(NavigateTarget::Tab(tab)) => self.select_tab(tab),
            Action::Navigate(NavigateTarget::Back) => {
                if !self.back() {
                    self.set_status("Nothing to go back to", StatusLevel::Warn);
                }
            }
            Action::Handoff(route) => {
                let url = route.to_url(&self.ctx.base_url);
                info!(%url, "hand-off requested");
                self.set_status(format!("Open {url}"), StatusLevel::Info);
                self.pending_handoff = Some(route);
            }
            Action::Copy(text) => {
                self.pending_copy = Some(text);
            }
            Action::Notify(msg, level) => {
                if level != NotifyLevel::Info {
                    warn!(%msg, "notification");
                }
                self.set_status(msg, level.into());
            }
            Action::Quit => self.should_quit = true,
        }
    }
}
