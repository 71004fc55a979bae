//! Actions that modules return to the app

use crate::app::Tab;
use crate::core::Route;

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action needed
    None,

    /// Navigate within the shell
    Navigate(NavigateTarget),

    /// Leave the current view for an external one
    Handoff(Route),

    /// Copy text to the system clipboard
    Copy(String),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

/// Navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateTarget {
    /// Switch the active tab
    Tab(Tab),
    /// Leave the current detail view
    Back,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
