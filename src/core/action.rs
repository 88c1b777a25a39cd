//! Actions that modules can return to communicate with the app

use super::Route;

/// Actions returned by modules and commands to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Navigate to a route
    Navigate(Route),

    /// Go back to the previous route
    Back,

    /// Copy text to the system clipboard
    Copy(String),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Select a dashboard tab by index
    SelectTab(usize),

    /// Re-read the wallet source
    Reload,

    /// Open help popup
    Help,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
