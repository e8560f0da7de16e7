//! Semantic actions triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move selection up in a list
    MoveUp,
    /// Move selection down in a list
    MoveDown,
    /// Previous marker on the map
    MoveLeft,
    /// Next marker on the map
    MoveRight,
    PageUp,
    PageDown,
    GoToTop,
    GoToEnd,

    // ============ Selection ============
    /// Open / confirm (Enter)
    Confirm,
    /// Close / go back (Esc)
    Cancel,

    // ============ Global ============
    Quit,
    Help,

    // ============ Screen actions ============
    /// Reload the current screen, or retry after an error
    Refresh,
    /// Focus the next button
    NextTab,
    /// Focus the previous button
    PrevTab,
    /// Scroll text up
    ScrollUp,
    /// Scroll text down
    ScrollDown,
    /// Zoom the map in
    ZoomIn,
    /// Zoom the map out
    ZoomOut,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Previous marker",
            Action::MoveRight => "Next marker",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Confirm => "Open / confirm",
            Action::Cancel => "Close / go back",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::Refresh => "Reload / retry",
            Action::NextTab => "Next button",
            Action::PrevTab => "Previous button",
            Action::ScrollUp => "Scroll up",
            Action::ScrollDown => "Scroll down",
            Action::ZoomIn => "Zoom in",
            Action::ZoomOut => "Zoom out",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::PageUp
            | Action::PageDown
            | Action::GoToTop
            | Action::GoToEnd => "Navigation",

            Action::Confirm | Action::Cancel => "Selection",

            Action::Quit | Action::Help => "Global",

            Action::Refresh | Action::NextTab | Action::PrevTab => "Actions",

            Action::ScrollUp | Action::ScrollDown => "Scroll",

            Action::ZoomIn | Action::ZoomOut => "Map",
        }
    }
}
