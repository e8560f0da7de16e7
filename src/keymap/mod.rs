//! Keymap configuration module
//!
//! Customizable keyboard shortcuts with preset keymaps (standard, vim, emacs)
//! and per-action overrides from the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// All bindings for display in help.
    ///
    /// An overridden action loses all of its preset bindings.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// Display string for an action (e.g., Action::Refresh -> "R")
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(KeyBinding::display)
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Display string for up/down navigation, e.g. "↑/↓"
    pub fn navigation_display(&self) -> String {
        format!(
            "{}/{}",
            self.get_key_display_for_action(Action::MoveUp),
            self.get_key_display_for_action(Action::MoveDown)
        )
    }

    /// Build a footer line like "Open: Enter | Back: Esc" from `(action, label)` pairs
    pub fn footer(&self, hints: &[(Action, &str)]) -> String {
        hints
            .iter()
            .map(|(action, label)| format!("{}: {}", label, self.get_key_display_for_action(*action)))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Footer for list screens: navigation first, then the given hints
    pub fn footer_with_navigation(&self, hints: &[(Action, &str)]) -> String {
        let rest = self.footer(hints);
        if rest.is_empty() {
            format!("Navigate: {}", self.navigation_display())
        } else {
            format!("Navigate: {} | {}", self.navigation_display(), rest)
        }
    }
}
