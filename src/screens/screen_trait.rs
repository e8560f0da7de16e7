//! Screen trait and associated types.
//!
//! Screens own their state, turn input into a [`ScreenAction`] instead of
//! mutating the router, and read shared resources through context objects.

use crate::api::RentalApi;
use crate::config::Config;
use crate::keymap::{Action, Keymap};
use crate::ui::Screen as ScreenId;
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Read-only resources needed for rendering.
pub struct RenderContext<'a> {
    pub config: &'a Config,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.config.keymap
    }
}

/// Resources for event handling and background fetches.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
    /// Runtime fetches are spawned on
    pub runtime: &'a Handle,
    pub api: &'a Arc<dyn RentalApi>,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, runtime: &'a Handle, api: &'a Arc<dyn RentalApi>) -> Self {
        Self {
            config,
            runtime,
            api,
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.config.keymap
    }

    /// Map a key press to an action; releases and repeats of other kinds are ignored
    pub fn action_for(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.keymap().get_action(key.code, key.modifiers)
            }
            _ => None,
        }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScreenAction {
    /// Stay on the current screen.
    #[default]
    None,
    /// Navigate to a different screen.
    Navigate(ScreenId),
    /// Open the room detail screen for a room id.
    OpenRoom(String),
    /// Return to the previous screen.
    Back,
    Quit,
    /// Show a toast notification.
    ShowToast(Toast),
    /// Open help overlay.
    ShowHelp,
}

/// Trait for screen controllers.
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(match ctx.action_for(&event) {
///             Some(Action::Cancel) => ScreenAction::Back,
///             _ => ScreenAction::None,
///         })
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and return what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Poll background work. Returns `true` if visible state changed.
    fn tick(&mut self) -> bool {
        false
    }

    /// Called when the screen is entered (navigated to).
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called when the screen is exited (navigated away from).
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
