//! Full details for one room, opened by id from the request list or the map.

use crate::api::Room;
use crate::components::room_summary::detail_lines;
use crate::components::{Footer, Header, MessageBox};
use crate::icons::Icons;
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::services::{FetchSlot, Loadable};
use crate::styles::theme;
use crate::utils::{create_standard_layout, short_id};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use tracing::{info, warn};

pub struct RoomDetailScreen {
    room_id: Option<String>,
    room: FetchSlot<Room>,
    icons: Icons,
    scroll: u16,
}

impl Default for RoomDetailScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomDetailScreen {
    pub fn new() -> Self {
        Self {
            room_id: None,
            room: FetchSlot::new("room detail"),
            icons: Icons::new(),
            scroll: 0,
        }
    }

    /// Choose the room shown on the next `on_enter`
    pub fn set_room_id(&mut self, room_id: impl Into<String>) {
        self.room_id = Some(room_id.into());
        self.scroll = 0;
    }

    pub fn room_id(&self) -> Option<&str> {
        self.room_id.as_deref()
    }

    pub fn state(&self) -> &Loadable<Room> {
        self.room.state()
    }

    pub fn load(&mut self, ctx: &ScreenContext) {
        let Some(room_id) = self.room_id.clone() else {
            warn!("Room detail opened without a room id");
            return;
        };
        let api = ctx.api.clone();
        info!("Loading room {}", room_id);
        self.room
            .start(ctx.runtime, async move { api.room(&room_id).await });
    }
}

impl Screen for RoomDetailScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        frame.render_widget(Clear, area);
        let t = theme();
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header, content, footer) = create_standard_layout(area, 4, 2);
        let description = match &self.room_id {
            Some(id) => format!("Room #{}", short_id(id)),
            None => "No room selected".to_string(),
        };
        Header::render(frame, header, "Room Details", &description)?;

        let keymap = ctx.keymap();
        let footer_text = match self.room.state() {
            Loadable::Idle if self.room_id.is_none() => {
                MessageBox::render_empty(frame, content, "No room selected")?;
                keymap.footer(&[(Action::Cancel, "Back")])
            }
            Loadable::Idle | Loadable::Loading => {
                MessageBox::render_loading(frame, content, "room details")?;
                keymap.footer(&[(Action::Cancel, "Back")])
            }
            Loadable::Errored(message) => {
                let retry_key = keymap.get_key_display_for_action(Action::Refresh);
                MessageBox::render_error(frame, content, message, &retry_key)?;
                keymap.footer(&[(Action::Refresh, "Retry"), (Action::Cancel, "Back")])
            }
            Loadable::Populated(room) => {
                let lines = detail_lines(room, &self.icons);
                self.scroll = self.scroll.min((lines.len() as u16).saturating_sub(1));
                let body = Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((self.scroll, 0))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(t.border_focused_style())
                            .padding(Padding::new(2, 2, 1, 0)),
                    );
                frame.render_widget(body, content);
                format!(
                    "Scroll: {} | {}",
                    keymap.navigation_display(),
                    keymap.footer(&[(Action::Refresh, "Reload"), (Action::Cancel, "Back")])
                )
            }
        };

        Footer::render(frame, footer, &footer_text)?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(action) = ctx.action_for(&event) else {
            return Ok(ScreenAction::None);
        };

        Ok(match action {
            Action::Refresh => {
                self.load(ctx);
                ScreenAction::None
            }
            Action::Confirm if self.room.state().is_errored() => {
                self.load(ctx);
                ScreenAction::None
            }
            Action::MoveUp | Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                ScreenAction::None
            }
            Action::MoveDown | Action::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1);
                ScreenAction::None
            }
            Action::GoToTop => {
                self.scroll = 0;
                ScreenAction::None
            }
            Action::Cancel => ScreenAction::Back,
            Action::Quit => ScreenAction::Quit,
            Action::Help => ScreenAction::ShowHelp,
            _ => ScreenAction::None,
        })
    }

    fn tick(&mut self) -> bool {
        self.room.poll()
    }

    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        self.load(ctx);
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.room.reset();
        self.scroll = 0;
        Ok(())
    }
}
