//! The signed-in customer's rental requests.
//!
//! Fetches the list when entered, shows one card per request, and opens the
//! room detail screen for the selected request. A failed fetch replaces the
//! list with the error and a retry key.

use crate::api::RentalRequest;
use crate::components::{Footer, Header, MessageBox, RequestCard};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::services::{FetchSlot, Loadable};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{create_standard_layout, ListStateExt};
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListState};
use tracing::{info, warn};

/// Text shown when the backend returns an empty list
pub const EMPTY_STATE_TEXT: &str = "You have no rental requests yet";

pub struct RequestListScreen {
    requests: FetchSlot<Vec<RentalRequest>>,
    list_state: ListState,
}

impl Default for RequestListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestListScreen {
    pub fn new() -> Self {
        Self {
            requests: FetchSlot::new("rental requests"),
            list_state: ListState::default(),
        }
    }

    pub fn state(&self) -> &Loadable<Vec<RentalRequest>> {
        self.requests.state()
    }

    pub fn selected(&self) -> Option<&RentalRequest> {
        let index = self.list_state.selected()?;
        self.requests.state().value()?.get(index)
    }

    /// Issue the request (initial load, refresh and retry all go through here)
    pub fn load(&mut self, ctx: &ScreenContext) {
        let api = ctx.api.clone();
        let generation = self
            .requests
            .start(ctx.runtime, async move { api.rental_requests().await });
        info!("Loading rental requests (#{})", generation);
        self.list_state.select(None);
    }

    fn open_selected(&self) -> ScreenAction {
        let Some(request) = self.selected() else {
            return ScreenAction::None;
        };
        if request.room_id.trim().is_empty() {
            warn!("Request {} has no room id", request.room_request_id);
            return ScreenAction::ShowToast(Toast::error("This request has no room attached"));
        }
        info!(
            "Opening room {} from request {}",
            request.room_id, request.room_request_id
        );
        ScreenAction::OpenRoom(request.room_id.clone())
    }

    fn item_count(&self) -> usize {
        self.requests.state().value().map_or(0, Vec::len)
    }
}

impl Screen for RequestListScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        frame.render_widget(Clear, area);
        let t = theme();
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header, content, footer) = create_standard_layout(area, 4, 2);
        Header::render(
            frame,
            header,
            "My Rental Requests",
            "Rooms you have asked to rent and what the landlord decided.",
        )?;

        let keymap = ctx.keymap();
        let retry_key = keymap.get_key_display_for_action(Action::Refresh);
        let footer_text = match self.requests.state() {
            Loadable::Idle | Loadable::Loading => {
                MessageBox::render_loading(frame, content, "your rental requests")?;
                keymap.footer(&[(Action::Cancel, "Back")])
            }
            Loadable::Errored(message) => {
                MessageBox::render_error(frame, content, message, &retry_key)?;
                keymap.footer(&[(Action::Refresh, "Retry"), (Action::Cancel, "Back")])
            }
            Loadable::Populated(requests) if requests.is_empty() => {
                MessageBox::render_empty(frame, content, EMPTY_STATE_TEXT)?;
                keymap.footer(&[(Action::Refresh, "Refresh"), (Action::Cancel, "Back")])
            }
            Loadable::Populated(requests) => {
                let items: Vec<_> = requests
                    .iter()
                    .map(|r| RequestCard::new(r).into_list_item())
                    .collect();
                let list = List::new(items)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(t.border_focused_style())
                            .title(format!(" Requests ({}) ", requests.len()))
                            .title_style(t.title_style()),
                    )
                    .highlight_style(t.highlight_style())
                    .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
                frame.render_stateful_widget(list, content, &mut self.list_state);
                keymap.footer_with_navigation(&[
                    (Action::Confirm, "Open room"),
                    (Action::Refresh, "Refresh"),
                    (Action::Cancel, "Back"),
                ])
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
            Action::Confirm if self.requests.state().is_errored() => {
                self.load(ctx);
                ScreenAction::None
            }
            Action::Confirm => self.open_selected(),
            Action::Cancel => ScreenAction::Back,
            Action::Quit => ScreenAction::Quit,
            Action::Help => ScreenAction::ShowHelp,
            other => {
                let total = self.item_count();
                self.list_state.navigate(other, total);
                ScreenAction::None
            }
        })
    }

    fn tick(&mut self) -> bool {
        if !self.requests.poll() {
            return false;
        }
        let total = self.item_count();
        self.list_state.clamp_to(total);
        true
    }

    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        self.load(ctx);
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.requests.reset();
        self.list_state = ListState::default();
        Ok(())
    }
}
