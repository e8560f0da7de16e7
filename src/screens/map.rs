//! Map of rooms with a detail modal.
//!
//! Rooms arrive as pins from the caller. Each valid pin becomes a marker and
//! the viewport is fitted whenever the set changes. Opening a marker fetches
//! that room into a modal; only the latest selection may fill the modal.

use crate::api::{Room, RoomPin};
use crate::components::room_summary::summary_lines;
use crate::components::{Footer, Header, MessageBox};
use crate::geo::{Marker, MarkerLayer};
use crate::icons::{Icon, Icons};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::services::{FetchSlot, Loadable};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{create_split_layout, create_standard_layout, short_id, ListStateExt};
use crate::widgets::{Dialog, DialogVariant};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::canvas::{Canvas, Map as WorldMap, MapResolution};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState};
use tracing::{debug, info};

pub struct MapScreen {
    layer: MarkerLayer,
    list_state: ListState,
    /// Room whose detail modal is open
    modal_room: Option<String>,
    detail: FetchSlot<Room>,
    icons: Icons,
}

impl Default for MapScreen {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MapScreen {
    pub fn new(pins: Vec<RoomPin>) -> Self {
        let mut screen = Self {
            layer: MarkerLayer::new(),
            list_state: ListState::default(),
            modal_room: None,
            detail: FetchSlot::new("map room detail"),
            icons: Icons::new(),
        };
        screen.set_rooms(pins);
        screen
    }

    /// Replace the room set; returns `true` if markers were regenerated
    pub fn set_rooms(&mut self, pins: Vec<RoomPin>) -> bool {
        let changed = self.layer.set_rooms(pins);
        if changed {
            info!("Map showing {} markers", self.layer.markers().len());
            self.list_state.select(None);
            self.list_state.clamp_to(self.layer.markers().len());
            self.close_modal();
        }
        changed
    }

    pub fn markers(&self) -> &[Marker] {
        self.layer.markers()
    }

    pub fn fit_count(&self) -> usize {
        self.layer.fit_count()
    }

    pub fn viewport(&self) -> crate::geo::Viewport {
        self.layer.viewport()
    }

    pub fn selected_marker(&self) -> Option<&Marker> {
        self.layer.marker(self.list_state.selected()?)
    }

    /// Room id of the open modal, kept while its fetch fails
    pub fn modal_room_id(&self) -> Option<&str> {
        self.modal_room.as_deref()
    }

    pub fn detail_state(&self) -> &Loadable<Room> {
        self.detail.state()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_room.is_some()
    }

    /// Select the marker at `index` and open its detail modal
    pub fn open_marker(&mut self, index: usize, ctx: &ScreenContext) {
        let Some(marker) = self.layer.marker(index) else {
            return;
        };
        let room_id = marker.room_id.clone();
        self.list_state.select(Some(index));
        info!("Opening map detail for room {}", room_id);
        self.modal_room = Some(room_id);
        self.fetch_detail(ctx);
    }

    /// (Re)issue the detail request for the modal's room
    fn fetch_detail(&mut self, ctx: &ScreenContext) {
        let Some(room_id) = self.modal_room.clone() else {
            return;
        };
        let api = ctx.api.clone();
        self.detail
            .start(ctx.runtime, async move { api.room(&room_id).await });
    }

    fn close_modal(&mut self) {
        if let Some(room_id) = self.modal_room.take() {
            debug!("Closing map detail for room {}", room_id);
        }
        self.detail.reset();
    }

    fn step_selection(&mut self, forward: bool) {
        let total = self.layer.markers().len();
        if forward {
            self.list_state.select_next_wrap(total);
        } else {
            self.list_state.select_previous_wrap(total);
        }
    }

    fn handle_modal_action(&mut self, action: Action, ctx: &ScreenContext) -> ScreenAction {
        match action {
            Action::Cancel => {
                self.close_modal();
                ScreenAction::None
            }
            Action::Refresh if !self.detail.state().is_loading() => {
                self.fetch_detail(ctx);
                ScreenAction::None
            }
            Action::Confirm if self.detail.state().is_errored() => {
                self.fetch_detail(ctx);
                ScreenAction::None
            }
            Action::Confirm => {
                let Some(room_id) = self.detail.state().value().map(|r| r.room_id.clone()) else {
                    return ScreenAction::None;
                };
                self.close_modal();
                ScreenAction::OpenRoom(room_id)
            }
            // Neighbouring marker: replaces the modal contents
            Action::MoveLeft | Action::MoveUp | Action::MoveRight | Action::MoveDown => {
                let forward = matches!(action, Action::MoveRight | Action::MoveDown);
                self.step_selection(forward);
                if let Some(index) = self.list_state.selected() {
                    self.open_marker(index, ctx);
                }
                ScreenAction::None
            }
            Action::Quit => ScreenAction::Quit,
            Action::Help => ScreenAction::ShowHelp,
            _ => ScreenAction::None,
        }
    }

    fn render_canvas(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let viewport = self.layer.viewport();
        let selected = self.list_state.selected();
        let markers = self.layer.markers();
        let marker_icon = self.icons.get(Icon::Marker);
        let selected_icon = self.icons.get(Icon::MarkerSelected);

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(t.border_focused_style())
                    .title(format!(" {} Map ", self.icons.get(Icon::Map)))
                    .title_style(t.title_style()),
            )
            .marker(symbols::Marker::Braille)
            .x_bounds(viewport.x_bounds())
            .y_bounds(viewport.y_bounds())
            .paint(move |ctx| {
                ctx.draw(&WorldMap {
                    color: t.text_muted,
                    resolution: MapResolution::High,
                });
                ctx.layer();
                for (i, marker) in markers.iter().enumerate() {
                    if !viewport.contains(marker.latitude, marker.longitude) {
                        continue;
                    }
                    let span = if selected == Some(i) {
                        Span::styled(
                            format!("{} {}", selected_icon, marker.caption()),
                            t.highlight_style(),
                        )
                    } else {
                        Span::styled(marker_icon.to_string(), t.error_style())
                    };
                    ctx.print(marker.longitude, marker.latitude, Line::from(span));
                }
            });
        frame.render_widget(canvas, area);
    }

    fn render_room_list(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let items: Vec<ListItem> = self
            .layer
            .markers()
            .iter()
            .map(|m| {
                ListItem::new(vec![
                    Line::from(Span::styled(m.caption(), t.text_style())),
                    Line::from(Span::styled(
                        format!("  {:.4}, {:.4}", m.latitude, m.longitude),
                        t.muted_style(),
                    )),
                ])
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(t.border_style())
                    .title(format!(" Rooms ({}) ", self.layer.markers().len()))
                    .title_style(t.title_style()),
            )
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_modal(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let Some(room_id) = self.modal_room.as_deref() else {
            return;
        };
        let t = theme();
        let keymap = ctx.keymap();
        let title = format!("Room #{}", short_id(room_id));

        let (content, footer, variant) = match self.detail.state() {
            Loadable::Idle | Loadable::Loading => (
                Text::from(Line::from(Span::styled(
                    "Loading room details...",
                    t.muted_style(),
                ))),
                keymap.footer(&[(Action::Cancel, "Close")]),
                DialogVariant::Default,
            ),
            Loadable::Errored(message) => (
                Text::from(vec![
                    Line::from(Span::styled(message.clone(), t.error_style())),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Could not load this room. You can try again.",
                        t.text_style(),
                    )),
                ]),
                keymap.footer(&[(Action::Refresh, "Retry"), (Action::Cancel, "Close")]),
                DialogVariant::Error,
            ),
            Loadable::Populated(room) => (
                Text::from(summary_lines(room, &self.icons)),
                keymap.footer(&[
                    (Action::Confirm, "View details"),
                    (Action::Refresh, "Reload"),
                    (Action::Cancel, "Close"),
                ]),
                DialogVariant::Default,
            ),
        };

        frame.render_widget(
            Dialog::new(&title, content)
                .width(60)
                .height(60)
                .variant(variant)
                .footer(&footer),
            area,
        );
    }
}

impl Screen for MapScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        frame.render_widget(Clear, area);
        let t = theme();
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header, content, footer) = create_standard_layout(area, 4, 2);
        Header::render(
            frame,
            header,
            "Room Map",
            "Pick a marker to see the room's price, address and photos.",
        )?;

        if self.layer.markers().is_empty() {
            MessageBox::render_empty(frame, content, "There are no rooms to show on the map")?;
        } else {
            let (map_area, list_area) = create_split_layout(content, 70);
            self.render_canvas(frame, map_area);
            self.render_room_list(frame, list_area);
        }

        let keymap = ctx.keymap();
        let footer_text = format!(
            "Select: {}/{} | Zoom: {}/{} | {}",
            keymap.get_key_display_for_action(Action::MoveLeft),
            keymap.get_key_display_for_action(Action::MoveRight),
            keymap.get_key_display_for_action(Action::ZoomIn),
            keymap.get_key_display_for_action(Action::ZoomOut),
            keymap.footer(&[(Action::Confirm, "Open"), (Action::Cancel, "Back")]),
        );
        Footer::render(frame, footer, &footer_text)?;

        self.render_modal(frame, area, ctx);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(action) = ctx.action_for(&event) else {
            return Ok(ScreenAction::None);
        };

        if self.is_modal_open() {
            return Ok(self.handle_modal_action(action, ctx));
        }

        Ok(match action {
            Action::MoveRight | Action::MoveDown => {
                self.step_selection(true);
                ScreenAction::None
            }
            Action::MoveLeft | Action::MoveUp => {
                self.step_selection(false);
                ScreenAction::None
            }
            Action::Confirm => {
                if let Some(index) = self.list_state.selected() {
                    self.open_marker(index, ctx);
                }
                ScreenAction::None
            }
            Action::ZoomIn => {
                self.layer.zoom_in();
                ScreenAction::None
            }
            Action::ZoomOut => {
                self.layer.zoom_out();
                ScreenAction::None
            }
            Action::Cancel => ScreenAction::Back,
            Action::Quit => ScreenAction::Quit,
            Action::Help => ScreenAction::ShowHelp,
            _ => ScreenAction::None,
        })
    }

    fn tick(&mut self) -> bool {
        self.detail.poll()
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.close_modal();
        Ok(())
    }
}
