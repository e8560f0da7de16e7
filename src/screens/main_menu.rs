//! Main menu screen controller.
//!
//! Entry point of the TUI, listing the screens a tenant can open.

use crate::components::{Footer, Header};
use crate::icons::{Icon, Icons};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::ui::Screen as ScreenId;
use crate::utils::{create_split_layout, create_standard_layout};
use crate::widgets::{Menu, MenuItem as MenuWidgetItem, MenuState};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

/// Menu entries in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    RentalRequests,
    RoomMap,
    LivingHarmony,
    Safety,
}

impl MenuItem {
    pub fn all() -> [MenuItem; 4] {
        [
            MenuItem::RentalRequests,
            MenuItem::RoomMap,
            MenuItem::LivingHarmony,
            MenuItem::Safety,
        ]
    }

    pub fn from_index(index: usize) -> Option<MenuItem> {
        Self::all().get(index).copied()
    }

    pub fn icon(&self) -> Icon {
        match self {
            MenuItem::RentalRequests => Icon::Requests,
            MenuItem::RoomMap => Icon::Map,
            MenuItem::LivingHarmony => Icon::Handshake,
            MenuItem::Safety => Icon::Shield,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            MenuItem::RentalRequests => "My Rental Requests",
            MenuItem::RoomMap => "Room Map",
            MenuItem::LivingHarmony => "Living in Harmony",
            MenuItem::Safety => "Safety",
        }
    }

    pub fn target(&self) -> ScreenId {
        match self {
            MenuItem::RentalRequests => ScreenId::RequestList,
            MenuItem::RoomMap => ScreenId::Map,
            MenuItem::LivingHarmony => ScreenId::LivingHarmony,
            MenuItem::Safety => ScreenId::Safety,
        }
    }

    fn explanation(&self) -> Text<'static> {
        let t = theme();
        let (heading, body) = match self {
            MenuItem::RentalRequests => (
                "Your rental requests",
                "See every room you asked to rent, when you want to move in, for how long, and whether the landlord approved it. Open a request to see the room.",
            ),
            MenuItem::RoomMap => (
                "Rooms on the map",
                "Browse rooms by location. Select a marker to see its price, address and photo, then open the full details.",
            ),
            MenuItem::LivingHarmony => (
                "Living in harmony",
                "Tips for sharing a home: house rules, quiet hours and keeping common spaces clean.",
            ),
            MenuItem::Safety => (
                "Safety",
                "Door, key and fire safety, plus the emergency numbers to call.",
            ),
        };
        Text::from(vec![
            Line::from(Span::styled(heading, t.title_style())),
            Line::from(""),
            Line::from(Span::styled(body, t.text_style())),
        ])
    }
}

pub struct MainMenuScreen {
    menu_state: MenuState,
    icons: Icons,
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenuScreen {
    pub fn new() -> Self {
        let mut menu_state = MenuState::new();
        menu_state.select(Some(0));
        Self {
            menu_state,
            icons: Icons::new(),
        }
    }

    pub fn selected_item(&self) -> MenuItem {
        self.menu_state
            .selected()
            .and_then(MenuItem::from_index)
            .unwrap_or(MenuItem::RentalRequests)
    }

    pub fn move_up(&mut self) {
        let total = MenuItem::all().len();
        let current = self.menu_state.selected().unwrap_or(0);
        self.menu_state.select(Some((current + total - 1) % total));
    }

    pub fn move_down(&mut self) {
        let total = MenuItem::all().len();
        let current = self.menu_state.selected().unwrap_or(0);
        self.menu_state.select(Some((current + 1) % total));
    }
}

impl Screen for MainMenuScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        frame.render_widget(Clear, area);
        let t = theme();
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header, content, footer) = create_standard_layout(area, 4, 2);
        Header::render(
            frame,
            header,
            "roomrent",
            "Track your rental requests, find rooms on the map, and settle in safely.",
        )?;

        let (left, right) = create_split_layout(content, 50);

        let items = MenuItem::all()
            .iter()
            .map(|item| MenuWidgetItem::new(self.icons.get(item.icon()), item.text(), t.text))
            .collect();
        let menu_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(" Menu ")
            .title_style(t.title_style())
            .title_alignment(Alignment::Center);
        let menu_inner = menu_block.inner(left);
        frame.render_widget(menu_block, left);
        frame.render_stateful_widget(Menu::new(items), menu_inner, &mut self.menu_state);

        let explanation = Paragraph::new(self.selected_item().explanation())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(t.border_style())
                    .padding(Padding::new(2, 2, 1, 1)),
            );
        frame.render_widget(explanation, right);

        let keymap = ctx.keymap();
        let footer_text = keymap.footer_with_navigation(&[
            (Action::Confirm, "Open"),
            (Action::Help, "Help"),
            (Action::Quit, "Quit"),
        ]);
        Footer::render(frame, footer, &footer_text)?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(action) = ctx.action_for(&event) else {
            return Ok(ScreenAction::None);
        };

        Ok(match action {
            Action::MoveUp | Action::PrevTab => {
                self.move_up();
                ScreenAction::None
            }
            Action::MoveDown | Action::NextTab => {
                self.move_down();
                ScreenAction::None
            }
            Action::Confirm => ScreenAction::Navigate(self.selected_item().target()),
            Action::Quit | Action::Cancel => ScreenAction::Quit,
            Action::Help => ScreenAction::ShowHelp,
            _ => ScreenAction::None,
        })
    }
}
