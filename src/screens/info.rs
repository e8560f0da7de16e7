//! Static guidance screens: living in harmony with housemates, and safety.
//!
//! No network access. Each screen shows sectioned text with icons and a
//! row of action buttons. Emergency buttons surface the number in a toast;
//! the checklist button is intentionally inert.

use crate::components::{Footer, Header};
use crate::icons::{Icon, Icons};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::create_standard_layout;
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::Event;
use indoc::indoc;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use tracing::{debug, info};

/// One titled block of guidance text
#[derive(Debug, Clone, PartialEq)]
pub struct InfoSection {
    pub icon: Icon,
    pub heading: &'static str,
    pub body: &'static str,
}

/// Button at the bottom of an info screen
#[derive(Debug, Clone, PartialEq)]
pub enum InfoAction {
    /// Show the number to dial
    EmergencyCall {
        label: &'static str,
        number: &'static str,
    },
    /// Placeholder checklist; selecting it does nothing
    Checklist { label: &'static str },
}

impl InfoAction {
    pub fn label(&self) -> String {
        match self {
            InfoAction::EmergencyCall { label, number } => format!("{} {}", label, number),
            InfoAction::Checklist { label } => label.to_string(),
        }
    }

    fn icon(&self) -> Icon {
        match self {
            InfoAction::EmergencyCall { .. } => Icon::Phone,
            InfoAction::Checklist { .. } => Icon::Checklist,
        }
    }
}

/// Everything an info screen displays
#[derive(Debug, Clone, PartialEq)]
pub struct InfoContent {
    pub title: &'static str,
    pub intro: &'static str,
    pub sections: Vec<InfoSection>,
    pub actions: Vec<InfoAction>,
}

/// Guidance for sharing a home with other tenants
pub fn living_harmony() -> InfoContent {
    InfoContent {
        title: "Living in Harmony",
        intro: "A few habits that keep shared homes friendly for everyone.",
        sections: vec![
            InfoSection {
                icon: Icon::Handshake,
                heading: "Respect your housemates",
                body: indoc! {"
                    Agree on house rules early and write them down.
                    Ask before borrowing anything, and return it promptly.
                    Raise problems calmly and in person, not through notes.
                "},
            },
            InfoSection {
                icon: Icon::Quiet,
                heading: "Quiet hours",
                body: indoc! {"
                    Keep noise down between 22:00 and 06:00.
                    Use headphones for music and calls late at night.
                    Let neighbours know in advance if you are hosting guests.
                "},
            },
            InfoSection {
                icon: Icon::Cleaning,
                heading: "Shared spaces",
                body: indoc! {"
                    Clean up the kitchen right after cooking.
                    Take turns with bins and common-area cleaning.
                    Label your food and clear out the fridge weekly.
                "},
            },
        ],
        actions: vec![
            InfoAction::EmergencyCall {
                label: "Police",
                number: "113",
            },
            InfoAction::Checklist {
                label: "House rules checklist",
            },
        ],
    }
}

/// Safety guidance and emergency numbers
pub fn safety() -> InfoContent {
    InfoContent {
        title: "Safety",
        intro: "Stay safe in your new room. Save these numbers before you need them.",
        sections: vec![
            InfoSection {
                icon: Icon::Lock,
                heading: "Doors and keys",
                body: indoc! {"
                    Lock your door and windows whenever you go out.
                    Never lend your key or share gate codes with strangers.
                    Report lost keys to the landlord the same day.
                "},
            },
            InfoSection {
                icon: Icon::Fire,
                heading: "Fire safety",
                body: indoc! {"
                    Do not overload power strips or leave chargers running overnight.
                    Know where the nearest exit and fire extinguisher are.
                    Never leave cooking unattended.
                "},
            },
            InfoSection {
                icon: Icon::Shield,
                heading: "In an emergency",
                body: indoc! {"
                    Get yourself to safety first, then call for help.
                    Give your full address, including the room number.
                    Tell the landlord once everyone is safe.
                "},
            },
        ],
        actions: vec![
            InfoAction::EmergencyCall {
                label: "Police",
                number: "113",
            },
            InfoAction::EmergencyCall {
                label: "Fire",
                number: "114",
            },
            InfoAction::EmergencyCall {
                label: "Ambulance",
                number: "115",
            },
            InfoAction::Checklist {
                label: "Safety checklist",
            },
        ],
    }
}

/// Screen rendering one [`InfoContent`]
pub struct InfoScreen {
    content: InfoContent,
    icons: Icons,
    scroll: u16,
    max_scroll: u16,
    focused_action: usize,
}

impl InfoScreen {
    pub fn new(content: InfoContent) -> Self {
        Self {
            content,
            icons: Icons::new(),
            scroll: 0,
            max_scroll: 0,
            focused_action: 0,
        }
    }

    pub fn with_icons(mut self, icons: Icons) -> Self {
        self.icons = icons;
        self
    }

    pub fn content(&self) -> &InfoContent {
        &self.content
    }

    pub fn focused_action(&self) -> Option<&InfoAction> {
        self.content.actions.get(self.focused_action)
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        let t = theme();
        let mut lines = Vec::new();
        for (i, section) in self.content.sections.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", self.icons.get(section.icon)), t.heading_style()),
                Span::styled(section.heading, t.heading_style()),
            ]));
            for text in section.body.lines() {
                lines.push(Line::from(vec![
                    Span::styled("  • ", t.muted_style()),
                    Span::styled(text, t.text_style()),
                ]));
            }
        }
        lines
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll as i32);
        self.scroll = next as u16;
    }

    fn focus_next(&mut self) {
        let total = self.content.actions.len();
        if total > 0 {
            self.focused_action = (self.focused_action + 1) % total;
        }
    }

    fn focus_previous(&mut self) {
        let total = self.content.actions.len();
        if total > 0 {
            self.focused_action = (self.focused_action + total - 1) % total;
        }
    }

    fn trigger_focused(&self) -> ScreenAction {
        match self.focused_action() {
            Some(InfoAction::EmergencyCall { label, number }) => {
                info!("{}: emergency contact {} ({})", self.content.title, label, number);
                ScreenAction::ShowToast(Toast::info(format!("Call {}: {}", label, number)))
            }
            Some(InfoAction::Checklist { label }) => {
                debug!("{}: '{}' selected (no action)", self.content.title, label);
                ScreenAction::None
            }
            None => ScreenAction::None,
        }
    }

    fn render_actions(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let mut spans = Vec::new();
        for (i, action) in self.content.actions.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let base = match action {
                InfoAction::EmergencyCall { .. } => t.error_style(),
                InfoAction::Checklist { .. } => t.disabled_style(),
            };
            let style = if i == self.focused_action {
                t.highlight_style()
            } else {
                base
            };
            spans.push(Span::styled(
                format!("[ {} {} ]", self.icons.get(action.icon()), action.label()),
                style,
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(" Actions ")
            .title_style(t.title_style());
        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
    }
}

impl Screen for InfoScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        frame.render_widget(Clear, area);
        let t = theme();
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header, content, footer) = create_standard_layout(area, 4, 2);
        Header::render(frame, header, self.content.title, self.content.intro)?;

        let [body_area, actions_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(content);

        let lines = self.body_lines();
        self.max_scroll = (lines.len() as u16).saturating_sub(1);
        self.scroll = self.scroll.min(self.max_scroll);

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
        frame.render_widget(body, body_area);
        self.render_actions(frame, actions_area);

        let keymap = ctx.keymap();
        let footer_text = format!(
            "Scroll: {} | Focus: {} | {}",
            keymap.navigation_display(),
            keymap.get_key_display_for_action(Action::NextTab),
            keymap.footer(&[(Action::Confirm, "Select"), (Action::Cancel, "Back")]),
        );
        Footer::render(frame, footer, &footer_text)?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(action) = ctx.action_for(&event) else {
            return Ok(ScreenAction::None);
        };

        Ok(match action {
            Action::MoveUp | Action::ScrollUp => {
                self.scroll_by(-1);
                ScreenAction::None
            }
            Action::MoveDown | Action::ScrollDown => {
                self.scroll_by(1);
                ScreenAction::None
            }
            Action::PageUp => {
                self.scroll_by(-10);
                ScreenAction::None
            }
            Action::PageDown => {
                self.scroll_by(10);
                ScreenAction::None
            }
            Action::GoToTop => {
                self.scroll = 0;
                ScreenAction::None
            }
            Action::GoToEnd => {
                self.scroll = self.max_scroll;
                ScreenAction::None
            }
            Action::NextTab | Action::MoveRight => {
                self.focus_next();
                ScreenAction::None
            }
            Action::PrevTab | Action::MoveLeft => {
                self.focus_previous();
                ScreenAction::None
            }
            Action::Confirm => self.trigger_focused(),
            Action::Cancel => ScreenAction::Back,
            Action::Quit => ScreenAction::Quit,
            Action::Help => ScreenAction::ShowHelp,
            _ => ScreenAction::None,
        })
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.scroll = 0;
        self.focused_action = 0;
        Ok(())
    }
}
