//! Menu widget that renders items as three-line cards.

use crate::styles::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

const ITEM_HEIGHT: u16 = 3;

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub icon: String,
    pub text: String,
    pub color: Color,
    /// Muted text shown after the label
    pub info: Option<String>,
}

impl MenuItem {
    pub fn new(icon: impl Into<String>, text: impl Into<String>, color: Color) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
            color,
            info: None,
        }
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}

#[derive(Debug, Default, Clone)]
pub struct MenuState {
    selected: Option<usize>,
}

impl MenuState {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Rows needed to show every item
    pub fn height(&self) -> u16 {
        self.items.len() as u16 * ITEM_HEIGHT
    }
}

impl StatefulWidget for Menu {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();
        let no_color = t.theme_type == crate::styles::ThemeType::NoColor;

        for (i, item) in self.items.iter().enumerate() {
            let y = area.y + i as u16 * ITEM_HEIGHT;
            if y + ITEM_HEIGHT > area.y + area.height {
                break;
            }

            let is_selected = state.selected == Some(i);
            let style = if no_color {
                if is_selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                }
            } else {
                let bg = if is_selected { t.highlight_bg } else { t.background };
                Style::default().fg(item.color).bg(bg)
            };
            let bold = style.add_modifier(Modifier::BOLD);
            let marker = if is_selected { "▌" } else { " " };
            let marker_style = if no_color {
                style
            } else {
                style.fg(t.border_focused)
            };

            let padding = Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(" ".repeat(area.width.saturating_sub(1) as usize), style),
            ]);
            padding.clone().render(Rect::new(area.x, y, area.width, 1), buf);

            let mut spans = vec![
                Span::styled(marker, marker_style),
                Span::styled(" ", style),
                Span::styled(format!("{} ", item.icon), bold),
                Span::styled(item.text.clone(), if is_selected { bold } else { style }),
            ];
            if let Some(info) = &item.info {
                let info_style = if no_color { style } else { style.fg(t.text_muted) };
                spans.push(Span::styled(format!("  {}", info), info_style));
            }
            let width: usize = spans.iter().map(|s| s.width()).sum();
            if width < area.width as usize {
                spans.push(Span::styled(" ".repeat(area.width as usize - width), style));
            }
            Line::from(spans).render(Rect::new(area.x, y + 1, area.width, 1), buf);

            padding.render(Rect::new(area.x, y + 2, area.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_height() {
        let menu = Menu::new(vec![
            MenuItem::new("1", "First", Color::Cyan),
            MenuItem::new("2", "Second", Color::Green).info("details"),
        ]);
        assert_eq!(menu.height(), 6);
    }

    #[test]
    fn test_selected_item_has_marker() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        let mut state = MenuState::new();
        state.select(Some(1));
        Menu::new(vec![
            MenuItem::new("*", "First", Color::Cyan),
            MenuItem::new("*", "Second", Color::Green),
        ])
        .render(area, &mut buf, &mut state);

        assert_eq!(buf[(0, 1)].symbol(), " ");
        assert_eq!(buf[(0, 4)].symbol(), "▌");
    }
}
