//! Modal dialog widget
//!
//! Handles centering, background dimming, borders, and content rendering.
//! Title, content and footer are stacked as three blocks with collapsed
//! borders.

use crate::styles::theme;
use ratatui::layout::Spacing;
use ratatui::prelude::*;
use ratatui::symbols::merge::MergeStrategy;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Widget, Wrap};

/// Dialog variant for different visual styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogVariant {
    #[default]
    Default,
    Error,
}

/// Dialog widget - a self-contained modal
pub struct Dialog<'a> {
    pub title: &'a str,
    pub content: Text<'a>,
    /// Width percentage (0-100)
    pub width_percent: u16,
    pub min_width: u16,
    /// Height percentage (0-100)
    pub height_percent: u16,
    pub variant: DialogVariant,
    pub footer: Option<&'a str>,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str, content: impl Into<Text<'a>>) -> Self {
        Self {
            title,
            content: content.into(),
            width_percent: 60,
            min_width: 40,
            height_percent: 60,
            variant: DialogVariant::Default,
            footer: None,
        }
    }

    pub fn width(mut self, percent: u16) -> Self {
        self.width_percent = percent.min(100);
        self
    }

    pub fn height(mut self, percent: u16) -> Self {
        self.height_percent = percent.min(100);
        self
    }

    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Area the dialog occupies inside `area`
    pub fn popup_area(&self, area: Rect) -> Rect {
        let title_height = 3u16;
        let footer_height = if self.footer.is_some() { 3u16 } else { 0 };
        let min_content_height = 3u16;
        // Each collapsed border saves one line
        let collapsed = if self.footer.is_some() { 2 } else { 1 };
        let min_total_height = title_height + min_content_height + footer_height - collapsed;

        let width = ((area.width as u32 * self.width_percent as u32) / 100) as u16;
        let width = width.max(self.min_width).min(area.width);
        let height = ((area.height as u32 * self.height_percent as u32) / 100) as u16;
        let height = height.max(min_total_height).min(area.height);

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        Rect::new(x, y, width, height)
    }

    fn render_impl(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let popup_area = self.popup_area(area);

        Widget::render(Block::default().style(t.dim_style()), area, buf);
        Widget::render(Clear, popup_area, buf);

        let border_style = match self.variant {
            DialogVariant::Default => t.border_focused_style(),
            DialogVariant::Error => t.error_style(),
        };

        let has_footer = self.footer.is_some();
        let mut constraints = vec![Constraint::Length(3), Constraint::Min(1)];
        if has_footer {
            constraints.push(Constraint::Length(3));
        }
        let layout = Layout::vertical(constraints)
            .spacing(Spacing::Overlap(1))
            .split(popup_area);

        let section = || {
            Block::default()
                .borders(Borders::ALL)
                .border_type(t.dialog_border_type)
                .border_style(border_style)
                .padding(Padding::horizontal(2))
                .merge_borders(MergeStrategy::Exact)
                .style(t.background_style())
        };

        let title_block = section();
        let title_inner = title_block.inner(layout[0]);
        Widget::render(title_block, layout[0], buf);
        Widget::render(
            Paragraph::new(self.title)
                .alignment(Alignment::Center)
                .style(t.text_style().add_modifier(Modifier::BOLD)),
            title_inner,
            buf,
        );

        let content_block = section();
        let content_inner = content_block.inner(layout[1]);
        Widget::render(content_block, layout[1], buf);
        Widget::render(
            Paragraph::new(self.content)
                .wrap(Wrap { trim: true })
                .style(t.text_style()),
            content_inner,
            buf,
        );

        if let Some(footer_text) = self.footer {
            let footer_block = section();
            let footer_inner = footer_block.inner(layout[2]);
            Widget::render(footer_block, layout[2], buf);
            Widget::render(
                Paragraph::new(footer_text)
                    .alignment(Alignment::Center)
                    .style(t.emphasis_style()),
                footer_inner,
                buf,
            );
        }
    }
}

impl<'a> Widget for Dialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_impl(area, buf);
    }
}
