use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

/// Message box for loading, empty and error states that replace a content view
pub struct MessageBox;

impl MessageBox {
    /// Render a bordered, centered message
    ///
    /// # Arguments
    /// * `message` - Body text (may span several lines)
    /// * `title` - Optional title (defaults to "Message")
    /// * `color` - Optional border color (defaults to the primary accent)
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        message: &str,
        title: Option<&str>,
        color: Option<Color>,
    ) -> Result<()> {
        let t = theme();
        let border_style = match color {
            Some(color) if t.theme_type != crate::styles::ThemeType::NoColor => {
                Style::default().fg(color)
            }
            _ => t.border_focused_style(),
        };

        let message_block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title.unwrap_or("Message")))
            .title_alignment(Alignment::Center)
            .border_style(border_style)
            .padding(Padding::new(2, 2, 1, 1));

        let message_para = Paragraph::new(message)
            .style(t.text_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(message_block);

        frame.render_widget(message_para, area);
        Ok(())
    }

    /// Errored fetch: the message plus how to retry
    pub fn render_error(frame: &mut Frame, area: Rect, message: &str, retry_key: &str) -> Result<()> {
        let t = theme();
        let body = format!("{}\n\nPress {} to try again.", message, retry_key);
        Self::render(frame, area, &body, Some("Something went wrong"), Some(t.error))
    }

    /// In-flight fetch
    pub fn render_loading(frame: &mut Frame, area: Rect, what: &str) -> Result<()> {
        let t = theme();
        Self::render(frame, area, &format!("Loading {}...", what), Some("Loading"), Some(t.primary))
    }

    /// Successful fetch with nothing to show
    pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) -> Result<()> {
        let t = theme();
        Self::render(frame, area, message, Some("Nothing here"), Some(t.text_muted))
    }
}
