use crate::styles::theme;
use anyhow::Result;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Prefix shown before every screen title
const APP_NAME: &str = "roomrent";

/// Title bar shared by every screen
pub struct Header;

impl Header {
    /// Render `roomrent › <title>` with a one or two line description under it.
    ///
    /// Returns the height used.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, description: &str) -> Result<u16> {
        let t = theme();

        let mut title_spans = vec![Span::styled(format!(" {}", APP_NAME), t.muted_style())];
        if title != APP_NAME {
            title_spans.push(Span::styled(" › ", t.muted_style()));
            title_spans.push(Span::styled(title.to_string(), t.title_style()));
        }
        title_spans.push(Span::raw(" "));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(Line::from(title_spans))
            .padding(Padding::horizontal(2));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text_height = (description.lines().count() as u16).min(inner.height);
        let [description_area] = Layout::vertical([Constraint::Length(text_height)])
            .flex(Flex::Center)
            .areas(inner);

        frame.render_widget(
            Paragraph::new(description)
                .style(t.text_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            description_area,
        );

        Ok(area.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_header_shows_breadcrumb_and_description() {
        let mut terminal = Terminal::new(TestBackend::new(60, 4)).unwrap();
        terminal
            .draw(|frame| {
                Header::render(frame, frame.area(), "Safety", "Stay safe").unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = (0..4)
            .flat_map(|y| (0..60).map(move |x| (x, y)))
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("roomrent › Safety"));
        assert!(text.contains("Stay safe"));
    }
}
