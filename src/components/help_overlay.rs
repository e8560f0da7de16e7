//! Help Overlay Component
//!
//! Displays current keybindings when user presses '?' key.

use crate::keymap::{Keymap, KeymapPreset};
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const PRESETS: [KeymapPreset; 3] = [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs];

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Preset selected by the `1`/`2`/`3` keys while the overlay is open
    pub fn preset_for_digit(c: char) -> Option<KeymapPreset> {
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        PRESETS.get(index).copied()
    }

    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();
        let popup_area = center_popup(area, 80, 85);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style());
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [preset_area, bindings_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .areas(inner_area);

        // Preset selector
        let mut preset_spans = vec![Span::styled("Preset: ", t.muted_style())];
        for (i, preset) in PRESETS.iter().enumerate() {
            let label = format!("{} {}", i + 1, preset.name());
            if *preset == keymap.preset {
                preset_spans.push(Span::styled(
                    format!("[{}]", label),
                    t.title_style(),
                ));
            } else {
                preset_spans.push(Span::styled(label, t.muted_style()));
            }
            preset_spans.push(Span::raw("  "));
        }
        frame.render_widget(Paragraph::new(Line::from(preset_spans)), preset_area);

        // Bindings grouped by category
        let mut lines: Vec<Line> = Vec::new();
        let mut current_category = "";
        for binding in keymap.all_bindings() {
            let category = binding.action.category();
            if category != current_category {
                if !current_category.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    format!("  {} ", category),
                    t.heading_style(),
                )));
                current_category = category;
            }

            lines.push(Line::from(vec![
                Span::styled(
                    format!("    {:14}", binding.display()),
                    t.emphasis_style(),
                ),
                Span::styled(binding.get_description().to_string(), t.text_style()),
            ]));
        }
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            bindings_area,
        );

        let footer = Paragraph::new(format!(
            "Edit keybindings in: {}\nPress 1/2/3 to switch preset, any other key to close",
            config_path
        ))
        .style(t.muted_style().add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center);
        frame.render_widget(footer, footer_area);

        // Keep the overlay readable on tiny terminals
        if popup_area.height < 8 {
            frame.render_widget(
                Paragraph::new("Terminal too small for help").style(Style::default()),
                popup_area,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_for_digit() {
        assert_eq!(HelpOverlay::preset_for_digit('1'), Some(KeymapPreset::Standard));
        assert_eq!(HelpOverlay::preset_for_digit('3'), Some(KeymapPreset::Emacs));
        assert_eq!(HelpOverlay::preset_for_digit('0'), None);
        assert_eq!(HelpOverlay::preset_for_digit('4'), None);
        assert_eq!(HelpOverlay::preset_for_digit('x'), None);
    }
}
