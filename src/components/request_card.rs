//! Card rendering for one rental request.

use crate::api::{RentalRequest, RequestStatus};
use crate::styles::theme;
use crate::utils::{format_optional_date, months_label, short_id};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

/// Filled status label, e.g. ` Pending `
pub fn status_badge(status: RequestStatus) -> Span<'static> {
    Span::styled(
        format!(" {} ", status.label()),
        theme().status_badge_style(status),
    )
}

/// Card for a rental request, rendered as a multi-line list item
pub struct RequestCard<'a> {
    request: &'a RentalRequest,
}

impl<'a> RequestCard<'a> {
    pub fn new(request: &'a RentalRequest) -> Self {
        Self { request }
    }

    /// Lines shown for the card, without the trailing spacer
    pub fn lines(&self) -> Vec<Line<'static>> {
        let t = theme();
        let r = self.request;

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("#{}", short_id(&r.room_request_id)), t.title_style()),
                Span::raw("  "),
                status_badge(r.status),
            ]),
            Line::from(vec![
                Span::styled("Move-in: ", t.muted_style()),
                Span::styled(
                    format_optional_date(r.date_want_to_rent.as_deref()),
                    t.text_style(),
                ),
                Span::styled("   Duration: ", t.muted_style()),
                Span::styled(
                    r.month_want_rent
                        .map(months_label)
                        .unwrap_or_else(|| "—".to_string()),
                    t.text_style(),
                ),
            ]),
        ];

        if let Some(message) = r.message.as_deref().filter(|m| !m.trim().is_empty()) {
            lines.push(Line::from(vec![
                Span::styled("Message: ", t.muted_style()),
                Span::styled(message.trim().to_string(), t.text_style()),
            ]));
        }

        lines.push(Line::from(vec![
            Span::styled("Requested: ", t.muted_style()),
            Span::styled(format_optional_date(r.created_at.as_deref()), t.muted_style()),
        ]));

        lines
    }

    pub fn into_list_item(self) -> ListItem<'static> {
        let mut lines = self.lines();
        lines.push(Line::from(""));
        ListItem::new(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn request() -> RentalRequest {
        RentalRequest {
            room_request_id: "abc12345-0000-4000-8000-000000000001".to_string(),
            room_id: "room-1".to_string(),
            status: RequestStatus::Pending,
            date_want_to_rent: Some("2024-01-01".to_string()),
            month_want_rent: Some(6),
            message: Some("hi".to_string()),
            created_at: Some("2023-12-01".to_string()),
        }
    }

    #[test]
    fn test_card_fields() {
        let r = request();
        let lines: Vec<String> = RequestCard::new(&r).lines().iter().map(line_text).collect();
        assert_eq!(lines[0], "#abc12345   Pending ");
        assert_eq!(lines[1], "Move-in: 01/01/2024   Duration: 6 months");
        assert_eq!(lines[2], "Message: hi");
        assert_eq!(lines[3], "Requested: 01/12/2023");
    }

    #[test]
    fn test_card_without_optional_fields() {
        let mut r = request();
        r.message = None;
        r.month_want_rent = None;
        r.date_want_to_rent = None;
        let lines: Vec<String> = RequestCard::new(&r).lines().iter().map(line_text).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Move-in: —   Duration: —");
    }

    #[test]
    fn test_badge_uses_status_color() {
        crate::styles::init_theme(crate::styles::ThemeType::Dark);
        let badge = status_badge(RequestStatus::Rejected);
        assert_eq!(badge.content, " Rejected ");
        assert_eq!(badge.style.bg, Some(ratatui::style::Color::Red));
    }
}
