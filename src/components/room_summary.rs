//! Text blocks describing a room, shared by the map modal and the room screen.

use crate::api::Room;
use crate::icons::{Icon, Icons};
use crate::styles::theme;
use crate::utils::{format_optional_date, format_price, short_id};
use ratatui::text::{Line, Span};

const NOT_LISTED: &str = "Not listed";

fn field(icons: &Icons, icon: Icon, label: &str, value: String) -> Line<'static> {
    let t = theme();
    Line::from(vec![
        Span::styled(format!("{} ", icons.get(icon)), t.muted_style()),
        Span::styled(format!("{}: ", label), t.muted_style()),
        Span::styled(value, t.text_style()),
    ])
}

/// Short form: image reference, price, address, description
pub fn summary_lines(room: &Room, icons: &Icons) -> Vec<Line<'static>> {
    let t = theme();
    let price = room
        .current_price()
        .map(|p| format!("{} / month", format_price(p)))
        .unwrap_or_else(|| NOT_LISTED.to_string());

    let mut lines = vec![
        Line::from(Span::styled(room.title(), t.title_style())),
        Line::from(""),
        field(
            icons,
            Icon::Image,
            "Image",
            room.primary_image().unwrap_or("No photo").to_string(),
        ),
        Line::from(vec![
            Span::styled(format!("{} ", icons.get(Icon::Price)), t.muted_style()),
            Span::styled("Price: ", t.muted_style()),
            Span::styled(price, t.emphasis_style()),
        ]),
        field(
            icons,
            Icon::Address,
            "Address",
            room.address_line().unwrap_or_else(|| NOT_LISTED.to_string()),
        ),
        Line::from(""),
    ];

    match room.description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => {
            lines.extend(
                description
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), t.text_style()))),
            );
        }
        _ => lines.push(Line::from(Span::styled("No description", t.muted_style()))),
    }
    lines
}

/// Long form for the room screen: summary plus price history and location
pub fn detail_lines(room: &Room, icons: &Icons) -> Vec<Line<'static>> {
    let t = theme();
    let mut lines = summary_lines(room, icons);

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Prices", t.heading_style())));
    if room.room_prices.is_empty() {
        lines.push(Line::from(Span::styled("  No prices listed", t.muted_style())));
    }
    for price in &room.room_prices {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", format_price(price.price)), t.emphasis_style()),
            Span::styled(
                format!("  from {}", format_optional_date(price.apply_date.as_deref())),
                t.muted_style(),
            ),
        ]));
    }

    let images: Vec<&str> = room.image_urls().collect();
    if images.len() > 1 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Photos", t.heading_style())));
        for url in images {
            lines.push(Line::from(Span::styled(
                format!("  {}", url),
                t.text_style(),
            )));
        }
    }

    lines.push(Line::from(""));
    let location = match (room.latitude, room.longitude) {
        (Some(lat), Some(lon)) => format!("{:.5}, {:.5}", lat, lon),
        _ => NOT_LISTED.to_string(),
    };
    lines.push(field(icons, Icon::Address, "Coordinates", location));
    lines.push(field(icons, Icon::Room, "Room id", short_id(&room.room_id)));
    lines
}
