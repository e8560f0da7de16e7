//! Display formatting for backend values.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Length of the shortened identifier shown on cards
pub const SHORT_ID_LEN: usize = 8;

/// First eight characters of an identifier (`abc12345-...` -> `abc12345`)
pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

/// Format a backend date as `dd/mm/yyyy`.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive
/// `YYYY-MM-DDTHH:MM:SS[.f]` timestamps. Anything else is returned as-is.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d/%m/%Y").to_string();
    }

    raw.to_string()
}

/// Format an optional date, with a dash for missing values
pub fn format_optional_date(raw: Option<&str>) -> String {
    match raw {
        Some(raw) if !raw.trim().is_empty() => format_date(raw),
        _ => "—".to_string(),
    }
}

/// `1 month`, `6 months`
pub fn months_label(months: u32) -> String {
    if months == 1 {
        "1 month".to_string()
    } else {
        format!("{} months", months)
    }
}

/// Group thousands with commas; fractional parts are rounded away
pub fn format_price(price: f64) -> String {
    let rounded = price.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("abc12345-0000-4000-8000-000000000001"), "abc12345");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2024-01-01"), "01/01/2024");
        assert_eq!(format_date("2023-12-01T08:30:00Z"), "01/12/2023");
        assert_eq!(format_date("2023-12-01T08:30:00.123"), "01/12/2023");
        assert_eq!(format_date("2023-12-01T08:30:00+07:00"), "01/12/2023");
        assert_eq!(format_date("next week"), "next week");
    }

    #[test]
    fn test_format_optional_date() {
        assert_eq!(format_optional_date(None), "—");
        assert_eq!(format_optional_date(Some("  ")), "—");
        assert_eq!(format_optional_date(Some("2024-02-29")), "29/02/2024");
    }

    #[test]
    fn test_months_label() {
        assert_eq!(months_label(1), "1 month");
        assert_eq!(months_label(6), "6 months");
        assert_eq!(months_label(0), "0 months");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(3_500_000.0), "3,500,000");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(1000.4), "1,000");
        assert_eq!(format_price(-1234.0), "-1,234");
        assert_eq!(format_price(0.0), "0");
    }
}
