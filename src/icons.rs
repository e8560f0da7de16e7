//! Icon provider.
//!
//! Supports Unicode emoji icons and an ASCII fallback. The set is chosen
//! from the `ROOMRENT_ICONS` environment variable, defaulting to Unicode.

use std::env;

/// Environment variable selecting the icon set
pub const ICONS_ENV: &str = "ROOMRENT_ICONS";

/// Available icon sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSet {
    /// Unicode emoji icons (works in most modern terminals)
    #[default]
    Unicode,
    /// ASCII-only fallback (maximum compatibility)
    Ascii,
}

impl IconSet {
    /// Icon set from the environment
    pub fn detect() -> Self {
        env::var(ICONS_ENV)
            .map(|value| Self::from_name(&value))
            .unwrap_or_default()
    }

    fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "ascii" | "plain" => IconSet::Ascii,
            _ => IconSet::Unicode,
        }
    }
}

/// Named icons used across screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Requests,
    Handshake,
    Quiet,
    Cleaning,
    Shield,
    Lock,
    Fire,
    Phone,
    Checklist,
    Map,
    Marker,
    MarkerSelected,
    Room,
    Price,
    Address,
    Calendar,
    Image,
    Info,
}

/// Icon provider that returns icons for the selected set
#[derive(Debug, Clone, Copy, Default)]
pub struct Icons {
    icon_set: IconSet,
}

impl Icons {
    pub fn new() -> Self {
        Self {
            icon_set: IconSet::detect(),
        }
    }

    pub fn with_icon_set(icon_set: IconSet) -> Self {
        Self { icon_set }
    }

    pub fn get(&self, icon: Icon) -> &'static str {
        match self.icon_set {
            IconSet::Unicode => unicode(icon),
            IconSet::Ascii => ascii(icon),
        }
    }
}

fn unicode(icon: Icon) -> &'static str {
    match icon {
        Icon::Requests => "📋",
        Icon::Handshake => "🤝",
        Icon::Quiet => "🔇",
        Icon::Cleaning => "🧹",
        Icon::Shield => "🛡",
        Icon::Lock => "🔒",
        Icon::Fire => "🔥",
        Icon::Phone => "📞",
        Icon::Checklist => "✅",
        Icon::Map => "🗺",
        Icon::Marker => "●",
        Icon::MarkerSelected => "◉",
        Icon::Room => "🏠",
        Icon::Price => "💰",
        Icon::Address => "📍",
        Icon::Calendar => "📅",
        Icon::Image => "🖼",
        Icon::Info => "ℹ",
    }
}

fn ascii(icon: Icon) -> &'static str {
    match icon {
        Icon::Requests => "[R]",
        Icon::Handshake => "[H]",
        Icon::Quiet => "[Q]",
        Icon::Cleaning => "[C]",
        Icon::Shield => "[S]",
        Icon::Lock => "[L]",
        Icon::Fire => "[F]",
        Icon::Phone => "[T]",
        Icon::Checklist => "[x]",
        Icon::Map => "[M]",
        Icon::Marker => "o",
        Icon::MarkerSelected => "@",
        Icon::Room => "[#]",
        Icon::Price => "$",
        Icon::Address => "@",
        Icon::Calendar => "[D]",
        Icon::Image => "[I]",
        Icon::Info => "i",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_set_from_name() {
        assert_eq!(IconSet::from_name("ASCII"), IconSet::Ascii);
        assert_eq!(IconSet::from_name("plain"), IconSet::Ascii);
        assert_eq!(IconSet::from_name("emoji"), IconSet::Unicode);
        assert_eq!(IconSet::from_name(""), IconSet::Unicode);
    }

    #[test]
    fn test_ascii_icons_are_ascii() {
        let icons = Icons::with_icon_set(IconSet::Ascii);
        for icon in [Icon::Phone, Icon::Marker, Icon::Room, Icon::Checklist] {
            assert!(icons.get(icon).is_ascii());
        }
    }
}
