//! KeyBinding struct for mapping keys to actions
//!
//! Parses key strings like "ctrl+r", "shift+tab", "j", "+".

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+r", "shift+tab")
    pub key: String,

    /// The action this key triggers
    pub action: Action,

    /// Optional description override (uses action description if None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Check if this binding matches the given key event
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Ok(parsed) = self.parse() else {
            return false;
        };
        let (code, modifiers) = normalize_event(code, modifiers);
        parsed.code == code && parsed.modifiers == modifiers
    }

    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Display string for this binding (e.g., "Ctrl+R")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    /// Get the description (custom or from action)
    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Bring terminal key events into the shape bindings are written in.
///
/// Terminals disagree on whether SHIFT accompanies symbols like `?` or `+`,
/// and report Shift+Tab as `BackTab`. Letters keep SHIFT so "shift+g" works.
fn normalize_event(code: KeyCode, modifiers: KeyModifiers) -> (KeyCode, KeyModifiers) {
    match code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => {
            (KeyCode::Char(c.to_ascii_lowercase()), modifiers | KeyModifiers::SHIFT)
        }
        KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
            (KeyCode::Char(c), modifiers - KeyModifiers::SHIFT)
        }
        KeyCode::BackTab => (KeyCode::Tab, modifiers | KeyModifiers::SHIFT),
        other => (other, modifiers),
    }
}

/// Split "ctrl+shift+x" into parts, keeping a literal "+" key intact
fn split_key(key: &str) -> Vec<&str> {
    if key == "+" {
        return vec!["+"];
    }
    if let Some(prefix) = key.strip_suffix("++") {
        let mut parts: Vec<&str> = prefix.split('+').collect();
        parts.push("+");
        return parts;
    }
    key.split('+').collect()
}

/// Parse a key string like "ctrl+shift+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    let parts = split_key(&key);
    let Some((key_part, modifier_parts)) = parts.split_last() else {
        return Err("Empty key".to_string());
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_parts {
        modifiers |= match part.trim() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" => KeyModifiers::SUPER,
            other => return Err(format!("Unknown modifier: {}", other)),
        };
    }

    let code = parse_key_code(key_part)?;
    Ok(ParsedKey { code, modifiers })
}

/// Parse a single key name into KeyCode
fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let code = match key {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        _ => {
            if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Ok(KeyCode::F(n));
                }
            }
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unknown key: {}", key)),
            }
        }
    };
    Ok(code)
}

/// Format a key string for display (e.g., "ctrl+r" -> "Ctrl+R")
pub fn format_key_display(key: &str) -> String {
    let key = key.trim().to_lowercase();
    split_key(&key)
        .iter()
        .map(|part| match *part {
            "ctrl" | "control" => "Ctrl".to_string(),
            "alt" | "option" => "Alt".to_string(),
            "shift" => "Shift".to_string(),
            "super" | "meta" | "cmd" => "Cmd".to_string(),
            "up" => "↑".to_string(),
            "down" => "↓".to_string(),
            "left" => "←".to_string(),
            "right" => "→".to_string(),
            "enter" | "return" => "Enter".to_string(),
            "esc" | "escape" => "Esc".to_string(),
            "space" => "Space".to_string(),
            "tab" => "Tab".to_string(),
            "pageup" | "pgup" => "PgUp".to_string(),
            "pagedown" | "pgdn" => "PgDn".to_string(),
            "home" => "Home".to_string(),
            "end" => "End".to_string(),
            other if other.chars().count() == 1 => other.to_uppercase(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_and_modified_keys() {
        let parsed = parse_key_string("j").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('j'));
        assert_eq!(parsed.modifiers, KeyModifiers::NONE);

        let parsed = parse_key_string("ctrl+shift+r").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('r'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    }

    #[test]
    fn test_parse_plus_key() {
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
        let parsed = parse_key_string("ctrl++").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('+'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key_string("enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
        assert!(parse_key_string("f13").is_err());
        assert!(parse_key_string("hyper+x").is_err());
        assert!(parse_key_string("banana").is_err());
    }

    #[test]
    fn test_symbol_matches_with_or_without_shift() {
        let binding = KeyBinding::new("?", Action::Help);
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::NONE));
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
    }

    #[test]
    fn test_uppercase_letter_matches_shift_binding() {
        let binding = KeyBinding::new("shift+g", Action::GoToEnd);
        assert!(binding.matches(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::Char('G'), KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Char('g'), KeyModifiers::NONE));
    }

    #[test]
    fn test_backtab_matches_shift_tab() {
        let binding = KeyBinding::new("shift+tab", Action::PrevTab);
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::NONE));
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("ctrl+r"), "Ctrl+R");
        assert_eq!(format_key_display("up"), "↑");
        assert_eq!(format_key_display("+"), "+");
        assert_eq!(format_key_display("shift+tab"), "Shift+Tab");
    }

    #[test]
    fn test_description_override() {
        let mut binding = KeyBinding::new("r", Action::Refresh);
        assert_eq!(binding.get_description(), "Reload / retry");
        binding.description = Some("Try again".to_string());
        assert_eq!(binding.get_description(), "Try again");
    }
}
