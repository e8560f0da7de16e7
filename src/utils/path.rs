use std::path::PathBuf;

/// Environment variable that relocates the config directory (used by tests)
pub const CONFIG_DIR_ENV: &str = "ROOMRENT_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (always ~/.config/roomrent, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    get_home_dir().join(".config").join("roomrent")
}

/// Get the config file path (~/.config/roomrent/config.toml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Default location of the stored session token
pub fn get_credentials_path() -> PathBuf {
    get_config_dir().join("credentials.toml")
}

/// Directory for the log file; falls back to the home directory
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("roomrent")
}

/// Expand a path string, handling ~ and relative paths
///
/// Relative paths are resolved against the current directory, so
/// `--rooms rooms.json` behaves like any other CLI file argument.
pub fn expand_path(path_str: &str) -> PathBuf {
    let home_dir = get_home_dir();

    if let Some(rest) = path_str.strip_prefix("~/") {
        home_dir.join(rest)
    } else if path_str == "~" {
        home_dir
    } else {
        PathBuf::from(path_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_path("~/rooms.json"), get_home_dir().join("rooms.json"));
        assert_eq!(expand_path("~"), get_home_dir());
    }

    #[test]
    fn test_expand_keeps_other_paths() {
        assert_eq!(expand_path("/tmp/rooms.json"), PathBuf::from("/tmp/rooms.json"));
        assert_eq!(expand_path("rooms.json"), PathBuf::from("rooms.json"));
    }

    #[test]
    fn test_config_files_live_in_config_dir() {
        let dir = get_config_dir();
        assert_eq!(get_config_path().parent(), Some(dir.as_path()));
        assert_eq!(get_credentials_path().parent(), Some(dir.as_path()));
    }
}
