//! Read-only access to the session credential.
//!
//! The client never creates or renews the bearer token; it is read from
//! local storage at request time and a missing token surfaces as
//! [`FetchError::MissingCredential`](crate::api::FetchError::MissingCredential).

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Environment variable that takes precedence over the credentials file
pub const TOKEN_ENV: &str = "ROOMRENT_TOKEN";

/// Source of the bearer token
pub trait TokenStore: Send + Sync {
    /// Read the current token, `None` when absent or empty.
    fn token(&self) -> Option<String>;
}

/// Token stored under the `token` key of a TOML file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    read_env: bool,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            read_env: true,
        }
    }

    /// Ignore `ROOMRENT_TOKEN` and only consult the file
    pub fn ignore_env(mut self) -> Self {
        self.read_env = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Option<String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No credentials at {:?}: {}", self.path, e);
                return None;
            }
        };

        let table: toml::Table = match toml::from_str(&content) {
            Ok(table) => table,
            Err(e) => {
                warn!("Ignoring unreadable credentials file {:?}: {}", self.path, e);
                return None;
            }
        };

        table
            .get(TOKEN_KEY)
            .and_then(|v| v.as_str())
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        if self.read_env {
            if let Ok(token) = std::env::var(TOKEN_ENV) {
                let token = token.trim().to_string();
                if !token.is_empty() {
                    return Some(token);
                }
            }
        }
        self.read_file()
    }
}

/// Fixed token, used by tests and one-shot CLI invocations
#[derive(Debug, Clone, Default)]
pub struct StaticTokenStore(pub Option<String>);

impl StaticTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn empty() -> Self {
        Self(None)
    }
}

impl TokenStore for StaticTokenStore {
    fn token(&self) -> Option<String> {
        self.0.clone().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_token_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::write(&path, "token = \"  abc.def.ghi \"\n").unwrap();

        let store = FileTokenStore::new(&path).ignore_env();
        assert_eq!(store.token().as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_file_means_no_token() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("nope.toml")).ignore_env();
        assert!(store.token().is_none());
    }

    #[test]
    fn test_empty_or_malformed_token_is_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.toml");

        std::fs::write(&path, "token = \"\"\n").unwrap();
        assert!(FileTokenStore::new(&path).ignore_env().token().is_none());

        std::fs::write(&path, "this is = not toml =").unwrap();
        assert!(FileTokenStore::new(&path).ignore_env().token().is_none());
    }

    #[test]
    fn test_static_store() {
        assert_eq!(
            StaticTokenStore::with_token("t").token().as_deref(),
            Some("t")
        );
        assert!(StaticTokenStore::with_token("").token().is_none());
        assert!(StaticTokenStore::empty().token().is_none());
    }
}
