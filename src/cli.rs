use crate::api::{RentalApi, RentalClient, RentalRequest, Room, RoomPin};
use crate::app::App;
use crate::components::room_summary::detail_lines;
use crate::components::RequestCard;
use crate::config::Config;
use crate::credentials::FileTokenStore;
use crate::icons::{IconSet, Icons};
use crate::screens::request_list::EMPTY_STATE_TEXT;
use crate::styles::ThemeType;
use crate::ui::Screen as ScreenId;
use crate::utils::expand_path;
use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use ratatui::text::Line;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::info;

/// Terminal client for the room-rental service
#[derive(Parser, Debug)]
#[command(
    name = "roomrent",
    version,
    about = "Terminal client for the room-rental service",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Backend base URL (overrides `api_base` in the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// Color theme: dark, light or nocolor
    #[arg(long, global = true, value_name = "THEME")]
    pub theme: Option<String>,

    /// Config file to use instead of ~/.config/roomrent/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print your rental requests
    Requests,
    /// Print the details of one room
    Room {
        /// Room identifier
        room_id: String,
    },
    /// Open the TUI on the room map
    Map {
        /// JSON file with the rooms to place on the map
        #[arg(long, value_name = "FILE")]
        rooms: Option<PathBuf>,
    },
    /// Print shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        #[arg(value_enum)]
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Whether this invocation runs the full-screen TUI
    pub fn launches_tui(&self) -> bool {
        matches!(self.command, None | Some(Commands::Map { .. }))
    }

    /// Whether this invocation reads the config file at all
    pub fn needs_config(&self) -> bool {
        !matches!(self.command, Some(Commands::Completions { .. }))
    }

    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Load the config file and apply command-line overrides (not saved)
    pub fn load_config(&self) -> Result<Config> {
        let config_path = self.config_path();
        let mut config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        if let Some(api_base) = self.api_base.as_deref().filter(|s| !s.trim().is_empty()) {
            config.api_base = api_base.to_string();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        Ok(config)
    }

    /// Execute the CLI command with the config loaded by the caller.
    ///
    /// The config is loaded here when `None` is passed and the command needs one.
    pub fn execute(self, config: Option<Config>) -> Result<()> {
        if let Some(Commands::Completions { shell }) = &self.command {
            return Self::cmd_completions(*shell);
        }
        let config = match config {
            Some(config) => config,
            None => self.load_config()?,
        };

        match &self.command {
            Some(Commands::Completions { .. }) => Ok(()),
            Some(Commands::Requests) => Self::cmd_requests(&config),
            Some(Commands::Room { room_id }) => Self::cmd_room(&config, room_id),
            Some(Commands::Map { rooms }) => {
                let rooms_file = rooms.clone().or_else(|| config.map_rooms_file.clone());
                let pins = match rooms_file {
                    Some(path) => load_pins(&path)?,
                    None => Vec::new(),
                };
                let mut app = App::new(config, self.config_path())?;
                app.set_map_rooms(pins);
                app.start_on(ScreenId::Map);
                app.run()
            }
            None => {
                let rooms_file = config.map_rooms_file.clone();
                let mut app = App::new(config, self.config_path())?;
                if let Some(path) = rooms_file {
                    app.set_map_rooms(load_pins(&path)?);
                }
                app.run()
            }
        }
    }

    fn client(config: &Config) -> RentalClient {
        let tokens = Arc::new(FileTokenStore::new(config.credentials_path()));
        RentalClient::new(config.api_base(), tokens)
    }

    fn cmd_requests(config: &Config) -> Result<()> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let client = Self::client(config);
        let requests = runtime
            .block_on(client.rental_requests())
            .context("Could not load rental requests")?;
        info!("Printing {} rental requests", requests.len());
        print!("{}", format_requests(&requests));
        Ok(())
    }

    fn cmd_room(config: &Config, room_id: &str) -> Result<()> {
        if room_id.trim().is_empty() {
            bail!("Room id must not be empty");
        }
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let client = Self::client(config);
        let room = runtime
            .block_on(client.room(room_id))
            .with_context(|| format!("Could not load room {}", room_id))?;
        print!("{}", format_room(&room));
        Ok(())
    }

    fn cmd_completions(shell: Option<Shell>) -> Result<()> {
        let Some(shell) = shell.or_else(Shell::from_env) else {
            bail!("Could not automatically detect shell");
        };

        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        Ok(())
    }
}

/// Theme to use: `NO_COLOR` wins over the configured name
pub fn resolve_theme(configured: &str, no_color_env: bool) -> ThemeType {
    if no_color_env {
        return ThemeType::NoColor;
    }
    configured.parse().unwrap_or_default()
}

fn load_pins(path: &Path) -> Result<Vec<RoomPin>> {
    let path = expand_path(&path.to_string_lossy());
    RoomPin::load_all(&path).with_context(|| format!("Failed to load map rooms from {:?}", path))
}

fn plain(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

/// Plain-text rendering of the request cards, one blank line apart
pub fn format_requests(requests: &[RentalRequest]) -> String {
    if requests.is_empty() {
        return format!("{}\n", EMPTY_STATE_TEXT);
    }
    requests
        .iter()
        .map(|r| plain(&RequestCard::new(r).lines()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text rendering of a room's details
pub fn format_room(room: &Room) -> String {
    plain(&detail_lines(room, &Icons::with_icon_set(IconSet::Ascii)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "roomrent",
            "room",
            "r-1",
            "--api-base",
            "http://example.test/api",
        ])
        .unwrap();
        assert_eq!(cli.api_base.as_deref(), Some("http://example.test/api"));
        assert!(matches!(cli.command, Some(Commands::Room { ref room_id }) if room_id == "r-1"));
        assert!(!cli.launches_tui());
    }

    #[test]
    fn test_map_launches_tui() {
        let cli = Cli::try_parse_from(["roomrent", "map", "--rooms", "rooms.json"]).unwrap();
        assert!(cli.launches_tui());
        assert!(Cli::try_parse_from(["roomrent"]).unwrap().launches_tui());
    }

    #[test]
    fn test_overrides_are_applied_but_not_saved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let cli = Cli::try_parse_from([
            "roomrent",
            "--config",
            path.to_str().unwrap(),
            "--theme",
            "light",
            "--api-base",
            "http://override.test/api",
        ])
        .unwrap();

        let config = cli.load_config().unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.api_base(), "http://override.test/api");

        let saved = Config::load_or_create(&path).unwrap();
        assert_eq!(saved.theme, "dark");
    }

    #[test]
    fn test_completions_do_not_touch_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let cli = Cli::try_parse_from([
            "roomrent",
            "--config",
            path.to_str().unwrap(),
            "completions",
            "bash",
        ])
        .unwrap();
        assert!(!cli.needs_config());
        assert!(!cli.launches_tui());

        cli.execute(None).unwrap();
        assert!(!path.exists());

        let cli = Cli::try_parse_from(["roomrent", "requests"]).unwrap();
        assert!(cli.needs_config());
    }

    #[test]
    fn test_no_color_env_wins() {
        assert_eq!(resolve_theme("light", true), ThemeType::NoColor);
        assert_eq!(resolve_theme("light", false), ThemeType::Light);
        assert_eq!(resolve_theme("bogus", false), ThemeType::Dark);
    }

    #[test]
    fn test_format_requests_empty() {
        assert_eq!(format_requests(&[]), "You have no rental requests yet\n");
    }

    #[test]
    fn test_format_requests_keeps_order() {
        let requests: Vec<RentalRequest> = serde_json::from_value(serde_json::json!([
            {"roomRequestId": "first-0001", "roomId": "r1", "status": "Approved"},
            {"roomRequestId": "second-002", "roomId": "r2", "status": 0}
        ]))
        .unwrap();
        let out = format_requests(&requests);
        let first = out.find("#first-00").unwrap();
        let second = out.find("#second-0").unwrap();
        assert!(first < second);
        assert!(out.contains("Approved"));
        assert!(out.contains("Pending"));
    }
}
