//! Application shell: owns the runtime, the screens, and the screen stack.

use crate::api::{RentalApi, RentalClient, RoomPin};
use crate::components::HelpOverlay;
use crate::config::Config;
use crate::credentials::FileTokenStore;
use crate::screens::info::{self, InfoScreen};
use crate::screens::{
    MainMenuScreen, MapScreen, RenderContext, RequestListScreen, RoomDetailScreen, Screen,
    ScreenAction, ScreenContext,
};
use crate::tui::Tui;
use crate::ui::Screen as ScreenId;
use crate::widgets::ToastManager;
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, error, info, warn};

/// Input poll interval; fetch results and toast expiry are checked at this rate
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Every screen controller, one instance each
struct Screens {
    main_menu: MainMenuScreen,
    request_list: RequestListScreen,
    living_harmony: InfoScreen,
    safety: InfoScreen,
    map: MapScreen,
    room_detail: RoomDetailScreen,
}

impl Screens {
    fn new(pins: Vec<RoomPin>) -> Self {
        Self {
            main_menu: MainMenuScreen::new(),
            request_list: RequestListScreen::new(),
            living_harmony: InfoScreen::new(info::living_harmony()),
            safety: InfoScreen::new(info::safety()),
            map: MapScreen::new(pins),
            room_detail: RoomDetailScreen::new(),
        }
    }

    fn get_mut(&mut self, id: ScreenId) -> &mut dyn Screen {
        match id {
            ScreenId::MainMenu => &mut self.main_menu,
            ScreenId::RequestList => &mut self.request_list,
            ScreenId::LivingHarmony => &mut self.living_harmony,
            ScreenId::Safety => &mut self.safety,
            ScreenId::Map => &mut self.map,
            ScreenId::RoomDetail => &mut self.room_detail,
        }
    }
}

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    runtime: Runtime,
    api: Arc<dyn RentalApi>,
    screens: Screens,
    current: ScreenId,
    /// Screens to return to on `Back`
    history: Vec<ScreenId>,
    toasts: ToastManager,
    show_help: bool,
    should_quit: bool,
    started: bool,
}

impl App {
    /// App talking to the backend configured in `config`
    pub fn new(config: Config, config_path: PathBuf) -> Result<Self> {
        let tokens = Arc::new(FileTokenStore::new(config.credentials_path()));
        let api: Arc<dyn RentalApi> = Arc::new(RentalClient::new(config.api_base(), tokens));
        Self::with_api(config, config_path, api)
    }

    /// App backed by any [`RentalApi`] implementation
    pub fn with_api(config: Config, config_path: PathBuf, api: Arc<dyn RentalApi>) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        Ok(Self {
            config,
            config_path,
            runtime,
            api,
            screens: Screens::new(Vec::new()),
            current: ScreenId::MainMenu,
            history: Vec::new(),
            toasts: ToastManager::new(),
            show_help: false,
            should_quit: false,
            started: false,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn current_screen(&self) -> ScreenId {
        self.current
    }

    pub fn history(&self) -> &[ScreenId] {
        &self.history
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn request_list(&self) -> &RequestListScreen {
        &self.screens.request_list
    }

    pub fn room_detail(&self) -> &RoomDetailScreen {
        &self.screens.room_detail
    }

    pub fn map(&self) -> &MapScreen {
        &self.screens.map
    }

    /// Replace the rooms shown on the map
    pub fn set_map_rooms(&mut self, pins: Vec<RoomPin>) -> bool {
        self.screens.map.set_rooms(pins)
    }

    /// Open on `screen` instead of the main menu; `Back` still leads to the menu
    pub fn start_on(&mut self, screen: ScreenId) {
        self.current = screen;
        self.history.clear();
        if screen != ScreenId::MainMenu {
            self.history.push(ScreenId::MainMenu);
        }
    }

    /// Open directly on the detail screen of one room
    pub fn start_on_room(&mut self, room_id: impl Into<String>) {
        self.screens.room_detail.set_room_id(room_id);
        self.start_on(ScreenId::RoomDetail);
    }

    /// Enter the initial screen; called once before the first event
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        info!("Starting on {}", self.current.title());
        self.enter_current()
    }

    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.start()?;

        let result = self.event_loop(&mut tui);

        if let Err(e) = self.leave_current() {
            warn!("Failed to leave {}: {}", self.current.title(), e);
        }
        tui.exit()?;
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            let mut render_result = Ok(());
            tui.terminal_mut()
                .draw(|frame| render_result = self.render(frame))?;
            render_result?;

            if self.should_quit {
                break;
            }

            if let Some(event) = tui.poll_event(POLL_INTERVAL)? {
                self.handle_event(event)?;
            }
            self.tick();
        }
        Ok(())
    }

    /// Draw the current screen plus overlays
    pub fn render(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let ctx = RenderContext::new(&self.config);
        self.screens.get_mut(self.current).render(frame, area, &ctx)?;

        if self.show_help {
            let config_path = self.config_path.display().to_string();
            HelpOverlay::render(frame, area, &self.config.keymap, &config_path)?;
        }
        self.toasts.render(frame, area);
        Ok(())
    }

    /// Poll the current screen's fetches and expire toasts.
    ///
    /// Returns `true` when something visible changed.
    pub fn tick(&mut self) -> bool {
        let screen_changed = self.screens.get_mut(self.current).tick();
        let toast_visible = self.toasts.tick();
        screen_changed || toast_visible
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = &event {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.should_quit = true;
                return Ok(());
            }
            if self.show_help {
                self.handle_help_key(key.code);
                return Ok(());
            }
        }

        let action = {
            let ctx = ScreenContext::new(&self.config, self.runtime.handle(), &self.api);
            self.screens.get_mut(self.current).handle_event(event, &ctx)?
        };
        self.apply(action)
    }

    fn handle_help_key(&mut self, code: KeyCode) {
        let KeyCode::Char(c) = code else {
            self.show_help = false;
            return;
        };
        let Some(preset) = HelpOverlay::preset_for_digit(c) else {
            self.show_help = false;
            return;
        };
        if self.config.keymap.preset == preset {
            return;
        }

        info!("Switching keymap preset to {}", preset.name());
        self.config.keymap.preset = preset;
        if let Err(e) = self.config.save(&self.config_path) {
            error!("Failed to save config: {:#}", e);
            self.toasts.error(format!("Could not save keymap: {}", e));
        } else {
            self.toasts.success(format!("Keymap: {}", preset.name()));
        }
    }

    fn apply(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(target) => self.navigate(target)?,
            ScreenAction::OpenRoom(room_id) => {
                self.screens.room_detail.set_room_id(room_id);
                if self.current == ScreenId::RoomDetail {
                    self.enter_current()?;
                } else {
                    self.navigate(ScreenId::RoomDetail)?;
                }
            }
            ScreenAction::Back => self.go_back()?,
            ScreenAction::Quit => {
                info!("Quit requested from {}", self.current.title());
                self.should_quit = true;
            }
            ScreenAction::ShowToast(toast) => self.toasts.push(toast),
            ScreenAction::ShowHelp => self.show_help = true,
        }
        Ok(())
    }

    /// Push the current screen and enter `target`
    pub fn navigate(&mut self, target: ScreenId) -> Result<()> {
        if target == self.current {
            return Ok(());
        }
        debug!("Navigating {} -> {}", self.current.title(), target.title());
        self.leave_current()?;
        self.history.push(self.current);
        self.current = target;
        self.enter_current()
    }

    /// Return to the previous screen, or the main menu when there is none
    pub fn go_back(&mut self) -> Result<()> {
        let target = self.history.pop().unwrap_or(ScreenId::MainMenu);
        if target == self.current {
            return Ok(());
        }
        debug!("Back {} -> {}", self.current.title(), target.title());
        self.leave_current()?;
        self.current = target;
        self.enter_current()
    }

    fn enter_current(&mut self) -> Result<()> {
        let ctx = ScreenContext::new(&self.config, self.runtime.handle(), &self.api);
        self.screens.get_mut(self.current).on_enter(&ctx)
    }

    fn leave_current(&mut self) -> Result<()> {
        let ctx = ScreenContext::new(&self.config, self.runtime.handle(), &self.api);
        self.screens.get_mut(self.current).on_exit(&ctx)
    }
}
