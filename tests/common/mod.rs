//! Shared test utilities for screen and app integration tests.
//!
//! Provides `FakeApi` - an in-memory `RentalApi` with scripted responses,
//! per-room delays and call counters - plus a `Harness` that owns the tokio
//! runtime screens spawn their fetches on.

#![allow(dead_code)]

use async_trait::async_trait;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use roomrent::api::{FetchError, RentalApi, RentalRequest, RequestStatus, Room, RoomPin};
use roomrent::app::App;
use roomrent::config::Config;
use roomrent::screens::{RenderContext, Screen, ScreenContext};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Runtime;

/// How long `tick_until` keeps polling before giving up
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);
const SETTLE_STEP: Duration = Duration::from_millis(10);

/// In-memory backend.
///
/// Rental request responses are consumed in order; the last one repeats.
/// Room responses are keyed by id and may be delayed.
#[derive(Default)]
pub struct FakeApi {
    request_responses: Mutex<VecDeque<(Duration, Result<Vec<RentalRequest>, FetchError>)>>,
    rooms: Mutex<HashMap<String, VecDeque<Result<Room, FetchError>>>>,
    room_delays: Mutex<HashMap<String, Duration>>,
    request_calls: AtomicUsize,
    room_calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_requests(&self, response: Result<Vec<RentalRequest>, FetchError>) {
        self.push_requests_after(Duration::ZERO, response);
    }

    pub fn push_requests_after(
        &self,
        delay: Duration,
        response: Result<Vec<RentalRequest>, FetchError>,
    ) {
        self.request_responses
            .lock()
            .unwrap()
            .push_back((delay, response));
    }

    pub fn push_room(&self, room_id: &str, response: Result<Room, FetchError>) {
        self.rooms
            .lock()
            .unwrap()
            .entry(room_id.to_string())
            .or_default()
            .push_back(response);
    }

    pub fn delay_room(&self, room_id: &str, delay: Duration) {
        self.room_delays
            .lock()
            .unwrap()
            .insert(room_id.to_string(), delay);
    }

    pub fn request_calls(&self) -> usize {
        self.request_calls.load(Ordering::SeqCst)
    }

    /// Room ids requested so far, in call order
    pub fn room_calls(&self) -> Vec<String> {
        self.room_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RentalApi for FakeApi {
    async fn rental_requests(&self) -> Result<Vec<RentalRequest>, FetchError> {
        self.request_calls.fetch_add(1, Ordering::SeqCst);
        let (delay, response) = {
            let mut queue = self.request_responses.lock().unwrap();
            if queue.len() > 1 {
                queue.pop_front().unwrap()
            } else {
                queue
                    .front()
                    .cloned()
                    .unwrap_or((Duration::ZERO, Ok(Vec::new())))
            }
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        response
    }

    async fn room(&self, room_id: &str) -> Result<Room, FetchError> {
        self.room_calls.lock().unwrap().push(room_id.to_string());
        let delay = self.room_delays.lock().unwrap().get(room_id).copied();
        let response = {
            let mut rooms = self.rooms.lock().unwrap();
            match rooms.get_mut(room_id) {
                Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
                Some(queue) => queue
                    .front()
                    .cloned()
                    .unwrap_or_else(|| Err(FetchError::status(404, "not found"))),
                None => Err(FetchError::status(404, "not found")),
            }
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        response
    }
}

/// Runtime, config and API shared by one screen under test
pub struct Harness {
    pub runtime: Runtime,
    pub config: Config,
    pub fake: Arc<FakeApi>,
    pub api: Arc<dyn RentalApi>,
}

impl Harness {
    pub fn new() -> Self {
        let fake = Arc::new(FakeApi::new());
        let api: Arc<dyn RentalApi> = fake.clone();
        Self {
            runtime: Runtime::new().unwrap(),
            config: Config::default(),
            fake,
            api,
        }
    }

    pub fn ctx(&self) -> ScreenContext<'_> {
        ScreenContext::new(&self.config, self.runtime.handle(), &self.api)
    }
}

/// App wired to a fresh `FakeApi`, with its config saved under `config_path`
pub fn app_with_fake(config_path: std::path::PathBuf) -> (App, Arc<FakeApi>) {
    let fake = Arc::new(FakeApi::new());
    let api: Arc<dyn RentalApi> = fake.clone();
    let app = App::with_api(Config::default(), config_path, api).unwrap();
    (app, fake)
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn char_key(c: char) -> Event {
    key(KeyCode::Char(c))
}

/// Tick `screen` until `done` holds; returns `false` on timeout
pub fn tick_until<S: Screen>(screen: &mut S, mut done: impl FnMut(&S) -> bool) -> bool {
    let deadline = std::time::Instant::now() + SETTLE_TIMEOUT;
    loop {
        screen.tick();
        if done(screen) {
            return true;
        }
        if std::time::Instant::now() > deadline {
            return false;
        }
        std::thread::sleep(SETTLE_STEP);
    }
}

pub fn app_tick_until(app: &mut App, mut done: impl FnMut(&App) -> bool) -> bool {
    let deadline = std::time::Instant::now() + SETTLE_TIMEOUT;
    loop {
        app.tick();
        if done(app) {
            return true;
        }
        if std::time::Instant::now() > deadline {
            return false;
        }
        std::thread::sleep(SETTLE_STEP);
    }
}

/// Block until `done` holds, without ticking anything
pub fn wait_for(mut done: impl FnMut() -> bool) -> bool {
    let deadline = std::time::Instant::now() + SETTLE_TIMEOUT;
    while !done() {
        if std::time::Instant::now() > deadline {
            return false;
        }
        std::thread::sleep(SETTLE_STEP);
    }
    true
}

/// Keep ticking for `duration`, for checks that nothing changes
pub fn tick_for<S: Screen>(screen: &mut S, duration: Duration) {
    let deadline = std::time::Instant::now() + duration;
    while std::time::Instant::now() < deadline {
        screen.tick();
        std::thread::sleep(SETTLE_STEP);
    }
}

pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

pub fn render_screen<S: Screen>(screen: &mut S, config: &Config, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            let ctx = RenderContext::new(config);
            screen.render(frame, frame.area(), &ctx).unwrap();
        })
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame).unwrap()).unwrap();
    buffer_text(terminal.backend().buffer())
}

pub fn request(id: &str, room_id: &str, status: RequestStatus) -> RentalRequest {
    RentalRequest {
        room_request_id: id.to_string(),
        room_id: room_id.to_string(),
        status,
        date_want_to_rent: Some("2024-01-01".to_string()),
        month_want_rent: Some(6),
        message: None,
        created_at: Some("2023-12-01T08:30:00".to_string()),
    }
}

pub fn room(id: &str, number: &str, price: f64) -> Room {
    serde_json::from_value(serde_json::json!({
        "roomId": id,
        "roomNumber": number,
        "description": format!("Room {} description", number),
        "roomPrices": [{"price": price, "applyDate": "2024-01-01"}],
        "roomImages": [{"imageUrl": format!("https://cdn.example/{}.jpg", id)}],
        "latitude": 10.77,
        "longitude": 106.70
    }))
    .unwrap()
}

pub fn pins() -> Vec<RoomPin> {
    vec![
        RoomPin::new("room-a", 10.762, 106.660),
        RoomPin::new("room-b", 10.776, 106.700),
        RoomPin::new("room-c", 21.028, 105.834),
    ]
}
