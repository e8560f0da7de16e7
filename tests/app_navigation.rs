mod common;

use common::{app_tick_until, app_with_fake, char_key, key, pins, render_app, request, room};
use crossterm::event::KeyCode;
use roomrent::api::{FetchError, RequestStatus};
use roomrent::config::Config;
use roomrent::keymap::KeymapPreset;
use roomrent::ui::Screen as ScreenId;
use roomrent::widgets::ToastVariant;
use tempfile::TempDir;

#[test]
fn test_menu_to_requests_to_room_and_back() {
    let temp_dir = TempDir::new().unwrap();
    let (mut app, fake) = app_with_fake(temp_dir.path().join("config.toml"));
    fake.push_requests(Ok(vec![request("req-1", "room-1", RequestStatus::Approved)]));
    fake.push_room("room-1", Ok(room("room-1", "101", 2_500_000.0)));

    app.start().unwrap();
    assert_eq!(app.current_screen(), ScreenId::MainMenu);
    assert_eq!(fake.request_calls(), 0);

    // First menu entry is the request list
    app.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(app.current_screen(), ScreenId::RequestList);
    assert!(app_tick_until(&mut app, |a| a.request_list().state().value().is_some()));
    assert_eq!(fake.request_calls(), 1);

    app.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(app.current_screen(), ScreenId::RoomDetail);
    assert_eq!(app.room_detail().room_id(), Some("room-1"));
    assert!(app_tick_until(&mut app, |a| a.room_detail().state().value().is_some()));

    let out = render_app(&mut app, 100, 40);
    assert!(out.contains("Room 101"));
    assert!(out.contains("2,500,000"));

    app.handle_event(key(KeyCode::Esc)).unwrap();
    assert_eq!(app.current_screen(), ScreenId::RequestList);
    assert!(app.room_detail().state().is_idle());

    app.handle_event(key(KeyCode::Esc)).unwrap();
    assert_eq!(app.current_screen(), ScreenId::MainMenu);
    assert!(app.history().is_empty());
}

#[test]
fn test_start_on_room_goes_back_to_menu() {
    let temp_dir = TempDir::new().unwrap();
    let (mut app, fake) = app_with_fake(temp_dir.path().join("config.toml"));
    fake.push_room("room-9", Err(FetchError::status(404, "")));

    app.start_on_room("room-9");
    app.start().unwrap();
    assert_eq!(app.current_screen(), ScreenId::RoomDetail);
    assert!(app_tick_until(&mut app, |a| a.room_detail().state().is_errored()));

    let out = render_app(&mut app, 100, 30);
    assert!(out.contains("Server returned HTTP 404"));

    app.handle_event(key(KeyCode::Esc)).unwrap();
    assert_eq!(app.current_screen(), ScreenId::MainMenu);
}

#[test]
fn test_map_marker_opens_room_detail() {
    let temp_dir = TempDir::new().unwrap();
    let (mut app, fake) = app_with_fake(temp_dir.path().join("config.toml"));
    fake.push_room("room-a", Ok(room("room-a", "101", 1_000_000.0)));

    app.set_map_rooms(pins());
    app.start_on(ScreenId::Map);
    app.start().unwrap();

    app.handle_event(key(KeyCode::Enter)).unwrap();
    assert!(app_tick_until(&mut app, |a| a.map().detail_state().value().is_some()));

    app.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(app.current_screen(), ScreenId::RoomDetail);
    assert_eq!(app.room_detail().room_id(), Some("room-a"));
    assert_eq!(app.history(), [ScreenId::MainMenu, ScreenId::Map]);
}

#[test]
fn test_emergency_button_shows_toast() {
    let temp_dir = TempDir::new().unwrap();
    let (mut app, _fake) = app_with_fake(temp_dir.path().join("config.toml"));
    app.start_on(ScreenId::Safety);
    app.start().unwrap();

    app.handle_event(key(KeyCode::Enter)).unwrap();
    let toast = app.toasts().current().unwrap();
    assert!(toast.message.contains("113"));
    assert_eq!(app.current_screen(), ScreenId::Safety);
}

#[test]
fn test_help_overlay_switches_and_saves_preset() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let (mut app, _fake) = app_with_fake(config_path.clone());
    app.start().unwrap();

    app.handle_event(char_key('?')).unwrap();
    assert!(app.is_help_visible());
    let out = render_app(&mut app, 120, 40);
    assert!(out.contains("Keyboard Shortcuts"));

    app.handle_event(char_key('2')).unwrap();
    assert!(app.is_help_visible());
    assert_eq!(app.config().keymap.preset, KeymapPreset::Vim);
    let saved = Config::load_or_create(&config_path).unwrap();
    assert_eq!(saved.keymap.preset, KeymapPreset::Vim);
    let toast = app.toasts().current().unwrap();
    assert_eq!(toast.variant, ToastVariant::Success);
    assert_eq!(toast.message, "Keymap: Vim");

    app.handle_event(key(KeyCode::Esc)).unwrap();
    assert!(!app.is_help_visible());
    assert!(!app.should_quit());

    // Vim bindings now drive the menu
    app.handle_event(char_key('j')).unwrap();
    app.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(app.current_screen(), ScreenId::Map);
}

#[test]
fn test_quit_from_menu() {
    let temp_dir = TempDir::new().unwrap();
    let (mut app, _fake) = app_with_fake(temp_dir.path().join("config.toml"));
    app.start().unwrap();

    app.handle_event(char_key('q')).unwrap();
    assert!(app.should_quit());
}
