//! Screen controllers for the application.
//!
//! Each screen controller owns its state and handles both rendering and
//! events. Networked screens also own their fetch slots and poll them from
//! `tick`.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      App                               │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Screen Router                    │    │
//! │  │  back stack of ScreenId                        │    │
//! │  │  current.handle_event(...) -> ScreenAction     │    │
//! │  │  every screen.tick() on each 250ms poll        │    │
//! │  └────────────────────────────────────────────────┘    │
//! │                                                        │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Screen Trait                     │    │
//! │  │  - render(frame, area, context)                │    │
//! │  │  - handle_event(event, context) -> Action      │    │
//! │  │  - tick() -> bool                              │    │
//! │  │  - on_enter / on_exit                          │    │
//! │  └────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod info;
pub mod main_menu;
pub mod map;
pub mod request_list;
pub mod room_detail;
pub mod screen_trait;

pub use info::{InfoAction, InfoContent, InfoScreen, InfoSection};
pub use main_menu::MainMenuScreen;
pub use map::MapScreen;
pub use request_list::RequestListScreen;
pub use room_detail::RoomDetailScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
