//! roomrent - terminal client for a room-rental service
//!
//! Lists the signed-in customer's rental requests, shows house-rules and
//! safety guidance, and places rooms on a map with a detail modal. Data
//! comes from the rental backend's REST API.

pub mod api;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod credentials;
pub mod geo;
pub mod icons;
pub mod keymap;
pub mod screens;
pub mod services;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

pub use config::Config;

pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
