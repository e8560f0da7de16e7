//! Application services layer.
//!
//! Services sit between the screens and the backend client. Screens never
//! await network calls themselves; they hand futures to a service and poll
//! for the outcome on each UI tick.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   UI Layer                      │
//! │  (App, Screens, Components)                     │
//! └─────────────────────┬───────────────────────────┘
//!                       │ start / poll
//!                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │               Services Layer                    │
//! │  FetchSlot (generation-stamped oneshot fetches) │
//! └─────────────────────┬───────────────────────────┘
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │             Infrastructure Layer                │
//! │  (RentalClient, TokenStore, Config)             │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod fetch_service;

pub use fetch_service::{FetchHandle, FetchSlot, Loadable};
