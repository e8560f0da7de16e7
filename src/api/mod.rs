//! Backend API layer: wire models, the HTTP client, and fetch errors.

pub mod client;
pub mod error;
pub mod models;

pub use client::{RentalApi, RentalClient};
pub use error::FetchError;
pub use models::{
    Address, ApiEnvelope, RentalRequest, RequestStatus, Room, RoomImage, RoomPin, RoomPrice,
    RoomType,
};
