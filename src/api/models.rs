//! Wire models for the rental backend.
//!
//! Field names follow the backend's camelCase JSON. Everything here is
//! read-only from the client's point of view.

use crate::api::FetchError;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Success envelope wrapping list responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub is_success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T: Default> ApiEnvelope<T> {
    /// Collapse the envelope into its payload, or a `Rejected` error when the
    /// backend flagged a logical failure.
    pub fn into_result(self) -> std::result::Result<T, FetchError> {
        if self.is_success {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(FetchError::Rejected {
                message: self
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "The request was not successful".to_string()),
            })
        }
    }
}

/// Status of a rental request as decided by the landlord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    #[default]
    Unknown,
}

impl RequestStatus {
    /// Human-readable label used on badges
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Unknown => "Unknown",
        }
    }

    fn from_code(code: i64) -> Self {
        match code {
            0 => RequestStatus::Pending,
            1 => RequestStatus::Approved,
            2 => RequestStatus::Rejected,
            _ => RequestStatus::Unknown,
        }
    }

    fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "pending" => RequestStatus::Pending,
            "approved" | "accepted" => RequestStatus::Approved,
            "rejected" | "denied" => RequestStatus::Rejected,
            other => match other.parse::<i64>() {
                Ok(code) => Self::from_code(code),
                Err(_) => RequestStatus::Unknown,
            },
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// The backend has shipped both enum names and numeric codes for this field.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatus {
    Code(i64),
    Name(String),
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match Option::<RawStatus>::deserialize(deserializer)? {
            Some(RawStatus::Code(code)) => Self::from_code(code),
            Some(RawStatus::Name(name)) => Self::from_name(&name),
            None => RequestStatus::Unknown,
        })
    }
}

impl Serialize for RequestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A rental request made by the signed-in customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub room_request_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub room_id: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub date_want_to_rent: Option<String>,
    #[serde(default)]
    pub month_want_rent: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPrice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default)]
    pub apply_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub ward: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl Address {
    /// Join the non-empty components into a single display line
    pub fn display_line(&self) -> Option<String> {
        let street = match (self.house_number.as_deref(), self.street.as_deref()) {
            (Some(n), Some(s)) if !n.trim().is_empty() => Some(format!("{} {}", n.trim(), s.trim())),
            (_, Some(s)) => Some(s.trim().to_string()),
            (Some(n), None) => Some(n.trim().to_string()),
            (None, None) => None,
        };

        let parts: Vec<String> = [street, self.ward.clone(), self.district.clone(), self.city.clone()]
            .into_iter()
            .flatten()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    #[serde(default)]
    pub room_type_name: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomImage {
    #[serde(default, alias = "url")]
    pub image_url: Option<String>,
}

/// Full room record as returned by `GET /room/rooms/{roomId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(alias = "id")]
    pub room_id: String,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub room_prices: Vec<RoomPrice>,
    #[serde(default)]
    pub room_type: Option<RoomType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub room_images: Vec<RoomImage>,
}

impl Room {
    /// Price shown to the user: the first listed price entry.
    pub fn current_price(&self) -> Option<f64> {
        self.room_prices.first().map(|p| p.price)
    }

    pub fn address_line(&self) -> Option<String> {
        self.room_type
            .as_ref()
            .and_then(|t| t.address.as_ref())
            .and_then(Address::display_line)
    }

    /// Image URLs in listing order, skipping entries without one
    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.room_images
            .iter()
            .filter_map(|i| i.image_url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls().next()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.room_type
            .as_ref()
            .and_then(|t| t.room_type_name.as_deref())
    }

    /// Title line: room type and number when known, otherwise the id.
    pub fn title(&self) -> String {
        match (self.type_name(), self.room_number.as_deref()) {
            (Some(kind), Some(number)) => format!("{} · Room {}", kind, number),
            (Some(kind), None) => kind.to_string(),
            (None, Some(number)) => format!("Room {}", number),
            (None, None) => format!("Room {}", crate::utils::short_id(&self.room_id)),
        }
    }
}

/// A room location handed to the map screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPin {
    #[serde(alias = "id")]
    pub room_id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub label: Option<String>,
}

impl RoomPin {
    pub fn new(room_id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            room_id: room_id.into(),
            latitude,
            longitude,
            label: None,
        }
    }

    /// Load a JSON array of pins from disk
    pub fn load_all(path: &Path) -> Result<Vec<RoomPin>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read room list: {:?}", path))?;
        let pins: Vec<RoomPin> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse room list: {:?}", path))?;
        Ok(pins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rental_request_from_backend_json() {
        let json = r#"{
            "roomRequestId": "abc12345-0000-4000-8000-000000000001",
            "roomId": "room-1",
            "status": "Pending",
            "dateWantToRent": "2024-01-01",
            "monthWantRent": 6,
            "message": "hi",
            "createdAt": "2023-12-01"
        }"#;
        let request: RentalRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.month_want_rent, Some(6));
        assert_eq!(request.room_id, "room-1");
    }

    #[test]
    fn test_status_accepts_codes_names_and_null() {
        let parse = |raw: &str| -> RequestStatus { serde_json::from_str(raw).unwrap() };
        assert_eq!(parse("1"), RequestStatus::Approved);
        assert_eq!(parse("\"REJECTED\""), RequestStatus::Rejected);
        assert_eq!(parse("\"0\""), RequestStatus::Pending);
        assert_eq!(parse("null"), RequestStatus::Unknown);
        assert_eq!(parse("\"archived\""), RequestStatus::Unknown);
        assert_eq!(parse("9"), RequestStatus::Unknown);
    }

    #[test]
    fn test_missing_status_defaults_to_unknown() {
        let request: RentalRequest =
            serde_json::from_str(r#"{"roomRequestId": "x", "roomId": null}"#).unwrap();
        assert_eq!(request.status, RequestStatus::Unknown);
        assert!(request.room_id.is_empty());
    }

    #[test]
    fn test_envelope_failure_becomes_rejected() {
        let envelope: ApiEnvelope<Vec<RentalRequest>> =
            serde_json::from_str(r#"{"isSuccess": false, "message": "Token expired"}"#).unwrap();
        match envelope.into_result() {
            Err(FetchError::Rejected { message }) => assert_eq!(message, "Token expired"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_envelope_success_without_data_is_empty() {
        let envelope: ApiEnvelope<Vec<RentalRequest>> =
            serde_json::from_str(r#"{"isSuccess": true, "data": null}"#).unwrap();
        assert!(envelope.into_result().unwrap().is_empty());
    }

    #[test]
    fn test_room_nested_fields() {
        let json = r#"{
            "roomId": "r-1",
            "roomNumber": "204",
            "description": "Bright room",
            "roomPrices": [{"price": 3500000, "applyDate": "2024-01-01"}],
            "roomType": {
                "roomTypeName": "Studio",
                "address": {"houseNumber": "12", "street": "Le Loi", "ward": null, "district": "District 1", "city": "HCMC"}
            },
            "roomImages": [{"imageUrl": "https://cdn.example/r1.jpg"}]
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.current_price(), Some(3_500_000.0));
        assert_eq!(
            room.address_line().as_deref(),
            Some("12 Le Loi, District 1, HCMC")
        );
        assert_eq!(room.primary_image(), Some("https://cdn.example/r1.jpg"));
        assert_eq!(room.title(), "Studio · Room 204");
    }

    #[test]
    fn test_room_tolerates_null_collections() {
        let room: Room =
            serde_json::from_str(r#"{"roomId": "r-2", "roomPrices": null, "roomImages": null}"#)
                .unwrap();
        assert!(room.room_prices.is_empty());
        assert!(room.primary_image().is_none());
        assert!(room.address_line().is_none());
    }

    #[test]
    fn test_room_skips_images_without_url() {
        let room: Room = serde_json::from_str(
            r#"{"roomId": "r1", "roomPrices": [{"price": 1}],
                "roomImages": [{"imageUrl": null}, {}, {"imageUrl": "https://cdn.example/r1.jpg"}]}"#,
        )
        .unwrap();
        assert_eq!(room.room_images.len(), 3);
        assert_eq!(room.primary_image(), Some("https://cdn.example/r1.jpg"));
        assert_eq!(room.image_urls().count(), 1);
    }
}
