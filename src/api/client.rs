use crate::api::models::{ApiEnvelope, RentalRequest, Room};
use crate::api::FetchError;
use crate::credentials::TokenStore;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const USER_AGENT: &str = "roomrent";

/// Backend operations the screens depend on.
#[async_trait]
pub trait RentalApi: Send + Sync {
    /// `GET /customerrequestrent/room-rent-request` for the signed-in user
    async fn rental_requests(&self) -> Result<Vec<RentalRequest>, FetchError>;

    /// `GET /room/rooms/{roomId}`
    async fn room(&self, room_id: &str) -> Result<Room, FetchError>;
}

/// reqwest-backed client for the rental backend
pub struct RentalClient {
    http_client: Client,
    api_base: String,
    tokens: Arc<dyn TokenStore>,
}

impl RentalClient {
    /// Create a new client rooted at `api_base` (e.g. `https://api.example.com/api`)
    pub fn new(api_base: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http_client: Client::new(),
            api_base: api_base.into(),
            tokens,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Append path segments to the API base, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let invalid = || FetchError::Transport(format!("Invalid API base URL: {}", self.api_base));
        let mut url = Url::parse(&self.api_base).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        token: Option<&str>,
    ) -> Result<T, FetchError> {
        info!("GET {}", url);

        let mut request = self
            .http_client
            .get(url.clone())
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            FetchError::from_reqwest(&e)
        })?;

        let status = response.status();
        debug!("Response from {}: {}", url, status);

        let body = response.text().await.map_err(|e| {
            error!("Failed to read body from {}: {}", url, e);
            FetchError::from_reqwest(&e)
        })?;

        if !status.is_success() {
            error!("GET {} returned {}: {}", url, status, body);
            return Err(FetchError::status(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to decode response from {}: {}", url, e);
            FetchError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl RentalApi for RentalClient {
    async fn rental_requests(&self) -> Result<Vec<RentalRequest>, FetchError> {
        let Some(token) = self.tokens.token() else {
            warn!("No session token available for rental requests");
            return Err(FetchError::MissingCredential);
        };

        let url = self.endpoint(&["customerrequestrent", "room-rent-request"])?;
        let envelope: ApiEnvelope<Vec<RentalRequest>> = self.get_json(url, Some(&token)).await?;
        let requests = envelope.into_result().inspect_err(|e| {
            error!("Rental requests rejected by backend: {}", e);
        })?;

        info!("Loaded {} rental requests", requests.len());
        Ok(requests)
    }

    async fn room(&self, room_id: &str) -> Result<Room, FetchError> {
        let url = self.endpoint(&["room", "rooms", room_id])?;
        // Room detail is public; attach the token only when we have one.
        let token = self.tokens.token();
        let room: Room = self.get_json(url, token.as_deref()).await?;
        info!("Loaded room {}", room.room_id);
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticTokenStore;

    fn client(base: &str) -> RentalClient {
        RentalClient::new(base, Arc::new(StaticTokenStore::with_token("t")))
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let url = client("https://api.example.com/api/")
            .endpoint(&["room", "rooms", "abc"])
            .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/room/rooms/abc");
    }

    #[test]
    fn test_endpoint_encodes_room_id() {
        let url = client("https://api.example.com")
            .endpoint(&["room", "rooms", "a/b c"])
            .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/room/rooms/a%2Fb%20c");
    }

    #[test]
    fn test_invalid_base_is_transport_error() {
        let err = client("not a url").endpoint(&["room"]).unwrap_err();
        assert_eq!(err.kind(), "transport");
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_network() {
        // Unroutable base: if the client tried the network this would be a transport error
        let client = RentalClient::new("http://127.0.0.1:9", Arc::new(StaticTokenStore::empty()));
        let err = client.rental_requests().await.unwrap_err();
        assert_eq!(err, FetchError::MissingCredential);
    }
}
