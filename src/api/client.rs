use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use super::types::{BuyRequest, ErrorBody, ItemActionRequest, LoginRequest, Session};
use crate::domain::{
    EquippedItem, InventoryEntry, InventoryId, ItemId, Pet, PetItem, PetView, Profile, Purchase,
};
use crate::error::{ApiError, Result};
use crate::port::outbound::api::PetApi;

/// `reqwest` client for the habit-pet REST API.
#[derive(Clone)]
pub struct HttpPetApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpPetApi {
    /// Create an unauthenticated client for the API rooted at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the URL does not parse or the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Authenticate every following request with `token`.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange email and password for a session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        info!(email = %email, "Logging in");
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = self.client.post(self.url("/auth/login")).json(&body);
        Self::decode(request.send().await?).await
    }

    /// Check `GET /healthz`.
    pub async fn health(&self) -> Result<()> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::failure(response).await.into())
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        let response = self.authorize(self.client.get(&url)).send().await?;
        Self::decode(response).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "POST");
        let response = self
            .authorize(self.client.post(&url))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::failure(response).await.into());
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Turn a non-2xx response into an [`ApiError`], keeping the server's
    /// `{ "message" }` when the body has one.
    async fn failure(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let message = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .map(|body| body.message),
            Err(_) => None,
        };
        debug!(status, message = ?message, "API call failed");
        ApiError { status, message }
    }
}

#[async_trait]
impl PetApi for HttpPetApi {
    async fn profile(&self) -> Result<Profile> {
        self.get("/user/me").await
    }

    async fn pet(&self) -> Result<PetView> {
        self.get("/pet").await
    }

    async fn inventory(&self) -> Result<Vec<InventoryEntry>> {
        let entries: Vec<InventoryEntry> = self.get("/pet/inventory").await?;
        debug!(count = entries.len(), "Fetched inventory");
        Ok(entries)
    }

    async fn use_item(&self, entry: &InventoryId) -> Result<Pet> {
        let body = ItemActionRequest {
            user_pet_item_id: entry.clone(),
        };
        self.post("/pet/use", &body).await
    }

    async fn equip_item(&self, entry: &InventoryId) -> Result<EquippedItem> {
        let body = ItemActionRequest {
            user_pet_item_id: entry.clone(),
        };
        self.post("/pet/equip", &body).await
    }

    async fn catalog(&self) -> Result<Vec<PetItem>> {
        self.get("/shop/items").await
    }

    async fn buy(&self, item: &ItemId) -> Result<Purchase> {
        let body = BuyRequest {
            item_id: item.clone(),
        };
        self.post("/shop/buy", &body).await
    }
}

impl std::fmt::Debug for HttpPetApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPetApi")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn trailing_slash_is_dropped() {
        let api = HttpPetApi::new("http://localhost:3000/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.url("/pet"), "http://localhost:3000/pet");
    }

    #[test]
    fn rejects_unparsable_base_url() {
        let err = HttpPetApi::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }

    #[test]
    fn debug_hides_the_token() {
        let api = HttpPetApi::new("http://localhost:3000", Duration::from_secs(1))
            .unwrap()
            .with_token("secret-token");
        let shown = format!("{api:?}");
        assert!(!shown.contains("secret-token"));
        assert!(shown.contains("authenticated: true"));
    }
}
