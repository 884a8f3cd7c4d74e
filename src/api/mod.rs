//! Domain API modules
//!
//! One type per resource family of the marketplace API. Every method is
//! exactly one request/response round trip through [`ApiClient`].

pub mod auth;
pub mod chats;
pub mod listings;
pub mod locations;
pub mod notifications;
pub mod requests;
pub mod users;

pub use auth::AuthApi;
pub use chats::ChatApi;
pub use listings::ListingApi;
pub use locations::LocationApi;
pub use notifications::NotificationApi;
pub use requests::RequestApi;
pub use users::UserApi;

use crate::config::Settings;
use crate::credentials::{CredentialProvider, StaticToken, TokenStore};
use crate::services::ApiClient;
use crate::utils::error::AppResult;
use std::sync::Arc;

/// Entry point bundling the request client, token store and domain APIs
#[derive(Debug, Clone)]
pub struct LoopaClient {
    client: ApiClient,
    locations: LocationApi,
    tokens: Arc<TokenStore>,
    ttl_days: u32,
}

impl LoopaClient {
    /// Create a client whose requests read their token from `tokens`
    pub fn new(settings: &Settings, tokens: Arc<TokenStore>) -> AppResult<Self> {
        let provider: Arc<dyn CredentialProvider> = tokens.clone();
        let client = ApiClient::new(settings, provider)?;

        // The province service is public and must never see the bearer token
        let anonymous: Arc<dyn CredentialProvider> = Arc::new(StaticToken(None));
        let provinces = ApiClient::with_base_url(settings, settings.api.provinces_url.clone(), anonymous)?;

        Ok(Self {
            client,
            locations: LocationApi::new(provinces),
            tokens,
            ttl_days: settings.credentials.ttl_days,
        })
    }

    /// Create a client backed by the configured file store and cookie
    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        let tokens = Arc::new(TokenStore::from_settings(settings)?);
        Self::new(settings, tokens)
    }

    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    pub fn tokens(&self) -> &Arc<TokenStore> {
        &self.tokens
    }

    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.client.clone(), self.tokens.clone(), self.ttl_days)
    }

    pub fn users(&self) -> UserApi {
        UserApi::new(self.client.clone())
    }

    pub fn listings(&self) -> ListingApi {
        ListingApi::new(self.client.clone())
    }

    pub fn chats(&self) -> ChatApi {
        ChatApi::new(self.client.clone())
    }

    pub fn requests(&self) -> RequestApi {
        RequestApi::new(self.client.clone())
    }

    pub fn notifications(&self) -> NotificationApi {
        NotificationApi::new(self.client.clone())
    }

    pub fn locations(&self) -> LocationApi {
        self.locations.clone()
    }
}
