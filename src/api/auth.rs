//! Authentication API
//!
//! Login and register persist the returned credential before handing it back;
//! logout is purely local.

use crate::credentials::TokenStore;
use crate::models::{Token, UserLogin, UserRegister, UserResponse};
use crate::services::ApiClient;
use crate::utils::error::AppResult;
use crate::utils::logging::redact_token;
use reqwest::Method;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
    tokens: Arc<TokenStore>,
    ttl_days: u32,
}

impl AuthApi {
    pub fn new(client: ApiClient, tokens: Arc<TokenStore>, ttl_days: u32) -> Self {
        Self { client, tokens, ttl_days }
    }

    /// `POST /auth/login`
    pub async fn login(&self, data: &UserLogin) -> AppResult<Token> {
        let token: Token = self.client.send_json(Method::POST, "/auth/login", data).await?;
        self.persist(&token)?;
        info!("Logged in as {}", data.identifier);
        Ok(token)
    }

    /// `POST /auth/register`
    pub async fn register(&self, data: &UserRegister) -> AppResult<Token> {
        let token: Token = self.client.send_json(Method::POST, "/auth/register", data).await?;
        self.persist(&token)?;
        info!("Registered {}", data.username);
        Ok(token)
    }

    /// `GET /users/me`
    pub async fn get_me(&self) -> AppResult<UserResponse> {
        self.client.get("/users/me").await
    }

    /// Forget the credential locally; the server is not called
    pub fn logout(&self) {
        if let Err(e) = self.tokens.clear() {
            warn!("Failed to clear credential on logout: {}", e);
        }
        info!("Logged out");
    }

    fn persist(&self, token: &Token) -> AppResult<()> {
        info!("Persisting credential {}", redact_token(&token.access_token));
        self.tokens.set_token(token, self.ttl_days)
    }
}
