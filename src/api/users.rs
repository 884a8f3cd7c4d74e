//! User profile API

use crate::models::{UserResponse, UserUpdate};
use crate::services::ApiClient;
use crate::utils::error::AppResult;
use reqwest::Method;

#[derive(Debug, Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /users/me`
    pub async fn get_me(&self) -> AppResult<UserResponse> {
        self.client.get("/users/me").await
    }

    /// `GET /users/{uid}`
    pub async fn get_user(&self, uid: &str) -> AppResult<UserResponse> {
        self.client.get(&format!("/users/{}", uid)).await
    }

    /// `PUT /users/me`; only the fields set in `update` are sent
    pub async fn update_me(&self, update: &UserUpdate) -> AppResult<UserResponse> {
        self.client.send_json(Method::PUT, "/users/me", update).await
    }
}
