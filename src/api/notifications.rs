//! Notification API

use crate::models::NotificationResponse;
use crate::services::{ApiClient, RequestOptions};
use crate::utils::error::AppResult;
use reqwest::Method;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct NotificationApi {
    client: ApiClient,
}

impl NotificationApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /notifications/`
    pub async fn get_my_notifications(&self) -> AppResult<Vec<NotificationResponse>> {
        self.client.get("/notifications/").await
    }

    /// `PUT /notifications/{id}/read`
    // The server's acknowledgement shape is not fixed, so it is returned raw
    pub async fn mark_read(&self, id: &str) -> AppResult<Value> {
        self.client
            .request(&format!("/notifications/{}/read", id), RequestOptions::new(Method::PUT))
            .await
    }
}
