//! Listing request API

use crate::models::{RequestCreate, RequestResponse, RequestRole, RequestUpdate};
use crate::services::{ApiClient, RequestOptions};
use crate::utils::error::AppResult;
use crate::utils::validation::validate_request;
use reqwest::Method;

#[derive(Debug, Clone)]
pub struct RequestApi {
    client: ApiClient,
}

impl RequestApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /requests/`
    pub async fn create_request(&self, data: &RequestCreate) -> AppResult<RequestResponse> {
        validate_request(data)?;
        self.client.send_json(Method::POST, "/requests/", data).await
    }

    /// `GET /requests/?role=requester|seller`
    pub async fn get_requests(&self, role: RequestRole) -> AppResult<Vec<RequestResponse>> {
        self.client
            .request("/requests/", RequestOptions::get().query("role", role.as_str()))
            .await
    }

    /// `PUT /requests/{id}/status`
    pub async fn update_request_status(&self, id: &str, status: &str) -> AppResult<RequestResponse> {
        let body = RequestUpdate {
            status: status.to_string(),
        };
        self.client
            .send_json(Method::PUT, &format!("/requests/{}/status", id), &body)
            .await
    }
}
