//! Listings and favorites API

use crate::models::{FavoriteToggle, ListingCreate, ListingResponse, ListingUpdate};
use crate::services::{ApiClient, RequestOptions};
use crate::utils::error::AppResult;
use crate::utils::validation::{validate_images, validate_listing};
use reqwest::Method;

#[derive(Debug, Clone)]
pub struct ListingApi {
    client: ApiClient,
}

impl ListingApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /listings/`
    ///
    /// Fails with a validation error, without calling the server, when the
    /// listing has no images or more than three.
    pub async fn create_listing(&self, listing: &ListingCreate) -> AppResult<ListingResponse> {
        validate_listing(listing)?;
        self.client.send_json(Method::POST, "/listings/", listing).await
    }

    /// `GET /listings/{id}`
    pub async fn get_listing(&self, id: &str) -> AppResult<ListingResponse> {
        self.client.get(&format!("/listings/{}", id)).await
    }

    /// `GET /listings/me`
    pub async fn get_my_listings(&self) -> AppResult<Vec<ListingResponse>> {
        self.client.get("/listings/me").await
    }

    /// `GET /listings/suggested`
    pub async fn get_suggested_listings(&self) -> AppResult<Vec<ListingResponse>> {
        self.client.get("/listings/suggested").await
    }

    /// `GET /listings/?q=`
    pub async fn get_listings(&self, query: Option<&str>) -> AppResult<Vec<ListingResponse>> {
        let mut options = RequestOptions::get();
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            options = options.query("q", q);
        }
        self.client.request("/listings/", options).await
    }

    /// `PATCH /listings/{id}` with only the fields set in `update`
    pub async fn update_listing(&self, id: &str, update: &ListingUpdate) -> AppResult<ListingResponse> {
        if let Some(images) = &update.images {
            validate_images(images)?;
        }
        self.client
            .send_json(Method::PATCH, &format!("/listings/{}", id), update)
            .await
    }

    /// `GET /listings/favorites`
    pub async fn get_favorites(&self) -> AppResult<Vec<ListingResponse>> {
        self.client.get("/listings/favorites").await
    }

    /// `POST /listings/{id}/favorite`, returning the resulting state
    pub async fn toggle_favorite(&self, id: &str) -> AppResult<FavoriteToggle> {
        self.client
            .request(&format!("/listings/{}/favorite", id), RequestOptions::new(Method::POST))
            .await
    }
}
