//! Listing request models
//!
//! A request is a buyer's ask for a listing, answered by the seller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /requests/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestCreate {
    pub listing_id: String,
    pub message: String,
}

/// Body of `PUT /requests/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestUpdate {
    pub status: String,
}

/// Listing fields frozen into a request when it is made
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSnapshot {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: f64,
}

/// Request as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestResponse {
    pub id: String,
    pub listing_id: String,
    pub message: String,
    pub requester_id: String,
    pub requester_name: String,
    #[serde(default)]
    pub requester_avatar: Option<String>,
    pub requester_role: String,
    pub seller_id: String,
    pub listing_snapshot: ListingSnapshot,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Which side of a request the caller is looking from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestRole {
    /// Requests the caller made
    Requester,
    /// Requests made on the caller's listings
    Seller,
}

impl RequestRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestRole::Requester => "requester",
            RequestRole::Seller => "seller",
        }
    }
}

impl fmt::Display for RequestRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
