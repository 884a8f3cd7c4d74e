//! Listing models

use super::location::Location;
use serde::{Deserialize, Serialize};

/// Listing creation body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingCreate {
    pub title: String,
    pub description: String,
    /// Base64 data URLs
    pub images: Vec<String>,
    pub category: String,
    /// Listing kind, e.g. `"sale"` or `"donation"`
    #[serde(rename = "type")]
    pub listing_type: String,
    pub price: f64,
    pub currency: String,
    pub location: Location,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone_number: Option<String>,
}

impl Default for ListingCreate {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            images: Vec::new(),
            category: "other".to_string(),
            listing_type: "sale".to_string(),
            price: 0.0,
            currency: "TRY".to_string(),
            location: Location::default(),
            status: "active".to_string(),
            phone_number: None,
        }
    }
}

/// Listing as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: String,
    #[serde(rename = "type")]
    pub listing_type: String,
    pub price: f64,
    pub currency: String,
    pub location: Location,
    pub status: String,
    pub owner_id: String,
    pub owner_name: String,
    #[serde(default)]
    pub owner_avatar: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Partial listing update; only the fields that are set are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub listing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Result of toggling a favorite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteToggle {
    pub listing_id: String,
    pub is_favorite: bool,
}
